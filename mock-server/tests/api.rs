use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn get_item_without_variables() {
    let resp = app().oneshot(get_request("/test")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Item = body_json(resp).await;
    assert_eq!(item.field, 42);
    assert!(item.optional_field.is_none());
}

#[tokio::test]
async fn get_item_echoes_numeric_id() {
    let resp = app().oneshot(get_request("/test/123")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Item = body_json(resp).await;
    assert_eq!(item.field, 123);
}

#[tokio::test]
async fn get_item_non_numeric_id_maps_to_zero() {
    let resp = app().oneshot(get_request("/test/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Item = body_json(resp).await;
    assert_eq!(item.field, 0);
}

#[tokio::test]
async fn echo_returns_the_posted_id() {
    let resp = app()
        .oneshot(json_request("POST", "/echo/abc", r#"{"id":"abc"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.id, "abc");
}

#[tokio::test]
async fn echo_rejects_mismatched_id() {
    let resp = app()
        .oneshot(json_request("POST", "/echo/abc", r#"{"id":"other"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn client_error_endpoint() {
    let resp = app().oneshot(get_request("/error/client")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(resp).await, "bad request");
}

#[tokio::test]
async fn server_error_endpoint_has_empty_body() {
    let resp = app().oneshot(get_request("/error/server")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(resp).await.is_empty());
}

#[tokio::test]
async fn malformed_endpoint_serves_non_json() {
    let resp = app().oneshot(get_request("/malformed")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn mismatch_endpoint_serves_wrongly_typed_field() {
    let resp = app().oneshot(get_request("/mismatch")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let value: serde_json::Value = body_json(resp).await;
    assert!(value["field"].is_string());
}
