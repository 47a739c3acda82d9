use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

/// Payload served by the templated and untemplated item endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub field: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_field: Option<String>,
}

/// Payload echoed back by the POST endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub id: String,
}

/// Fixed endpoints, one per service-pipeline branch: templated success,
/// variable-free success, client/server error statuses, a non-JSON body,
/// and a JSON body of the wrong shape.
pub fn app() -> Router {
    Router::new()
        .route("/test", get(get_item))
        .route("/test/{id}", get(get_item_by_id))
        .route("/echo/{id}", post(echo))
        .route("/error/client", get(client_error))
        .route("/error/server", get(server_error))
        .route("/malformed", get(malformed))
        .route("/mismatch", get(mismatch))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_item() -> Json<Item> {
    Json(Item {
        field: 42,
        optional_field: None,
    })
}

/// Echoes a numeric id back as `field`; non-numeric ids map to 0.
async fn get_item_by_id(Path(id): Path<String>) -> Json<Item> {
    Json(Item {
        field: id.parse().unwrap_or(0),
        optional_field: None,
    })
}

async fn echo(Path(id): Path<String>, body: Json<serde_json::Value>) -> Response {
    if body.0.get("id").and_then(|v| v.as_str()) != Some(id.as_str()) {
        return (StatusCode::BAD_REQUEST, "path/body id mismatch").into_response();
    }
    Json(Echo { id }).into_response()
}

async fn client_error() -> Response {
    (StatusCode::BAD_REQUEST, "bad request").into_response()
}

async fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
}

async fn malformed() -> Response {
    // Deliberately not JSON.
    (StatusCode::OK, "not json").into_response()
}

async fn mismatch() -> Json<serde_json::Value> {
    // Valid JSON, wrong type for `field`.
    Json(json!({"field": "not a number"}))
}
