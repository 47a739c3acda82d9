//! Transport types and the REST client seam.
//!
//! # Design
//! The service pipeline never talks to the network directly; it hands a
//! verb, a resolved path, and a JSON body to a [`RestClient`] and gets back
//! a [`RestResponse`] as plain data. Keeping the transport behind a trait
//! makes the pipeline deterministic in unit tests — doubles return canned
//! classifications without opening a socket.
//!
//! All response fields use owned types so values can be moved into the
//! terminal outcome without lifetime concerns.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Canonical wire name, used for logging and transport adapters.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Classification of a single network attempt.
///
/// `Unknown` covers both unrecognized status codes and transport-level
/// failures where no status was received at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Success,
    ClientError,
    ServerError,
    Unknown,
}

impl ResponseType {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => ResponseType::Success,
            400..=499 => ResponseType::ClientError,
            500..=599 => ResponseType::ServerError,
            _ => ResponseType::Unknown,
        }
    }
}

/// Outcome of one executed request: a classification plus the raw body.
///
/// Constructed by a [`RestClient`] implementation after the round-trip and
/// consumed by the service pipeline for decoding and model construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub response_type: ResponseType,
    pub body: String,
}

impl RestResponse {
    /// A transport-level failure: no status, no body.
    pub fn transport_failure() -> Self {
        Self {
            response_type: ResponseType::Unknown,
            body: String::new(),
        }
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations are injected into a service at construction and shared
/// across endpoints. The signature is infallible: transport failures are
/// folded into [`RestResponse::transport_failure`] so the pipeline sees
/// every attempt as a classification.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn execute(&self, method: Method, path: &str, body: &Map<String, Value>) -> RestResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_boundaries() {
        assert_eq!(ResponseType::from_status(200), ResponseType::Success);
        assert_eq!(ResponseType::from_status(299), ResponseType::Success);
        assert_eq!(ResponseType::from_status(400), ResponseType::ClientError);
        assert_eq!(ResponseType::from_status(404), ResponseType::ClientError);
        assert_eq!(ResponseType::from_status(500), ResponseType::ServerError);
        assert_eq!(ResponseType::from_status(503), ResponseType::ServerError);
    }

    #[test]
    fn redirects_and_informational_are_unknown() {
        assert_eq!(ResponseType::from_status(301), ResponseType::Unknown);
        assert_eq!(ResponseType::from_status(100), ResponseType::Unknown);
        assert_eq!(ResponseType::from_status(0), ResponseType::Unknown);
    }

    #[test]
    fn transport_failure_is_unknown_with_empty_body() {
        let response = RestResponse::transport_failure();
        assert_eq!(response.response_type, ResponseType::Unknown);
        assert!(response.body.is_empty());
    }
}
