//! The JSON service pipeline.
//!
//! # Design
//! A [`JsonService`] is an immutable per-endpoint configuration: verb, path
//! template, and the two injected collaborators (REST client, connectivity
//! probe). It holds no mutable state, so one value is built per logical
//! endpoint and reused across requests; each `request` call runs the whole
//! lifecycle on its own local data.
//!
//! The seven-callback handler of classic service layers is replaced by the
//! [`Outcome`] enum: every request produces exactly one variant, and the
//! compiler checks the consumer handles all of them.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::connectivity::{Connectivity, ConnectivityStatus};
use crate::http::{Method, ResponseType, RestClient};
use crate::model::{self, RequestModel, ResponseModel};
use crate::path::{self, PathError};

/// Terminal result of one `request` invocation.
///
/// Variants are mutually exclusive and exhaustive: offline preempts
/// validation, validation preempts dispatch, classification preempts
/// decoding, and decode/construction failures share one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<M> {
    /// The response decoded and satisfied the typed model.
    Success(M),
    /// The client reported a non-success classification.
    HttpError { kind: ResponseType, body: String },
    /// The request mapping is malformed: an unconsumed top-level key, or a
    /// null nested inside an object or array.
    InvalidRequest(Map<String, Value>),
    /// A path placeholder had no usable value in the request mapping.
    MissingPathData(Map<String, Value>),
    /// The body was not JSON, or was JSON the model rejected.
    InvalidResponse(String),
    /// The connectivity probe reported no network. Checked first.
    Offline,
}

/// Declarative JSON endpoint: one `request` call runs connectivity check,
/// path resolution, dispatch, classification, decode, and typed
/// construction, producing a single [`Outcome`].
pub struct JsonService<M> {
    method: Method,
    path_template: String,
    client: Arc<dyn RestClient>,
    connectivity: Arc<dyn Connectivity>,
    _model: PhantomData<fn() -> M>,
}

impl<M: ResponseModel> JsonService<M> {
    pub fn new(
        method: Method,
        path_template: impl Into<String>,
        client: Arc<dyn RestClient>,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            method,
            path_template: path_template.into(),
            client,
            connectivity,
            _model: PhantomData,
        }
    }

    /// Execute the endpoint without a request model.
    ///
    /// Only valid for templates without placeholders; a placeholder against
    /// the empty mapping reports [`Outcome::MissingPathData`].
    pub async fn request(&self) -> Outcome<M> {
        self.run(Map::new()).await
    }

    /// Execute the endpoint with a request model supplying path variables
    /// and the request body.
    pub async fn request_with<R: RequestModel>(&self, model: &R) -> Outcome<M> {
        self.run(model.to_mapping()).await
    }

    async fn run(&self, mapping: Map<String, Value>) -> Outcome<M> {
        // Offline always wins, even over request validation.
        if self.connectivity.status().await == ConnectivityStatus::Offline {
            warn!(path = %self.path_template, "request skipped: offline");
            return Outcome::Offline;
        }

        let resolved = match path::resolve(&self.path_template, &mapping) {
            Ok(resolved) => resolved,
            Err(PathError::MissingData) => {
                warn!(path = %self.path_template, "unresolvable path placeholder");
                return Outcome::MissingPathData(mapping);
            }
            Err(PathError::InvalidMapping) => {
                warn!(path = %self.path_template, "malformed request mapping");
                return Outcome::InvalidRequest(mapping);
            }
        };

        debug!(method = self.method.as_str(), path = %resolved, "dispatching");
        let response = self.client.execute(self.method, &resolved, &mapping).await;

        if response.response_type != ResponseType::Success {
            warn!(path = %resolved, kind = ?response.response_type, "non-success response");
            return Outcome::HttpError {
                kind: response.response_type,
                body: response.body,
            };
        }

        let decoded = match model::decode_object(&response.body) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(path = %resolved, %err, "undecodable response body");
                return Outcome::InvalidResponse(response.body);
            }
        };

        match M::from_mapping(decoded) {
            Ok(model) => Outcome::Success(model),
            Err(err) => {
                warn!(path = %resolved, %err, "response rejected by model");
                Outcome::InvalidResponse(response.body)
            }
        }
    }
}
