//! Request and response model capabilities.
//!
//! # Design
//! Models are ordinary serde-derived structs; the two traits only pin down
//! the JSON-object boundary the service pipeline works in terms of. A
//! request model renders itself to a field mapping (partially populated
//! models omit fields via `skip_serializing_if`); a response model is
//! constructed from the decoded mapping, with `#[serde(default = ...)]`
//! supplying values for fields absent in the JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ModelError;

/// Capability: render this request as a JSON field mapping.
///
/// The mapping feeds path-template resolution and becomes the request body.
/// Models must serialize to a JSON object; anything else yields an empty
/// mapping, which only a variable-free path template accepts.
pub trait RequestModel: Serialize {
    fn to_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mapping)) => mapping,
            _ => Map::new(),
        }
    }
}

/// Capability: construct a typed model from a decoded JSON mapping.
///
/// Construction failure (missing field, type mismatch) is reported
/// distinctly from syntactic JSON failure via [`ModelError`], though the
/// pipeline routes both to the same terminal outcome.
pub trait ResponseModel: DeserializeOwned + Sized {
    fn from_mapping(mapping: Map<String, Value>) -> Result<Self, ModelError> {
        serde_json::from_value(Value::Object(mapping)).map_err(|e| ModelError::Shape(e.to_string()))
    }
}

/// Decode a raw body into a JSON object mapping, keeping "not JSON at all"
/// distinct from "JSON, but not an object".
pub(crate) fn decode_object(body: &str) -> Result<Map<String, Value>, ModelError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mapping)) => Ok(mapping),
        Ok(_) => Err(ModelError::NotAnObject),
        Err(e) => Err(ModelError::Syntax(e.to_string())),
    }
}
