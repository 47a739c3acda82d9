//! Error types shared across the crate.
//!
//! # Design
//! [`ModelError`] distinguishes "the body was not JSON at all" from "the
//! JSON decoded but does not satisfy the typed model" — both route to the
//! same terminal outcome, but the cause matters in logs. [`PipeError`] is
//! deliberately opaque: pipes forward whatever the sender reports without
//! interpreting it.

use thiserror::Error;

/// Failure to produce a typed response model from a raw body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    Syntax(String),

    /// The body parsed as JSON but is not an object mapping.
    #[error("response body is not a JSON object")]
    NotAnObject,

    /// The decoded mapping does not satisfy the typed model.
    #[error("response shape mismatch: {0}")]
    Shape(String),
}

/// Error forwarded through a pipe in place of a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PipeError(pub String);

impl PipeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
