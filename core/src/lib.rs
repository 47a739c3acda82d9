//! Application-architecture toolkit: typed pipes + a declarative JSON
//! service pipeline.
//!
//! # Overview
//! [`JsonService`] maps an HTTP verb, a `{name}` path template, and two
//! injected collaborators (a [`RestClient`] and a [`Connectivity`] probe)
//! onto a single `request()` call producing exactly one [`Outcome`]:
//! connectivity pre-check, request-mapping validation, dispatch, response
//! classification, JSON decode, and typed model construction, in that
//! order, short-circuiting at the first failure.
//!
//! The [`pipe`] module is an independent reactive primitive — typed,
//! closable publish channels used elsewhere in the framework to connect
//! presentation code to logic controllers.
//!
//! # Design
//! - The service is stateless per endpoint; collaborators are shared
//!   behind `Arc<dyn ...>` and doubles slot in for tests.
//! - Request/response models are serde-derived structs opted in through
//!   the [`RequestModel`] / [`ResponseModel`] capability traits.
//! - The outcome enum replaces per-condition callbacks, so consumers are
//!   exhaustiveness-checked by the compiler.

pub mod connectivity;
pub mod error;
pub mod http;
pub mod model;
mod path;
pub mod pipe;
pub mod service;
pub mod view_model;

pub use connectivity::{Connectivity, ConnectivityStatus};
pub use error::{ModelError, PipeError};
pub use http::{Method, ResponseType, RestClient, RestResponse};
pub use model::{RequestModel, ResponseModel};
pub use pipe::{BroadcastEventPipe, BroadcastPipe, EventPipe, Pipe, Signal, ValidatorPipe};
pub use service::{JsonService, Outcome};
pub use view_model::{ViewModel, ViewModelPipe};
