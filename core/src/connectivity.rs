//! Connectivity probe consulted before any request leaves the pipeline.

use async_trait::async_trait;

/// Reported network reachability at the moment of the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Online,
    Offline,
}

/// Reports whether the device currently has network access.
///
/// The service queries this before doing anything else — an `Offline`
/// answer preempts request validation and the network call alike.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn status(&self) -> ConnectivityStatus;
}
