//! View-model base for UI builders.
//!
//! A view model is an immutable, equatable snapshot of presentation state.
//! UI layers compare successive values to decide whether to rebuild, so the
//! bound requires `PartialEq`; presenters publish snapshots through a
//! [`ViewModelPipe`].

use crate::pipe::BroadcastPipe;

/// Marker bound for presentation-state snapshots.
pub trait ViewModel: Clone + PartialEq + Send + 'static {}

/// Channel presenters publish view models through; UI layers subscribe.
pub type ViewModelPipe<V> = BroadcastPipe<V>;
