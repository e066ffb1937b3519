//! Shared widget state.
//!
//! The state container is the only channel between controllers: they read
//! snapshots through [`StateSource`] and write through [`ActionSink`]. Both
//! capabilities are injected at construction.

mod action;
mod reducer;
mod snapshot;
mod store;

pub use action::{Action, ActionSink};
pub use reducer::reduce;
pub use snapshot::{CompilerHandle, Controls, DirectionsState, LocationQuery, WidgetSettings};
pub use store::{Listener, StateSource, Store};
