//! Web layer for the directions widget.
//!
//! Proxies route requests to the configured provider and renders the
//! widget panels from posted state snapshots.

mod dto;
mod render;
mod routes;
mod state;

pub use dto::*;
pub use render::{inputs_html, instructions_html};
pub use routes::{AppError, create_router};
pub use state::AppState;
