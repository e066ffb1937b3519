//! Application state for the web layer.

use std::sync::Arc;

use crate::routing::RouteService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Live or recorded route provider
    pub routes: Arc<RouteService>,
}

impl AppState {
    pub fn new(routes: RouteService) -> Self {
        Self {
            routes: Arc::new(routes),
        }
    }
}
