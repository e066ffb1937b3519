//! Routing service access.
//!
//! [`DirectionsClient`] talks to the directions API, [`CachedDirectionsClient`]
//! wraps any [`RouteProvider`] with a TTL cache, and [`MockDirectionsClient`]
//! serves recorded responses. [`RouteService`] picks one at startup.

mod cache;
mod client;
mod error;
mod mock;

pub use cache::{CacheConfig, CachedDirectionsClient};
pub use client::{
    DEFAULT_BASE_URL, DirectionsClient, DirectionsConfig, DirectionsRequest, DirectionsResponse,
    RouteProvider,
};
pub use error::RoutingError;
pub use mock::MockDirectionsClient;

use crate::domain::Route;

/// The route provider the server was configured with.
pub enum RouteService {
    Live(CachedDirectionsClient<DirectionsClient>),
    Mock(MockDirectionsClient),
}

impl RouteProvider for RouteService {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, RoutingError> {
        match self {
            RouteService::Live(client) => client.directions(request).await,
            RouteService::Mock(client) => client.directions(request).await,
        }
    }
}
