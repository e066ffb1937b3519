//! Caching layer for route requests.
//!
//! Endpoints are rounded to microdegrees before keying, so requests that
//! differ only in float noise share an entry. Failures are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Profile, Route};

use super::client::{DirectionsRequest, RouteProvider};
use super::error::RoutingError;

/// Cache key: profile plus origin and destination in microdegrees.
type RouteKey = (Profile, [i64; 4]);

type RouteEntry = Arc<Vec<Route>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Route provider with caching.
pub struct CachedDirectionsClient<P> {
    client: P,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl<P: RouteProvider> CachedDirectionsClient<P> {
    /// Create a new cached client.
    pub fn new(client: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, routes }
    }

    fn key(request: &DirectionsRequest) -> RouteKey {
        let micro = |degrees: f64| (degrees * 1e6).round() as i64;
        (
            request.profile,
            [
                micro(request.origin.lng),
                micro(request.origin.lat),
                micro(request.destination.lng),
                micro(request.destination.lat),
            ],
        )
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.client
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: RouteProvider> RouteProvider for CachedDirectionsClient<P> {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, RoutingError> {
        let key = Self::key(request);

        if let Some(entry) = self.routes.get(&key).await {
            tracing::debug!(profile = %request.profile, "route cache hit");
            return Ok(entry.as_ref().clone());
        }

        let routes = self.client.directions(request).await?;
        self.routes.insert(key, Arc::new(routes.clone())).await;
        Ok(routes)
    }
}
