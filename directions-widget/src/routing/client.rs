//! Directions API HTTP client.
//!
//! Fetches alternative routes between two points and converts failures into
//! [`RoutingError`]s whose messages can be shown in the widget.

use std::future::Future;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, Profile, Route};

use super::error::RoutingError;

/// Default base URL for the directions API.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Message used when the service reports a failure without one.
const NO_ROUTE_MESSAGE: &str = "No route found";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Access token sent with every request
    pub access_token: String,
    /// Base URL for the API (defaults to the public service)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A route request between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    pub profile: Profile,
    pub origin: Coordinates,
    pub destination: Coordinates,
}

impl DirectionsRequest {
    pub fn new(profile: Profile, origin: Coordinates, destination: Coordinates) -> Self {
        Self {
            profile,
            origin,
            destination,
        }
    }

    /// Path of the request relative to the API base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use directions_widget::domain::{Coordinates, Profile};
    /// use directions_widget::routing::DirectionsRequest;
    ///
    /// let request = DirectionsRequest::new(
    ///     Profile::Walking,
    ///     Coordinates::new(-0.1, 51.5),
    ///     Coordinates::new(-0.2, 51.6),
    /// );
    /// assert_eq!(
    ///     request.path(),
    ///     "directions/v5/mapbox/walking/-0.1,51.5;-0.2,51.6.json"
    /// );
    /// ```
    pub fn path(&self) -> String {
        format!(
            "directions/v5/{}/{};{}.json",
            self.profile.as_str(),
            self.origin,
            self.destination
        )
    }
}

/// Body of a directions API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `Ok` on success, otherwise a failure code such as `NoRoute`.
    pub code: String,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DirectionsResponse {
    /// The routes, or the failure the service reported instead.
    pub fn into_routes(self) -> Result<Vec<Route>, RoutingError> {
        if self.code == "Ok" {
            return Ok(self.routes);
        }
        Err(RoutingError::NoRoute {
            message: self
                .message
                .unwrap_or_else(|| NO_ROUTE_MESSAGE.to_string()),
            code: self.code,
        })
    }
}

/// Something that can answer route requests.
pub trait RouteProvider: Send + Sync {
    fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> impl Future<Output = Result<Vec<Route>, RoutingError>> + Send;
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            access_token: config.access_token,
        })
    }

    /// Full URL for a request, including the query string.
    pub fn request_url(&self, request: &DirectionsRequest) -> Result<reqwest::Url, RoutingError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), request.path());
        let mut url =
            reqwest::Url::parse(&raw).map_err(|e| RoutingError::InvalidUrl(format!("{raw}: {e}")))?;

        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token)
            .append_pair("geometries", "geojson")
            .append_pair("steps", "true")
            .append_pair("alternatives", "true")
            .append_pair("overview", "full");

        Ok(url)
    }
}

impl RouteProvider for DirectionsClient {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, RoutingError> {
        let url = self.request_url(request)?;

        // The URL carries the token, so only the request itself is logged
        tracing::debug!(
            profile = %request.profile,
            origin = %request.origin,
            destination = %request.destination,
            "requesting directions"
        );

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(err) = error_for_status(status, &body) {
            tracing::debug!(status = status.as_u16(), "directions request failed");
            return Err(err);
        }

        parse_response(&body)?.into_routes()
    }
}

/// Optional `message` field of an error body.
#[derive(Deserialize)]
struct ServiceMessage {
    message: Option<String>,
}

/// Map a non-success status to an error.
fn error_for_status(status: StatusCode, body: &str) -> Option<RoutingError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RoutingError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => RoutingError::RateLimited,
        _ => {
            let message = serde_json::from_str::<ServiceMessage>(body)
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            RoutingError::Api {
                status: status.as_u16(),
                message,
            }
        }
    })
}

pub(super) fn parse_response(body: &str) -> Result<DirectionsResponse, RoutingError> {
    serde_json::from_str(body).map_err(|e| RoutingError::Json {
        message: e.to_string(),
    })
}
