//! Routing service error types.
//!
//! The `Display` output of each variant is what a host places into the
//! widget's `error` state, so messages are written for end users.

/// Errors from fetching routes.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing access token
    #[error("Not Authorized - Invalid Token")]
    Unauthorized,

    /// Rate limited by the routing service
    #[error("Too many requests")]
    RateLimited,

    /// The service returned an error status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service answered but found no route between the endpoints
    #[error("{message}")]
    NoRoute { code: String, message: String },

    /// The configured base URL could not be joined with the request path
    #[error("invalid routing URL: {0}")]
    InvalidUrl(String),

    /// Fixture files could not be loaded or have no entry for a request
    #[error("mock routing data: {message}")]
    Mock { message: String },
}

impl RoutingError {
    /// HTTP status a web handler should answer with.
    pub fn status(&self) -> u16 {
        match self {
            RoutingError::Unauthorized => 401,
            RoutingError::RateLimited => 429,
            RoutingError::NoRoute { .. } => 404,
            RoutingError::Api { status, .. } if (400..600).contains(status) => *status,
            _ => 502,
        }
    }
}
