//! Domain error types.
//!
//! These errors represent validation failures for values arriving from
//! outside the widget (query strings, posted snapshots). They are distinct
//! from routing-service and rendering errors.

use super::InvalidProfile;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A `lng,lat` pair could not be parsed or is out of range
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Unknown routing profile
    #[error(transparent)]
    InvalidProfile(#[from] InvalidProfile),
}
