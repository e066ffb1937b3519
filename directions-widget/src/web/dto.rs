//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, DomainError, Profile, Route};
use crate::routing::DirectionsRequest;

/// Query string of `GET /directions`.
#[derive(Debug, Deserialize)]
pub struct DirectionsQuery {
    /// Origin as `lng,lat`
    pub origin: String,

    /// Destination as `lng,lat`
    pub destination: String,

    /// Routing profile, with or without the `mapbox/` prefix
    pub profile: Option<String>,
}

impl DirectionsQuery {
    /// Validate the query into a route request.
    pub fn to_request(&self) -> Result<DirectionsRequest, DomainError> {
        let profile = self
            .profile
            .as_deref()
            .map(Profile::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(DirectionsRequest::new(
            profile,
            Coordinates::parse(&self.origin)?,
            Coordinates::parse(&self.destination)?,
        ))
    }
}

/// Routes found for a request.
#[derive(Debug, Serialize, Deserialize)]
pub struct DirectionsResult {
    pub routes: Vec<Route>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message, suitable for the widget's `error` state
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(origin: &str, destination: &str, profile: Option<&str>) -> DirectionsQuery {
        DirectionsQuery {
            origin: origin.into(),
            destination: destination.into(),
            profile: profile.map(str::to_string),
        }
    }

    #[test]
    fn profile_defaults_to_traffic() {
        let request = query("-0.1,51.5", "-0.2,51.6", None).to_request().unwrap();
        assert_eq!(request.profile, Profile::DrivingTraffic);
        assert_eq!(request.destination, Coordinates::new(-0.2, 51.6));

        let request = query("-0.1,51.5", "-0.2,51.6", Some("walking"))
            .to_request()
            .unwrap();
        assert_eq!(request.profile, Profile::Walking);
    }

    #[test]
    fn invalid_parts_are_rejected() {
        assert!(matches!(
            query("-0.1", "-0.2,51.6", None).to_request(),
            Err(DomainError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            query("-0.1,51.5", "-0.2,51.6", Some("mapbox/hovercraft")).to_request(),
            Err(DomainError::InvalidProfile(_))
        ));
    }
}
