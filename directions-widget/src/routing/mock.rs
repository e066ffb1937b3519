//! Mock route provider for development without an access token.
//!
//! Loads one recorded response per profile from JSON files and serves it
//! for every request with that profile.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{Profile, Route};

use super::client::{DirectionsRequest, DirectionsResponse, RouteProvider, parse_response};
use super::error::RoutingError;

/// Route provider that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    responses: Arc<HashMap<Profile, DirectionsResponse>>,
}

impl MockDirectionsClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named after the profile slug (e.g. `walking.json`,
    /// `driving-traffic.json`), each holding a directions API response.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let data_dir = data_dir.as_ref();
        let mock_error = |message: String| RoutingError::Mock { message };
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir)
            .map_err(|e| mock_error(format!("failed to read {}: {e}", data_dir.display())))?;

        for entry in entries {
            let path = entry
                .map_err(|e| mock_error(format!("failed to read directory entry: {e}")))?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| mock_error(format!("invalid filename: {}", path.display())))?;
            let profile = Profile::parse(stem)
                .map_err(|_| mock_error(format!("unknown profile in filename: {stem}")))?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| mock_error(format!("failed to read {}: {e}", path.display())))?;
            let response = parse_response(&json)
                .map_err(|e| mock_error(format!("failed to parse {}: {e}", path.display())))?;

            responses.insert(profile, response);
        }

        if responses.is_empty() {
            return Err(mock_error(format!(
                "no response files found in {}",
                data_dir.display()
            )));
        }

        tracing::info!(profiles = responses.len(), "loaded mock directions");
        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Profiles with a loaded response.
    pub fn profiles(&self) -> Vec<Profile> {
        Profile::ALL
            .into_iter()
            .filter(|p| self.responses.contains_key(p))
            .collect()
    }
}

impl RouteProvider for MockDirectionsClient {
    /// Endpoints are ignored; mock data is static.
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, RoutingError> {
        let response = self
            .responses
            .get(&request.profile)
            .ok_or_else(|| RoutingError::Mock {
                message: format!("no mock data for profile {}", request.profile),
            })?;

        response.clone().into_routes()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::Coordinates;

    const WALKING: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 850.0,
            "duration": 610.0,
            "legs": [{"steps": [{
                "maneuver": {"type": "depart", "location": [-0.1, 51.5], "instruction": "Head north"},
                "distance": 850.0
            }]}]
        }]
    }"#;

    fn request(profile: Profile) -> DirectionsRequest {
        DirectionsRequest::new(profile, Coordinates::new(-0.1, 51.5), Coordinates::new(-0.11, 51.51))
    }

    #[tokio::test]
    async fn serves_responses_by_profile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walking.json"), WALKING).unwrap();
        fs::write(dir.path().join("cycling.json"), r#"{"code":"NoRoute","message":"Too far"}"#)
            .unwrap();
        fs::write(dir.path().join("README.txt"), "ignored").unwrap();

        let mock = MockDirectionsClient::new(dir.path()).unwrap();
        assert_eq!(mock.profiles(), vec![Profile::Walking, Profile::Cycling]);

        let routes = mock.directions(&request(Profile::Walking)).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].first_leg_steps()[0].maneuver.instruction, "Head north");

        let err = mock.directions(&request(Profile::Cycling)).await.unwrap_err();
        assert_eq!(err.to_string(), "Too far");

        let err = mock.directions(&request(Profile::Driving)).await.unwrap_err();
        assert!(matches!(err, RoutingError::Mock { .. }));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MockDirectionsClient::new(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no response files"));
    }

    #[test]
    fn unknown_profile_filename_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("teleport.json"), WALKING).unwrap();

        let err = MockDirectionsClient::new(dir.path()).unwrap_err();
        assert!(err.to_string().contains("teleport"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("driving.json"), "{ nope").unwrap();

        assert!(MockDirectionsClient::new(dir.path()).is_err());
    }
}
