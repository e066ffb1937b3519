//! Travel profiles.

use std::fmt;

/// Error returned when parsing an unknown routing profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid routing profile: {0}")]
pub struct InvalidProfile(String);

/// The travel mode used for route computation.
///
/// # Examples
///
/// ```
/// use directions_widget::domain::Profile;
///
/// let p = Profile::parse("mapbox/walking").unwrap();
/// assert_eq!(p, Profile::Walking);
///
/// // The bare mode name is accepted too
/// assert_eq!(Profile::parse("cycling").unwrap(), Profile::Cycling);
///
/// assert!(Profile::parse("mapbox/teleport").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Profile {
    #[default]
    DrivingTraffic,
    Driving,
    Walking,
    Cycling,
}

impl Profile {
    /// All profiles, in profile-switcher order.
    pub const ALL: [Profile; 4] = [
        Profile::DrivingTraffic,
        Profile::Driving,
        Profile::Walking,
        Profile::Cycling,
    ];

    /// Parse a profile identifier, with or without the `mapbox/` prefix.
    pub fn parse(s: &str) -> Result<Self, InvalidProfile> {
        let mode = s.strip_prefix("mapbox/").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == mode)
            .ok_or_else(|| InvalidProfile(s.to_string()))
    }

    /// The fully qualified identifier, e.g. `mapbox/driving-traffic`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::DrivingTraffic => "mapbox/driving-traffic",
            Profile::Driving => "mapbox/driving",
            Profile::Walking => "mapbox/walking",
            Profile::Cycling => "mapbox/cycling",
        }
    }

    /// The mode name without the account prefix, e.g. `driving-traffic`.
    pub fn slug(&self) -> &'static str {
        match self {
            Profile::DrivingTraffic => "driving-traffic",
            Profile::Driving => "driving",
            Profile::Walking => "walking",
            Profile::Cycling => "cycling",
        }
    }

    /// Label shown next to the profile radio input.
    pub fn label(&self) -> &'static str {
        match self {
            Profile::DrivingTraffic => "Traffic",
            Profile::Driving => "Driving",
            Profile::Walking => "Walking",
            Profile::Cycling => "Cycling",
        }
    }

    /// Element ID of the profile radio input.
    pub fn element_id(&self) -> String {
        format!("mapbox-directions-profile-{}", self.slug())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Profile {
    type Error = InvalidProfile;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Profile::parse(&s)
    }
}

impl From<Profile> for String {
    fn from(p: Profile) -> Self {
        p.as_str().to_string()
    }
}
