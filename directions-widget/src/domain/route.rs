//! Route types, as returned by the routing service.
//!
//! A `Route` has one `RouteLeg` per origin-to-waypoint segment, and each leg
//! is an ordered list of `Step`s. Field names follow the routing service's
//! JSON so responses deserialize directly.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A single routing instruction point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type, e.g. `turn`, `depart`, `roundabout`, `end of road`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Direction qualifier, e.g. `left`, `slight right`, `uturn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,

    pub location: Coordinates,

    #[serde(default)]
    pub instruction: String,

    /// Roundabout exit number, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<u32>,
}

/// One step of a leg: a maneuver plus the travel that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub maneuver: Maneuver,

    /// Distance in metres until the next maneuver.
    #[serde(default)]
    pub distance: f64,

    /// Duration in seconds until the next maneuver.
    #[serde(default)]
    pub duration: f64,

    /// Name of the way travelled on.
    #[serde(default)]
    pub name: String,
}

/// One origin-to-waypoint segment of a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A complete route between the requested endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Total distance in metres.
    pub distance: f64,

    /// Total duration in seconds.
    pub duration: f64,

    #[serde(default)]
    pub legs: Vec<RouteLeg>,

    /// Route line, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}

impl Route {
    /// Steps of the first leg.
    ///
    /// Only the first leg is displayed; routes through waypoints show the
    /// origin-to-first-waypoint segment.
    pub fn first_leg_steps(&self) -> &[Step] {
        self.legs.first().map(|leg| leg.steps.as_slice()).unwrap_or(&[])
    }
}
