//! The shared state snapshot.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, Feature, Profile, Route, Unit};
use crate::view::InstructionCompiler;

/// A pending search for a location widget.
///
/// Reversal pushes the other endpoint's coordinates through the same path as
/// free-text queries, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationQuery {
    Coordinates(Coordinates),
    Text(String),
}

impl LocationQuery {
    /// The query as the text a search widget would display.
    pub fn as_text(&self) -> String {
        match self {
            LocationQuery::Coordinates(c) => c.to_string(),
            LocationQuery::Text(s) => s.clone(),
        }
    }
}

impl From<Coordinates> for LocationQuery {
    fn from(c: Coordinates) -> Self {
        LocationQuery::Coordinates(c)
    }
}

impl From<&str> for LocationQuery {
    fn from(s: &str) -> Self {
        LocationQuery::Text(s.to_string())
    }
}

/// Which built-in controls are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Controls {
    pub inputs: bool,
    pub instructions: bool,
    pub profile_switcher: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            inputs: true,
            instructions: true,
            profile_switcher: true,
        }
    }
}

/// Shared handle to an instruction compiler.
#[derive(Clone)]
pub struct CompilerHandle(pub Arc<dyn InstructionCompiler>);

impl fmt::Debug for CompilerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompilerHandle(..)")
    }
}

/// Widget configuration.
///
/// Fixed for the lifetime of the controllers built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetSettings {
    pub access_token: String,

    /// Options passed through to both search widgets.
    pub geocoder: serde_json::Map<String, serde_json::Value>,

    /// Whether search widgets move the map themselves on selection.
    pub fly_to: bool,

    pub placeholder_origin: String,
    pub placeholder_destination: String,

    /// Zoom level search widgets use when flying to a result.
    pub zoom: f64,

    /// Padding in pixels around fitted bounds.
    pub route_padding: f64,

    pub controls: Controls,

    /// Language passed to the instruction compiler.
    pub language: String,

    /// Produces localized maneuver text from a step.
    #[serde(skip)]
    pub compile: Option<CompilerHandle>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            geocoder: serde_json::Map::new(),
            fly_to: true,
            placeholder_origin: "Choose a starting place".to_string(),
            placeholder_destination: "Choose destination".to_string(),
            zoom: 16.0,
            route_padding: 80.0,
            controls: Controls::default(),
            language: "en".to_string(),
            compile: None,
        }
    }
}

/// Snapshot of the widget's shared state.
///
/// Controllers read a fresh snapshot on every notification and never
/// mutate it; changes go through actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectionsState {
    /// One-shot: text or coordinates to push into the origin widget.
    pub origin_query: Option<LocationQuery>,
    /// One-shot: text or coordinates to push into the destination widget.
    pub destination_query: Option<LocationQuery>,
    /// One-shot: coordinates to display in the origin widget.
    pub origin_query_coordinates: Option<Coordinates>,
    /// One-shot: coordinates to display in the destination widget.
    pub destination_query_coordinates: Option<Coordinates>,

    pub origin: Option<Feature>,
    pub destination: Option<Feature>,

    pub directions: Vec<Route>,
    pub route_index: usize,
    pub error: Option<String>,

    pub profile: Profile,
    pub unit: Unit,

    /// Location of the step currently hovered in the instructions list.
    pub hover_marker: Option<Coordinates>,

    /// One-shot: endpoints were swapped wholesale.
    pub refresh: bool,

    pub settings: WidgetSettings,
}

impl DirectionsState {
    /// Create a state with the given settings and nothing selected.
    pub fn with_settings(settings: WidgetSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The route at `route_index`, if the index is in range.
    pub fn selected_route(&self) -> Option<&Route> {
        self.directions.get(self.route_index)
    }
}
