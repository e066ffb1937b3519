//! Intents the controllers emit, and the capability that accepts them.

use crate::domain::{Coordinates, Profile, Route};

use super::LocationQuery;

/// A state-changing intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CreateOrigin(Coordinates),
    CreateDestination(Coordinates),
    ClearOrigin,
    ClearDestination,
    QueryOrigin(Option<LocationQuery>),
    QueryDestination(Option<LocationQuery>),
    QueryOriginCoordinates(Option<Coordinates>),
    QueryDestinationCoordinates(Option<Coordinates>),
    SetProfile(Profile),
    Reverse,
    SetRouteIndex(usize),
    HoverMarker(Option<Coordinates>),
    SetDirections(Vec<Route>),
    SetError(Option<String>),
    ClearRefresh,
}

impl Action {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateOrigin(_) => "create_origin",
            Action::CreateDestination(_) => "create_destination",
            Action::ClearOrigin => "clear_origin",
            Action::ClearDestination => "clear_destination",
            Action::QueryOrigin(_) => "query_origin",
            Action::QueryDestination(_) => "query_destination",
            Action::QueryOriginCoordinates(_) => "query_origin_coordinates",
            Action::QueryDestinationCoordinates(_) => "query_destination_coordinates",
            Action::SetProfile(_) => "set_profile",
            Action::Reverse => "reverse",
            Action::SetRouteIndex(_) => "set_route_index",
            Action::HoverMarker(_) => "hover_marker",
            Action::SetDirections(_) => "set_directions",
            Action::SetError(_) => "set_error",
            Action::ClearRefresh => "clear_refresh",
        }
    }
}

/// Accepts intents on behalf of the state container.
///
/// Implementors provide `dispatch` and `dispatch_deferred`; the named intent
/// methods are conveniences over `dispatch`.
pub trait ActionSink {
    /// Apply an intent. If the container is mid-notification, the intent is
    /// applied once the current listeners have returned.
    fn dispatch(&self, action: Action);

    /// Apply an intent after every pending intent of the current pass.
    fn dispatch_deferred(&self, action: Action);

    fn create_origin(&self, coordinates: Coordinates) {
        self.dispatch(Action::CreateOrigin(coordinates));
    }

    fn create_destination(&self, coordinates: Coordinates) {
        self.dispatch(Action::CreateDestination(coordinates));
    }

    fn clear_origin(&self) {
        self.dispatch(Action::ClearOrigin);
    }

    fn clear_destination(&self) {
        self.dispatch(Action::ClearDestination);
    }

    fn query_origin(&self, query: Option<LocationQuery>) {
        self.dispatch(Action::QueryOrigin(query));
    }

    fn query_destination(&self, query: Option<LocationQuery>) {
        self.dispatch(Action::QueryDestination(query));
    }

    fn query_origin_coordinates(&self, coordinates: Option<Coordinates>) {
        self.dispatch(Action::QueryOriginCoordinates(coordinates));
    }

    fn query_destination_coordinates(&self, coordinates: Option<Coordinates>) {
        self.dispatch(Action::QueryDestinationCoordinates(coordinates));
    }

    fn set_profile(&self, profile: Profile) {
        self.dispatch(Action::SetProfile(profile));
    }

    fn reverse(&self) {
        self.dispatch(Action::Reverse);
    }

    fn set_route_index(&self, index: usize) {
        self.dispatch(Action::SetRouteIndex(index));
    }

    fn hover_marker(&self, coordinates: Option<Coordinates>) {
        self.dispatch(Action::HoverMarker(coordinates));
    }

    fn set_directions(&self, routes: Vec<Route>) {
        self.dispatch(Action::SetDirections(routes));
    }

    fn set_error(&self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    fn clear_refresh(&self) {
        self.dispatch_deferred(Action::ClearRefresh);
    }
}
