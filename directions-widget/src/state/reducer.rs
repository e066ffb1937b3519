//! Pure state transitions.

use crate::domain::Feature;

use super::{Action, DirectionsState};

/// Apply an action to a snapshot, producing the next snapshot.
pub fn reduce(state: &DirectionsState, action: Action) -> DirectionsState {
    let mut next = state.clone();

    match action {
        Action::CreateOrigin(c) => next.origin = Some(Feature::point(c, "origin")),
        Action::CreateDestination(c) => next.destination = Some(Feature::point(c, "destination")),
        Action::ClearOrigin => {
            next.origin = None;
            clear_routes(&mut next);
        }
        Action::ClearDestination => {
            next.destination = None;
            clear_routes(&mut next);
        }
        Action::QueryOrigin(q) => next.origin_query = q,
        Action::QueryDestination(q) => next.destination_query = q,
        Action::QueryOriginCoordinates(c) => next.origin_query_coordinates = c,
        Action::QueryDestinationCoordinates(c) => next.destination_query_coordinates = c,
        Action::SetProfile(p) => next.profile = p,
        Action::Reverse => {
            std::mem::swap(&mut next.origin, &mut next.destination);
            for (feature, id) in [
                (&mut next.origin, "origin"),
                (&mut next.destination, "destination"),
            ] {
                if let Some(f) = feature {
                    f.properties
                        .insert("id".to_string(), serde_json::Value::from(id));
                }
            }
            next.refresh = true;
        }
        Action::SetRouteIndex(i) => {
            if i < next.directions.len() {
                next.route_index = i;
            } else {
                tracing::debug!(
                    index = i,
                    routes = next.directions.len(),
                    "ignoring out-of-range route index"
                );
            }
        }
        Action::HoverMarker(c) => next.hover_marker = c,
        Action::SetDirections(routes) => {
            next.directions = routes;
            next.error = None;
            if next.route_index >= next.directions.len() {
                next.route_index = 0;
            }
        }
        Action::SetError(e) => next.error = e,
        Action::ClearRefresh => next.refresh = false,
    }

    next
}

fn clear_routes(state: &mut DirectionsState) {
    state.directions.clear();
    state.route_index = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Profile, Route};
    use crate::state::LocationQuery;

    fn c(lng: f64, lat: f64) -> Coordinates {
        Coordinates::new(lng, lat)
    }

    fn routes(n: usize) -> Vec<Route> {
        (0..n)
            .map(|i| Route {
                distance: 1000.0 * (i + 1) as f64,
                duration: 60.0,
                ..Route::default()
            })
            .collect()
    }

    #[test]
    fn create_and_clear_endpoints() {
        let state = DirectionsState::default();
        let state = reduce(&state, Action::CreateOrigin(c(1.0, 2.0)));
        let state = reduce(&state, Action::CreateDestination(c(3.0, 4.0)));

        assert_eq!(state.origin.as_ref().unwrap().coordinates(), c(1.0, 2.0));
        assert_eq!(state.origin.as_ref().unwrap().properties["id"], "origin");
        assert_eq!(state.destination.as_ref().unwrap().coordinates(), c(3.0, 4.0));

        let state = reduce(&state, Action::SetDirections(routes(2)));
        let state = reduce(&state, Action::SetRouteIndex(1));
        let state = reduce(&state, Action::ClearOrigin);

        assert!(state.origin.is_none());
        assert!(state.destination.is_some());
        assert!(state.directions.is_empty());
        assert_eq!(state.route_index, 0);
    }

    #[test]
    fn one_shot_fields_set_and_clear() {
        let state = DirectionsState::default();
        let state = reduce(&state, Action::QueryOrigin(Some("Lyon".into())));
        let state = reduce(&state, Action::QueryDestinationCoordinates(Some(c(5.0, 6.0))));
        assert_eq!(state.origin_query, Some(LocationQuery::Text("Lyon".into())));
        assert_eq!(state.destination_query_coordinates, Some(c(5.0, 6.0)));

        let state = reduce(&state, Action::QueryOrigin(None));
        let state = reduce(&state, Action::QueryDestinationCoordinates(None));
        assert!(state.origin_query.is_none());
        assert!(state.destination_query_coordinates.is_none());
    }

    #[test]
    fn reverse_swaps_and_retags() {
        let state = DirectionsState::default();
        let state = reduce(&state, Action::CreateOrigin(c(1.0, 1.0)));
        let state = reduce(&state, Action::Reverse);

        assert!(state.origin.is_none());
        let destination = state.destination.unwrap();
        assert_eq!(destination.coordinates(), c(1.0, 1.0));
        assert_eq!(destination.properties["id"], "destination");
        assert!(state.refresh);
    }

    #[test]
    fn clear_refresh() {
        let state = DirectionsState {
            refresh: true,
            ..DirectionsState::default()
        };
        assert!(!reduce(&state, Action::ClearRefresh).refresh);
    }

    #[test]
    fn route_index_must_be_in_range() {
        let state = reduce(&DirectionsState::default(), Action::SetDirections(routes(3)));
        let state = reduce(&state, Action::SetRouteIndex(2));
        assert_eq!(state.route_index, 2);

        let state = reduce(&state, Action::SetRouteIndex(3));
        assert_eq!(state.route_index, 2);

        // Fewer routes than the selected index resets the selection
        let state = reduce(&state, Action::SetDirections(routes(1)));
        assert_eq!(state.route_index, 0);
    }

    #[test]
    fn directions_clear_error() {
        let state = reduce(
            &DirectionsState::default(),
            Action::SetError(Some("No route found".into())),
        );
        assert_eq!(state.error.as_deref(), Some("No route found"));

        let state = reduce(&state, Action::SetDirections(routes(1)));
        assert!(state.error.is_none());
    }

    #[test]
    fn profile_and_hover() {
        let state = reduce(&DirectionsState::default(), Action::SetProfile(Profile::Walking));
        assert_eq!(state.profile, Profile::Walking);

        let state = reduce(&state, Action::HoverMarker(Some(c(7.0, 8.0))));
        assert_eq!(state.hover_marker, Some(c(7.0, 8.0)));
        let state = reduce(&state, Action::HoverMarker(None));
        assert!(state.hover_marker.is_none());
    }
}
