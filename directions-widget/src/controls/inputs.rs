//! Origin/destination inputs.
//!
//! [`InputController`] owns the two search widgets. Widget results become
//! intents; one-shot query fields in the state are pushed back into the
//! widgets and cleared in the same pass.

use std::cell::Cell;
use std::rc::Rc;

use askama::Template;

use crate::domain::{Coordinates, Profile};
use crate::state::{ActionSink, DirectionsState, StateSource};
use crate::view::{InputsTemplate, ViewError};

use super::camera::CameraCommand;
use super::{
    GeocodeResult, MapCamera, SearchWidget, SearchWidgetFactory, SearchWidgetOptions,
    ViewContainer,
};

/// ID of the element the origin widget is attached to.
pub const ORIGIN_SLOT: &str = "mapbox-directions-origin-input";

/// ID of the element the destination widget is attached to.
pub const DESTINATION_SLOT: &str = "mapbox-directions-destination-input";

/// User interaction with the inputs shell.
#[derive(Debug, Clone, PartialEq)]
pub enum InputsEvent {
    /// A profile radio changed; carries the radio's `value`.
    ProfileChange(String),
    /// The reverse button was clicked.
    ReverseClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Origin,
    Destination,
}

pub struct InputController {
    source: Rc<dyn StateSource>,
    actions: Rc<dyn ActionSink>,
    map: Rc<dyn MapCamera>,
    origin_input: Rc<dyn SearchWidget>,
    destination_input: Rc<dyn SearchWidget>,
    route_padding: f64,
    /// Set once a pending refresh has been acted on, until the state drops it.
    refresh_scheduled: Cell<bool>,
}

impl InputController {
    /// Render the inputs shell into `container`, attach both search widgets
    /// and start following `source`.
    pub fn new(
        container: Rc<dyn ViewContainer>,
        source: Rc<dyn StateSource>,
        actions: Rc<dyn ActionSink>,
        map: Rc<dyn MapCamera>,
        widgets: &dyn SearchWidgetFactory,
    ) -> Result<Rc<Self>, ViewError> {
        let initial = source.get_state();
        let settings = &initial.settings;

        let shell = InputsTemplate::new(initial.profile, settings.controls.profile_switcher);
        container.set_inner_html(shell.render()?);

        let origin_input = widgets.create(SearchWidgetOptions::from_settings(
            settings,
            &settings.placeholder_origin,
        ));
        container.attach(ORIGIN_SLOT, origin_input.on_add(&*map)?);

        let destination_input = widgets.create(SearchWidgetOptions::from_settings(
            settings,
            &settings.placeholder_destination,
        ));
        container.attach(DESTINATION_SLOT, destination_input.on_add(&*map)?);

        let controller = Rc::new(Self {
            source,
            actions,
            map,
            origin_input,
            destination_input,
            route_padding: settings.route_padding,
            refresh_scheduled: Cell::new(false),
        });
        controller.bind_widgets();
        controller.subscribe();
        Ok(controller)
    }

    fn bind_widgets(self: &Rc<Self>) {
        for (endpoint, widget) in [
            (Endpoint::Origin, &self.origin_input),
            (Endpoint::Destination, &self.destination_input),
        ] {
            let weak = Rc::downgrade(self);
            widget.on_result(Box::new(move |result: &GeocodeResult| {
                if let Some(controller) = weak.upgrade() {
                    controller.on_result(endpoint, result);
                }
            }));

            let weak = Rc::downgrade(self);
            widget.on_clear(Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    match endpoint {
                        Endpoint::Origin => controller.actions.clear_origin(),
                        Endpoint::Destination => controller.actions.clear_destination(),
                    }
                }
            }));
        }
    }

    fn subscribe(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.source.subscribe(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.sync();
            }
        }));
    }

    /// Handle an interaction with the shell's own controls.
    pub fn handle_event(&self, event: InputsEvent) {
        match event {
            InputsEvent::ProfileChange(value) => match Profile::parse(&value) {
                Ok(profile) => self.actions.set_profile(profile),
                Err(e) => tracing::warn!(error = %e, "ignoring profile change"),
            },
            InputsEvent::ReverseClick => self.reverse(),
        }
    }

    /// Swap origin and destination, pushing each endpoint's coordinates into
    /// the opposite widget first.
    pub fn reverse(&self) {
        let state = self.source.get_state();
        if let Some(origin) = &state.origin {
            self.actions.query_destination(Some(origin.coordinates().into()));
        }
        if let Some(destination) = &state.destination {
            self.actions.query_origin(Some(destination.coordinates().into()));
        }
        self.actions.reverse();
    }

    fn on_result(&self, endpoint: Endpoint, result: &GeocodeResult) {
        tracing::debug!(?endpoint, place = %result.place_name, "search result");
        match endpoint {
            Endpoint::Origin => self.actions.create_origin(result.center),
            Endpoint::Destination => self.actions.create_destination(result.center),
        }
        self.animate_to(result.center);
    }

    fn animate_to(&self, target: Coordinates) {
        let state = self.source.get_state();
        CameraCommand::toward(
            state.origin.as_ref(),
            state.destination.as_ref(),
            target,
            self.route_padding,
        )
        .apply(&*self.map);
    }

    /// Apply and clear every pending one-shot field in the current snapshot.
    fn sync(&self) {
        let state = self.source.get_state();

        if let Some(query) = &state.origin_query {
            self.origin_input.query(query);
            self.actions.query_origin(None);
        }

        if let Some(query) = &state.destination_query {
            self.destination_input.query(query);
            self.actions.query_destination(None);
        }

        if let Some(coordinates) = state.origin_query_coordinates {
            self.origin_input.set_input(coordinates);
            self.animate_to(coordinates);
            self.actions.query_origin_coordinates(None);
        }

        if let Some(coordinates) = state.destination_query_coordinates {
            self.destination_input.set_input(coordinates);
            self.animate_to(coordinates);
            self.actions.query_destination_coordinates(None);
        }

        if self.should_refresh(&state) {
            if let Some(command) = CameraCommand::frame(
                state.origin.as_ref(),
                state.destination.as_ref(),
                self.route_padding,
            ) {
                command.apply(&*self.map);
            }
        }
    }

    /// True exactly once per raised refresh flag. Clearing the flag is
    /// deferred until the current dispatch settles.
    fn should_refresh(&self, state: &DirectionsState) -> bool {
        if !state.refresh {
            self.refresh_scheduled.set(false);
            return false;
        }
        if self.refresh_scheduled.replace(true) {
            return false;
        }
        self.actions.clear_refresh();
        true
    }
}
