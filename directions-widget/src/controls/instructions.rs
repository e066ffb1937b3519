//! Route summary and turn-by-turn instructions.
//!
//! [`InstructionsController`] re-renders only when the selected route
//! changes structurally. An error in the state always takes precedence over
//! routes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use askama::Template;

use crate::domain::{Coordinates, Route, Unit};
use crate::state::{ActionSink, DirectionsState, StateSource};
use crate::view::{InstructionsErrorTemplate, InstructionsTemplate, RenderContext, RouteView};

use super::memo::Memo;
use super::{FlyToOptions, MapCamera, ViewContainer};

/// Zoom used when flying to a clicked step.
pub const STEP_ZOOM: f64 = 16.0;

/// User interaction with the rendered instructions.
///
/// Steps are addressed by their position in the list, route selectors by
/// their element ID.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionsEvent {
    StepMouseOver(usize),
    StepMouseOut(usize),
    StepClick(usize),
    RouteChange(String),
}

/// What the container currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayedView {
    Empty,
    Error,
    Route,
}

/// Everything besides the route itself that shapes the rendered markup.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    route_index: usize,
    route_count: usize,
    unit: Unit,
}

impl Layout {
    fn of(state: &DirectionsState) -> Self {
        Self {
            route_index: state.route_index,
            route_count: state.directions.len(),
            unit: state.unit,
        }
    }
}

/// Targets of the interactive elements in the current render.
#[derive(Debug, Default)]
struct Bindings {
    steps: Vec<Coordinates>,
    routes: usize,
}

pub struct InstructionsController {
    container: Rc<dyn ViewContainer>,
    source: Rc<dyn StateSource>,
    actions: Rc<dyn ActionSink>,
    map: Rc<dyn MapCamera>,
    memo: RefCell<Memo<Route>>,
    layout: Cell<Option<Layout>>,
    displayed: Cell<DisplayedView>,
    bindings: RefCell<Bindings>,
}

impl InstructionsController {
    pub fn new(
        container: Rc<dyn ViewContainer>,
        source: Rc<dyn StateSource>,
        actions: Rc<dyn ActionSink>,
        map: Rc<dyn MapCamera>,
    ) -> Rc<Self> {
        let controller = Rc::new(Self {
            container,
            source,
            actions,
            map,
            memo: RefCell::new(Memo::new()),
            layout: Cell::new(None),
            displayed: Cell::new(DisplayedView::Empty),
            bindings: RefCell::new(Bindings::default()),
        });

        let weak = Rc::downgrade(&controller);
        controller.source.subscribe(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.sync();
            }
        }));
        controller
    }

    pub fn displayed(&self) -> DisplayedView {
        self.displayed.get()
    }

    /// Bring the container in line with the current snapshot.
    pub fn sync(&self) {
        let state = self.source.get_state();

        if let Some(error) = &state.error {
            self.render_error(error);
            return;
        }

        let selected = state.selected_route();
        let should_render = self.displayed.get() == DisplayedView::Error
            || self.memo.borrow().differs(selected)
            || (selected.is_some() && self.layout.get() != Some(Layout::of(&state)));
        if !should_render {
            return;
        }

        match selected {
            Some(route) => self.render_route(&state, route),
            None => {
                if !self.container.is_blank() {
                    tracing::debug!("clearing instructions");
                    self.container.set_inner_html(String::new());
                }
                self.memo.borrow_mut().forget();
                self.layout.set(None);
                self.bindings.replace(Bindings::default());
                self.displayed.set(DisplayedView::Empty);
            }
        }
    }

    fn render_error(&self, error: &str) {
        match (InstructionsErrorTemplate { error }).render() {
            Ok(html) => {
                tracing::debug!(error, "rendering error view");
                self.container.set_inner_html(html);
                self.bindings.replace(Bindings::default());
                self.displayed.set(DisplayedView::Error);
            }
            Err(e) => tracing::warn!(error = %e, "failed to render error view"),
        }
    }

    fn render_route(&self, state: &DirectionsState, route: &Route) {
        let ctx = RenderContext {
            route_index: state.route_index,
            route_count: state.directions.len(),
            unit: state.unit,
            language: &state.settings.language,
            compiler: state.settings.compile.as_ref().map(|h| &*h.0),
        };
        let view = RouteView::build(route, &ctx);

        match (InstructionsTemplate { view: &view }).render() {
            Ok(html) => {
                tracing::debug!(
                    route_index = state.route_index,
                    steps = view.steps.len(),
                    "rendering instructions"
                );
                self.container.set_inner_html(html);
                self.memo.borrow_mut().remember(route);
                self.layout.set(Some(Layout::of(state)));
                self.bindings.replace(Bindings {
                    steps: view.step_locations(),
                    routes: view.summary.selectors.len(),
                });
                self.displayed.set(DisplayedView::Route);
            }
            Err(e) => tracing::warn!(error = %e, "failed to render instructions"),
        }
    }

    /// Handle an interaction with the rendered view.
    pub fn handle_event(&self, event: InstructionsEvent) {
        match event {
            InstructionsEvent::StepMouseOver(i) => {
                if let Some(location) = self.step_location(i) {
                    self.actions.hover_marker(Some(location));
                }
            }
            InstructionsEvent::StepMouseOut(i) => {
                if self.step_location(i).is_some() {
                    self.actions.hover_marker(None);
                }
            }
            InstructionsEvent::StepClick(i) => {
                if let Some(center) = self.step_location(i) {
                    self.map.fly_to(FlyToOptions {
                        center,
                        zoom: Some(STEP_ZOOM),
                    });
                }
            }
            InstructionsEvent::RouteChange(id) => {
                let routes = self.bindings.borrow().routes;
                match id.parse::<usize>() {
                    Ok(index) if index < routes => self.actions.set_route_index(index),
                    _ => tracing::debug!(id = %id, routes, "ignoring unknown route selector"),
                }
            }
        }
    }

    fn step_location(&self, index: usize) -> Option<Coordinates> {
        let location = self.bindings.borrow().steps.get(index).copied();
        if location.is_none() {
            tracing::debug!(index, "ignoring event for unknown step");
        }
        location
    }
}
