//! Shared fixtures for the controller tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Coordinates, Maneuver, Route, RouteLeg, Step};
use crate::state::{Action, ActionSink, DirectionsState, StateSource, Store};

use super::{
    CameraRecorder, HtmlContainer, InputController, InstructionsController, MarkupSearchWidget,
    SearchWidget, SearchWidgetOptions,
};

/// Forwards intents to the store and remembers them.
pub(super) struct RecordingSink {
    store: Rc<Store>,
    log: RefCell<Vec<Action>>,
}

impl ActionSink for RecordingSink {
    fn dispatch(&self, action: Action) {
        self.log.borrow_mut().push(action.clone());
        self.store.dispatch(action);
    }

    fn dispatch_deferred(&self, action: Action) {
        self.log.borrow_mut().push(action.clone());
        self.store.dispatch_deferred(action);
    }
}

pub(super) struct Harness {
    pub store: Rc<Store>,
    pub sink: Rc<RecordingSink>,
    pub inputs_container: Rc<HtmlContainer>,
    pub instructions_container: Rc<HtmlContainer>,
    pub camera: Rc<CameraRecorder>,
    widgets: Rc<RefCell<Vec<Rc<MarkupSearchWidget>>>>,
}

impl Harness {
    pub fn new(state: DirectionsState) -> Self {
        let store = Rc::new(Store::new(state));
        Self {
            sink: Rc::new(RecordingSink {
                store: Rc::clone(&store),
                log: RefCell::new(Vec::new()),
            }),
            store,
            inputs_container: Rc::new(HtmlContainer::new()),
            instructions_container: Rc::new(HtmlContainer::new()),
            camera: Rc::new(CameraRecorder::new()),
            widgets: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn inputs(&self) -> Rc<InputController> {
        let created = Rc::clone(&self.widgets);
        let factory = move |options: SearchWidgetOptions| -> Rc<dyn SearchWidget> {
            let widget = Rc::new(MarkupSearchWidget::new(options));
            created.borrow_mut().push(Rc::clone(&widget));
            widget
        };
        InputController::new(
            self.inputs_container.clone(),
            self.store.clone(),
            self.sink.clone(),
            self.camera.clone(),
            &factory,
        )
        .unwrap()
    }

    pub fn instructions(&self) -> Rc<InstructionsController> {
        InstructionsController::new(
            self.instructions_container.clone(),
            self.store.clone(),
            self.sink.clone(),
            self.camera.clone(),
        )
    }

    pub fn origin_widget(&self) -> Rc<MarkupSearchWidget> {
        Rc::clone(&self.widgets.borrow()[0])
    }

    pub fn destination_widget(&self) -> Rc<MarkupSearchWidget> {
        Rc::clone(&self.widgets.borrow()[1])
    }

    /// Intents dispatched through the sink so far.
    pub fn actions(&self) -> Vec<Action> {
        self.sink.log.borrow().clone()
    }

    pub fn state(&self) -> Rc<DirectionsState> {
        self.store.get_state()
    }
}

pub(super) fn c(lng: f64, lat: f64) -> Coordinates {
    Coordinates::new(lng, lat)
}

pub(super) fn step(kind: &str, modifier: Option<&str>, distance: f64, at: Coordinates) -> Step {
    Step {
        maneuver: Maneuver {
            kind: kind.to_string(),
            modifier: modifier.map(str::to_string),
            location: at,
            instruction: format!("{kind} here"),
            exit: None,
        },
        distance,
        duration: 30.0,
        name: String::new(),
    }
}

/// A single-leg route whose total distance identifies it.
pub(super) fn route(distance: f64) -> Route {
    Route {
        distance,
        duration: 600.0,
        legs: vec![RouteLeg {
            steps: vec![
                step("depart", None, 250.0, c(-0.1, 51.5)),
                step("turn", Some("slight left"), 800.0, c(-0.11, 51.51)),
                step("arrive", None, 0.0, c(-0.12, 51.52)),
            ],
            ..RouteLeg::default()
        }],
        geometry: None,
    }
}
