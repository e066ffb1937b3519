//! Server-side rendering of the widget panels.
//!
//! Each call seeds a fresh [`Store`] with the posted snapshot, builds the
//! controller over headless collaborators and lets one notification run.
//! Everything is dropped before the function returns.

use std::rc::Rc;

use crate::controls::{
    CameraRecorder, HtmlContainer, InputController, InstructionsController, MarkupSearchWidget,
    SearchWidget, SearchWidgetOptions,
};
use crate::state::{DirectionsState, Store};
use crate::view::ViewError;

/// The instructions panel for `state`.
pub fn instructions_html(state: DirectionsState) -> String {
    let store = Rc::new(Store::new(state));
    let container = Rc::new(HtmlContainer::new());

    let _controller = InstructionsController::new(
        container.clone(),
        store.clone(),
        store.clone(),
        Rc::new(CameraRecorder::new()),
    );
    store.notify();

    container.html()
}

/// The inputs panel for `state`, with both search widgets attached.
pub fn inputs_html(state: DirectionsState) -> Result<String, ViewError> {
    let store = Rc::new(Store::new(state));
    let container = Rc::new(HtmlContainer::new());
    let factory = |options: SearchWidgetOptions| -> Rc<dyn SearchWidget> {
        Rc::new(MarkupSearchWidget::new(options))
    };

    let _controller = InputController::new(
        container.clone(),
        store.clone(),
        store.clone(),
        Rc::new(CameraRecorder::new()),
        &factory,
    )?;
    store.notify();

    Ok(container.html())
}
