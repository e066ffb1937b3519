//! Controllers that keep the widget markup in sync with the shared state.
//!
//! Both controllers read snapshots through [`StateSource`](crate::state::StateSource),
//! write through [`ActionSink`](crate::state::ActionSink) and never talk to
//! each other. Their collaborators (search widgets, the map camera, the
//! container element) are the traits in [`capabilities`]; headless
//! implementations of each live alongside.

pub mod camera;
pub mod capabilities;
mod html;
mod inputs;
mod instructions;
mod markup;
mod memo;

#[cfg(test)]
mod test_support;



pub use camera::{CameraCommand, CameraRecorder};
pub use capabilities::{
    FitBoundsOptions, FlyToOptions, GeocodeResult, MapCamera, SearchWidget, SearchWidgetFactory,
    SearchWidgetOptions, ViewContainer,
};
pub use html::HtmlContainer;
pub use inputs::{DESTINATION_SLOT, InputController, InputsEvent, ORIGIN_SLOT};
pub use instructions::{DisplayedView, InstructionsController, InstructionsEvent, STEP_ZOOM};
pub use markup::MarkupSearchWidget;
pub use memo::Memo;
