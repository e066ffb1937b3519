//! Rendering for the widget controls.
//!
//! [`steps`] turns routes into view models; [`templates`] turns view models
//! and settings into markup.

mod steps;
mod templates;

pub use steps::{
    InstructionCompiler, RenderContext, RouteSelectorView, RouteView, StepView, SummaryView,
    maneuver_icon,
};
pub use templates::{
    GeocoderTemplate, InputsTemplate, InstructionsErrorTemplate, InstructionsTemplate,
    ProfileOption, ViewError,
};
