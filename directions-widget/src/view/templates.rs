//! Askama templates for the widget markup.
//!
//! Class names and element IDs are relied on by stylesheets and host pages
//! and must not change.

use askama::Template;

use crate::domain::Profile;

use super::RouteView;

/// Errors from rendering widget markup.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Inputs shell: origin and destination slots, reverse button, profile
/// switcher.
#[derive(Template)]
#[template(path = "inputs.html")]
pub struct InputsTemplate {
    pub profile_switcher: bool,
    pub profiles: Vec<ProfileOption>,
}

impl InputsTemplate {
    pub fn new(current: Profile, profile_switcher: bool) -> Self {
        Self {
            profile_switcher,
            profiles: Profile::ALL
                .into_iter()
                .map(|p| ProfileOption {
                    id: p.element_id(),
                    value: p.as_str(),
                    label: p.label(),
                    checked: p == current,
                })
                .collect(),
        }
    }
}

/// A profile radio input.
#[derive(Debug, Clone)]
pub struct ProfileOption {
    pub id: String,
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Route summary and step list.
#[derive(Template)]
#[template(path = "instructions.html")]
pub struct InstructionsTemplate<'a> {
    pub view: &'a RouteView,
}

/// Error in place of the route summary.
#[derive(Template)]
#[template(path = "instructions_error.html")]
pub struct InstructionsErrorTemplate<'a> {
    pub error: &'a str,
}

/// Search input element for a headless search widget.
#[derive(Template)]
#[template(path = "geocoder.html")]
pub struct GeocoderTemplate<'a> {
    pub placeholder: &'a str,
    pub value: &'a str,
}
