//! Interfaces of the collaborators the controllers drive.
//!
//! Controllers hold these behind `Rc<dyn ...>` and call them from a single
//! thread, so every method takes `&self`.

use std::rc::Rc;

use crate::domain::{BoundingBox, Coordinates};
use crate::state::{LocationQuery, WidgetSettings};
use crate::view::ViewError;

/// A location chosen in a search widget.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub center: Coordinates,
    pub place_name: String,
}

/// Construction options for a search widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchWidgetOptions {
    pub access_token: String,
    /// Passed through untouched.
    pub geocoder: serde_json::Map<String, serde_json::Value>,
    pub fly_to: bool,
    pub placeholder: String,
    pub zoom: f64,
}

impl SearchWidgetOptions {
    /// Shared geocoder settings plus a widget-specific placeholder.
    pub fn from_settings(settings: &WidgetSettings, placeholder: &str) -> Self {
        Self {
            access_token: settings.access_token.clone(),
            geocoder: settings.geocoder.clone(),
            fly_to: settings.fly_to,
            placeholder: placeholder.to_string(),
            zoom: settings.zoom,
        }
    }
}

/// A location search input.
pub trait SearchWidget {
    /// Build the widget's element markup.
    fn on_add(&self, map: &dyn MapCamera) -> Result<String, ViewError>;

    /// Run a search for `query`.
    fn query(&self, query: &LocationQuery);

    /// Display `coordinates` without searching.
    fn set_input(&self, coordinates: Coordinates);

    /// Register the callback fired when the user picks a result.
    fn on_result(&self, callback: Box<dyn Fn(&GeocodeResult)>);

    /// Register the callback fired when the user clears the input.
    fn on_clear(&self, callback: Box<dyn Fn()>);
}

/// Creates search widgets.
pub trait SearchWidgetFactory {
    fn create(&self, options: SearchWidgetOptions) -> Rc<dyn SearchWidget>;
}

impl<F> SearchWidgetFactory for F
where
    F: Fn(SearchWidgetOptions) -> Rc<dyn SearchWidget>,
{
    fn create(&self, options: SearchWidgetOptions) -> Rc<dyn SearchWidget> {
        self(options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBoundsOptions {
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyToOptions {
    pub center: Coordinates,
    pub zoom: Option<f64>,
}

/// The map camera.
pub trait MapCamera {
    fn fit_bounds(&self, bounds: BoundingBox, options: FitBoundsOptions);
    fn fly_to(&self, options: FlyToOptions);
}

/// The element a controller renders into.
pub trait ViewContainer {
    /// Replace the container's content.
    fn set_inner_html(&self, html: String);

    /// Whether the container currently has no content.
    fn is_blank(&self) -> bool;

    /// Append `element` inside the child element with ID `slot_id`.
    fn attach(&self, slot_id: &str, element: String);
}
