//! A search widget without a geocoding backend.
//!
//! [`MarkupSearchWidget`] renders its input element and records what the
//! controller pushes into it. Selecting a result or clearing the input is
//! driven by the host through [`MarkupSearchWidget::select`] and
//! [`MarkupSearchWidget::clear`].

use std::cell::RefCell;
use std::rc::Rc;

use askama::Template;

use crate::domain::Coordinates;
use crate::state::LocationQuery;
use crate::view::{GeocoderTemplate, ViewError};

use super::{GeocodeResult, MapCamera, SearchWidget, SearchWidgetOptions};

pub struct MarkupSearchWidget {
    options: SearchWidgetOptions,
    value: RefCell<String>,
    queries: RefCell<Vec<LocationQuery>>,
    inputs: RefCell<Vec<Coordinates>>,
    result_callback: RefCell<Option<Rc<dyn Fn(&GeocodeResult)>>>,
    clear_callback: RefCell<Option<Rc<dyn Fn()>>>,
}

impl MarkupSearchWidget {
    pub fn new(options: SearchWidgetOptions) -> Self {
        Self {
            options,
            value: RefCell::new(String::new()),
            queries: RefCell::new(Vec::new()),
            inputs: RefCell::new(Vec::new()),
            result_callback: RefCell::new(None),
            clear_callback: RefCell::new(None),
        }
    }

    pub fn options(&self) -> &SearchWidgetOptions {
        &self.options
    }

    /// The text currently shown in the input.
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Queries received, oldest first.
    pub fn queries(&self) -> Vec<LocationQuery> {
        self.queries.borrow().clone()
    }

    /// Coordinates received through `set_input`, oldest first.
    pub fn inputs(&self) -> Vec<Coordinates> {
        self.inputs.borrow().clone()
    }

    /// Pick `result` as if the user chose it from the suggestions.
    pub fn select(&self, result: GeocodeResult) {
        *self.value.borrow_mut() = result.place_name.clone();
        let callback = self.result_callback.borrow().clone();
        if let Some(callback) = callback {
            callback(&result);
        }
    }

    /// Empty the input as if the user cleared it.
    pub fn clear(&self) {
        self.value.borrow_mut().clear();
        let callback = self.clear_callback.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl SearchWidget for MarkupSearchWidget {
    fn on_add(&self, _map: &dyn MapCamera) -> Result<String, ViewError> {
        let value = self.value.borrow();
        let html = GeocoderTemplate {
            placeholder: &self.options.placeholder,
            value: &value,
        }
        .render()?;
        Ok(html)
    }

    fn query(&self, query: &LocationQuery) {
        *self.value.borrow_mut() = query.as_text();
        self.queries.borrow_mut().push(query.clone());
    }

    fn set_input(&self, coordinates: Coordinates) {
        *self.value.borrow_mut() = coordinates.to_string();
        self.inputs.borrow_mut().push(coordinates);
    }

    fn on_result(&self, callback: Box<dyn Fn(&GeocodeResult)>) {
        *self.result_callback.borrow_mut() = Some(Rc::from(callback));
    }

    fn on_clear(&self, callback: Box<dyn Fn()>) {
        *self.clear_callback.borrow_mut() = Some(Rc::from(callback));
    }
}
