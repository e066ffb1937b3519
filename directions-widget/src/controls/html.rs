//! In-memory view container.

use std::cell::{Cell, RefCell};

use super::ViewContainer;

/// A [`ViewContainer`] holding markup as a string.
///
/// Attached elements are inserted at the start of the element carrying the
/// slot ID. `render_count` counts full rebuilds via `set_inner_html`.
#[derive(Debug, Default)]
pub struct HtmlContainer {
    html: RefCell<String>,
    renders: Cell<usize>,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl ViewContainer for HtmlContainer {
    fn set_inner_html(&self, html: String) {
        *self.html.borrow_mut() = html;
        self.renders.set(self.renders.get() + 1);
    }

    fn is_blank(&self) -> bool {
        self.html.borrow().trim().is_empty()
    }

    fn attach(&self, slot_id: &str, element: String) {
        let marker = format!("id='{slot_id}'>");
        let mut html = self.html.borrow_mut();
        match html.find(&marker) {
            Some(at) => html.insert_str(at + marker.len(), &element),
            None => tracing::warn!(slot = slot_id, "no slot to attach element to"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_inserts_into_slot() {
        let container = HtmlContainer::new();
        container.set_inner_html("<div id='a'></div><div id='b'></div>".into());

        container.attach("b", "<input>".into());

        assert_eq!(container.html(), "<div id='a'></div><div id='b'><input></div>");
        assert_eq!(container.render_count(), 1);
    }

    #[test]
    fn attach_to_missing_slot_is_ignored() {
        let container = HtmlContainer::new();
        container.set_inner_html("<div></div>".into());
        container.attach("missing", "<input>".into());
        assert_eq!(container.html(), "<div></div>");
    }

    #[test]
    fn blank_detection() {
        let container = HtmlContainer::new();
        assert!(container.is_blank());
        container.set_inner_html("  \n".into());
        assert!(container.is_blank());
        container.set_inner_html("<p>".into());
        assert!(!container.is_blank());
    }
}
