//! Mock DOM for the browser front end
//!
//! Mirrors the calculator page closely enough to test the browser bridge
//! without a browser: the two output slots, the calculator container, the
//! help text, the back and minimise buttons, and one `<button>` per keypad
//! entry. [`MockDom`] implements [`Presenter`], so the controller writes to
//! it exactly as it would write to the real page.

use std::collections::HashMap;

use crate::controller::Presenter;
use crate::core::{Panel, SizeMode, UiState};
use crate::keypad::{CHROME, KEYPAD};

/// Expression slot id
pub const EXPRESSION_ID: &str = "input1";
/// Result slot id
pub const RESULT_ID: &str = "input2";
/// Calculator container id
pub const CONTAINER_ID: &str = "container";
/// Help text id
pub const HELP_TEXT_ID: &str = "helpText";
/// Back button id
pub const BACK_ID: &str = "back";
/// Minimise button id
pub const MINIMISE_ID: &str = "minimise";

/// Container width in normal mode
pub const NORMAL_WIDTH: &str = "60vw";
/// Container width in minimized mode
pub const MINIMIZED_WIDTH: &str = "40vw";
/// Minimise icon shown in normal mode
pub const NORMAL_ICON: &str = "fa-copy";
/// Minimise icon shown in minimized mode
pub const MINIMIZED_ICON: &str = "fa-square";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content (or value, for inputs)
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// Inline style properties
    pub style: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Whether element is displayed
    pub visible: bool,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a visible element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            style: HashMap::new(),
            classes: Vec::new(),
            visible: true,
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets an inline style property
    #[must_use]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    /// Starts hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    /// Gets an inline style property
    #[must_use]
    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Adds a class (once)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page forwards to the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed anywhere on the page
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// In-memory calculator page
#[derive(Debug, Clone, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("input")
                .with_id(EXPRESSION_ID)
                .with_attr("type", "text"),
        );
        dom.register_element(
            DomElement::new("input")
                .with_id(RESULT_ID)
                .with_attr("type", "text")
                .with_attr("readonly", "true"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(CONTAINER_ID)
                .with_class("container")
                .with_style("display", "grid")
                .with_style("width", NORMAL_WIDTH),
        );
        dom.register_element(DomElement::new("div").with_id(HELP_TEXT_ID).hidden());

        for def in KEYPAD.iter().chain(CHROME) {
            let mut button = DomElement::new("button")
                .with_id(def.id)
                .with_text(def.label);
            match def.id {
                BACK_ID => button.set_visible(false),
                MINIMISE_ID => button.add_class(NORMAL_ICON),
                _ => {}
            }
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Returns true if the element exists and is displayed
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Records an event
    pub fn record_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut DomElement)) {
        if let Some(element) = self.elements.get_mut(id) {
            f(element);
        }
    }
}

impl Presenter for MockDom {
    fn show_expression(&mut self, expression: &str) {
        self.with_element(EXPRESSION_ID, |e| e.set_text(expression));
    }

    fn show_result(&mut self, result: &str) {
        self.with_element(RESULT_ID, |e| e.set_text(result));
    }

    fn show_view(&mut self, state: &UiState) {
        let panel = state.panel();
        let (width, icon, stale_icon) = match state.size() {
            SizeMode::Normal => (NORMAL_WIDTH, NORMAL_ICON, MINIMIZED_ICON),
            SizeMode::Minimized => (MINIMIZED_WIDTH, MINIMIZED_ICON, NORMAL_ICON),
        };

        self.with_element(CONTAINER_ID, |e| {
            let main = panel == Panel::Main;
            e.set_visible(main);
            e.set_style("display", if main { "grid" } else { "none" });
            e.set_style("width", width);
        });
        self.with_element(HELP_TEXT_ID, |e| e.set_visible(panel == Panel::Help));
        self.with_element(BACK_ID, |e| {
            e.set_visible(state.back_visible());
            match panel {
                Panel::Help => {
                    e.set_style("top", "90vh");
                    e.set_style("left", "50vw");
                }
                Panel::Cut => {
                    e.set_style("top", "50vh");
                    e.set_style("left", "45vw");
                }
                Panel::Main => {}
            }
        });
        self.with_element(MINIMISE_ID, |e| {
            e.remove_class(stale_icon);
            e.add_class(icon);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("input")
            .with_id("x")
            .with_text("hi")
            .with_attr("type", "text")
            .with_style("width", "10px")
            .with_class("a");
        assert_eq!(elem.id, "x");
        assert_eq!(elem.text_content, "hi");
        assert_eq!(elem.get_attr("type"), Some("text"));
        assert_eq!(elem.get_style("width"), Some("10px"));
        assert!(elem.has_class("a"));
        assert!(elem.visible);
    }

    #[test]
    fn test_dom_element_default() {
        let elem = DomElement::default();
        assert_eq!(elem.tag, "div");
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_classes() {
        let mut elem = DomElement::new("div");
        elem.add_class("foo");
        elem.add_class("bar");
        elem.add_class("foo");
        assert_eq!(elem.classes.len(), 2);
        elem.remove_class("foo");
        assert!(!elem.has_class("foo"));
        assert!(elem.has_class("bar"));
    }

    #[test]
    fn test_dom_element_hidden() {
        let mut elem = DomElement::new("div").hidden();
        assert!(!elem.visible);
        elem.set_visible(true);
        assert!(elem.visible);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("one"),
            DomEvent::Click {
                element_id: "one".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".into()
            }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_calculator_page_structure() {
        let dom = MockDom::calculator();
        assert!(dom.is_visible(EXPRESSION_ID));
        assert!(dom.is_visible(RESULT_ID));
        assert!(dom.is_visible(CONTAINER_ID));
        assert!(!dom.is_visible(HELP_TEXT_ID));
        assert!(!dom.is_visible(BACK_ID));
        for def in KEYPAD {
            assert_eq!(dom.get_element_text(def.id), Some(def.label));
        }
        assert!(dom.get_element(MINIMISE_ID).unwrap().has_class(NORMAL_ICON));
    }

    #[test]
    fn test_missing_element() {
        let dom = MockDom::new();
        assert!(dom.get_element("nope").is_none());
        assert!(!dom.is_visible("nope"));
    }

    #[test]
    fn test_register_ignores_anonymous_elements() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.get_element("").is_none());
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.record_event(DomEvent::click("one"));
        dom.record_event(DomEvent::key_down("2"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    // ===== Presenter tests =====

    #[test]
    fn test_show_expression_and_result() {
        let mut dom = MockDom::calculator();
        dom.show_expression("2+2");
        dom.show_result("4");
        assert_eq!(dom.get_element_text(EXPRESSION_ID), Some("2+2"));
        assert_eq!(dom.get_element_text(RESULT_ID), Some("4"));
    }

    #[test]
    fn test_show_help() {
        let mut dom = MockDom::calculator();
        let mut state = UiState::new();
        state.open_help();
        dom.show_view(&state);
        assert!(!dom.is_visible(CONTAINER_ID));
        assert!(dom.is_visible(HELP_TEXT_ID));
        assert!(dom.is_visible(BACK_ID));
        let back = dom.get_element(BACK_ID).unwrap();
        assert_eq!(back.get_style("top"), Some("90vh"));
        assert_eq!(back.get_style("left"), Some("50vw"));
    }

    #[test]
    fn test_show_cut() {
        let mut dom = MockDom::calculator();
        let mut state = UiState::new();
        state.open_cut();
        dom.show_view(&state);
        assert!(!dom.is_visible(CONTAINER_ID));
        assert!(!dom.is_visible(HELP_TEXT_ID));
        let back = dom.get_element(BACK_ID).unwrap();
        assert!(back.visible);
        assert_eq!(back.get_style("top"), Some("50vh"));
        assert_eq!(back.get_style("left"), Some("45vw"));
    }

    #[test]
    fn test_show_main_after_back() {
        let mut dom = MockDom::calculator();
        let mut state = UiState::new();
        state.open_help();
        dom.show_view(&state);
        state.back();
        dom.show_view(&state);
        assert!(dom.is_visible(CONTAINER_ID));
        assert!(!dom.is_visible(HELP_TEXT_ID));
        assert!(!dom.is_visible(BACK_ID));
        assert_eq!(
            dom.get_element(CONTAINER_ID).unwrap().get_style("display"),
            Some("grid")
        );
    }

    #[test]
    fn test_show_minimized() {
        let mut dom = MockDom::calculator();
        let mut state = UiState::new();
        state.toggle_size();
        dom.show_view(&state);
        let container = dom.get_element(CONTAINER_ID).unwrap();
        assert_eq!(container.get_style("width"), Some(MINIMIZED_WIDTH));
        let minimise = dom.get_element(MINIMISE_ID).unwrap();
        assert!(minimise.has_class(MINIMIZED_ICON));
        assert!(!minimise.has_class(NORMAL_ICON));

        state.toggle_size();
        dom.show_view(&state);
        let container = dom.get_element(CONTAINER_ID).unwrap();
        assert_eq!(container.get_style("width"), Some(NORMAL_WIDTH));
        assert!(dom.get_element(MINIMISE_ID).unwrap().has_class(NORMAL_ICON));
    }
}
