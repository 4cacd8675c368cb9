//! Mock DOM for page testing
//!
//! Stands in for the browser document so the widget wiring can be exercised
//! natively. Elements live in a registry keyed by id and refer to their
//! children by id.

use std::collections::HashMap;

use crate::config::PageConfig;
use crate::core::{ControlAction, Operator};
use crate::theme::ClassList;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes, `data-*` included
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child element ids
    pub children: Vec<String>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Creates an element with an ID
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

    /// Sets a `data-*` attribute
    #[must_use]
    pub fn with_data(self, name: &str, value: &str) -> Self {
        self.with_attr(&format!("data-{name}"), value)
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Gets a `data-*` attribute value, like `element.dataset[name]`
    #[must_use]
    pub fn data(&self, name: &str) -> Option<&str> {
        self.get_attr(&format!("data-{name}"))
    }

    /// Current `value` of a form control
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
    }
}

impl ClassList for DomElement {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Discrete events delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// The page finished loading
    Load,
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Input event with new value
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value
        value: String,
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

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }
}

/// Mock document
#[derive(Debug)]
pub struct MockDom {
    /// Document body
    pub body: DomElement,
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Id of the result display on the reference page
    pub const RESULT_ID: &'static str = "calc-result";

    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: DomElement::new("body"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Builds the reference page for `config`: a theme select control and
    /// a calculator with a result node and tagged keypad buttons.
    #[must_use]
    pub fn page(config: &PageConfig) -> Self {
        let mut dom = Self::new();

        let switcher = DomElement::new("select")
            .with_id(&config.theme_switcher_id)
            .with_attr("value", "1");
        dom.register_element(switcher);

        dom.register_element(
            DomElement::new("div")
                .with_id(&config.calculator_id)
                .with_class("calculator"),
        );

        let result = DomElement::new("output")
            .with_id(Self::RESULT_ID)
            .with_data(&config.result_attr, "");
        dom.append_child(&config.calculator_id, result);

        for digit in 0..=9 {
            let label = digit.to_string();
            let button = DomElement::new("button")
                .with_id(&button_id(&label))
                .with_text(&label)
                .with_data(&config.number_attr, &label);
            dom.append_child(&config.calculator_id, button);
        }

        for op in Operator::ALL {
            let button = DomElement::new("button")
                .with_id(&button_id(op.symbol()))
                .with_text(op.symbol())
                .with_data(&config.operator_attr, op.symbol());
            dom.append_child(&config.calculator_id, button);
        }

        for action in [
            ControlAction::Reset,
            ControlAction::Delete,
            ControlAction::Calculate,
        ] {
            let button = DomElement::new("button")
                .with_id(&button_id(action.tag()))
                .with_data(&config.control_attr, action.tag());
            dom.append_child(&config.calculator_id, button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.id.clone());
        }
        self.register_element(child);
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

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Ids of all descendants of `root_id` carrying `data-<name>`, in
    /// document order
    #[must_use]
    pub fn query_data(&self, root_id: &str, name: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack: Vec<&str> = match self.elements.get(root_id) {
            Some(root) => root.children.iter().rev().map(String::as_str).collect(),
            None => return found,
        };

        while let Some(id) = stack.pop() {
            let Some(elem) = self.elements.get(id) else {
                continue;
            };
            if elem.data(name).is_some() {
                found.push(elem.id.clone());
            }
            stack.extend(elem.children.iter().rev().map(String::as_str));
        }

        found
    }

    /// Records an event. Input events also update the control's value.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Input { element_id, value } = &event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.attributes.insert("value".to_string(), value.clone());
            }
        }
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
}

/// Element id for a keypad button on the reference page
#[must_use]
pub fn button_id(tag: &str) -> String {
    let name = match tag {
        "+" => "plus",
        "-" => "minus",
        "*" => "times",
        "/" => "divide",
        other => other,
    };
    format!("btn-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("key")
            .with_data("number", "7");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("key"));
        assert_eq!(elem.data("number"), Some("7"));
        assert_eq!(elem.get_attr("data-number"), Some("7"));
    }

    #[test]
    fn test_dom_element_class_list() {
        let mut elem = DomElement::new("body");
        elem.add_class("theme-dark");
        elem.add_class("theme-dark");
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("theme-dark");
        assert!(!elem.has_class("theme-dark"));
    }

    #[test]
    fn test_dom_element_missing_data() {
        let elem = DomElement::new("div");
        assert_eq!(elem.data("number"), None);
        assert_eq!(elem.value(), None);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert!(matches!(DomEvent::click("btn"), DomEvent::Click { element_id } if element_id == "btn"));
        assert!(matches!(
            DomEvent::input("field", "2"),
            DomEvent::Input { element_id, value } if element_id == "field" && value == "2"
        ));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_reference_page_layout() {
        let config = PageConfig::default();
        let dom = MockDom::page(&config);

        assert_eq!(dom.get_element("theme-switcher").and_then(DomElement::value), Some("1"));
        assert_eq!(dom.query_data("calculator", "result"), vec![MockDom::RESULT_ID]);
        assert_eq!(dom.query_data("calculator", "number").len(), 10);
        assert_eq!(
            dom.query_data("calculator", "operator"),
            vec!["btn-plus", "btn-minus", "btn-divide", "btn-times"]
        );
        assert_eq!(
            dom.query_data("calculator", "control"),
            vec!["btn-reset", "btn-delete", "btn-calculate"]
        );
    }

    #[test]
    fn test_query_data_unknown_root() {
        let dom = MockDom::page(&PageConfig::default());
        assert!(dom.query_data("nope", "number").is_empty());
    }

    #[test]
    fn test_query_data_descends() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("outer"));
        dom.append_child("outer", DomElement::new("div").with_id("inner"));
        dom.append_child("inner", DomElement::new("button").with_id("deep").with_data("number", "1"));
        assert_eq!(dom.query_data("outer", "number"), vec!["deep"]);
    }

    #[test]
    fn test_element_text() {
        let mut dom = MockDom::page(&PageConfig::default());
        dom.set_element_text(MockDom::RESULT_ID, "42");
        assert_eq!(dom.get_element_text(MockDom::RESULT_ID), Some("42"));
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_input_event_updates_value() {
        let mut dom = MockDom::page(&PageConfig::default());
        dom.dispatch_event(DomEvent::input("theme-switcher", "3"));
        assert_eq!(dom.get_element("theme-switcher").and_then(DomElement::value), Some("3"));
        assert_eq!(dom.event_history().len(), 1);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id("7"), "btn-7");
        assert_eq!(button_id("+"), "btn-plus");
        assert_eq!(button_id("*"), "btn-times");
        assert_eq!(button_id("reset"), "btn-reset");
    }
}
