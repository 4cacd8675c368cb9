//! Page driver
//!
//! Wires the theme selector and calculator engine to the mock DOM the same
//! way the browser binding wires them to the real document: one-time
//! construction on load, then each discrete event is routed to its handler
//! and rendered results are written to the result node.

use std::collections::HashSet;

use super::dom::{button_id, DomElement, DomEvent, MockDom};
use crate::config::PageConfig;
use crate::core::{CalculatorEngine, Transition};
use crate::error::{PageError, PageResult};
use crate::theme::{Theme, ThemeSelector};

/// Widgets constructed on page load
#[derive(Debug)]
struct Widgets {
    theme: ThemeSelector,
    calculator: CalculatorEngine,
    result_id: String,
    number_ids: HashSet<String>,
    operator_ids: HashSet<String>,
    control_ids: HashSet<String>,
}

/// Which keypad collection a click listener belongs to
#[derive(Debug, Clone, Copy)]
enum Key {
    Number,
    Control,
    Operator,
}

/// Drives the widgets through host events
#[derive(Debug)]
pub struct PageDriver {
    config: PageConfig,
    dom: MockDom,
    widgets: Option<Widgets>,
}

impl Default for PageDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDriver {
    /// Creates a driver over the reference page, not yet loaded
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    /// Creates a driver over the reference page built for `config`
    #[must_use]
    pub fn with_config(config: PageConfig) -> Self {
        let dom = MockDom::page(&config);
        Self::with_dom(config, dom)
    }

    /// Creates a driver over an existing document
    #[must_use]
    pub fn with_dom(config: PageConfig, dom: MockDom) -> Self {
        Self {
            config,
            dom,
            widgets: None,
        }
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the document body
    #[must_use]
    pub fn body(&self) -> &DomElement {
        &self.dom.body
    }

    /// Returns the calculator engine once loaded
    #[must_use]
    pub fn engine(&self) -> Option<&CalculatorEngine> {
        self.widgets.as_ref().map(|w| &w.calculator)
    }

    /// Whether the load event has been handled
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.widgets.is_some()
    }

    /// Text of the result node
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        let widgets = self.widgets.as_ref()?;
        self.dom.get_element_text(&widgets.result_id)
    }

    /// Theme currently marked on the body, if exactly one is
    #[must_use]
    pub fn active_theme(&self) -> Option<Theme> {
        let mut active = Theme::ALL
            .into_iter()
            .filter(|t| self.dom.body.classes.iter().any(|c| c == t.css_class()));
        let theme = active.next()?;
        active.next().is_none().then_some(theme)
    }

    /// Delivers one host event
    pub fn handle(&mut self, event: DomEvent) -> PageResult<()> {
        self.dom.dispatch_event(event.clone());

        match event {
            DomEvent::Load => self.on_load(),
            DomEvent::Click { element_id } => self.on_click(&element_id),
            DomEvent::Input { element_id, value } => self.on_input(&element_id, &value),
        }
    }

    /// Delivers the page-ready notification
    pub fn load(&mut self) -> PageResult<()> {
        self.handle(DomEvent::Load)
    }

    /// Clicks an element by id
    pub fn click(&mut self, element_id: &str) -> PageResult<()> {
        self.handle(DomEvent::click(element_id))
    }

    /// Clicks the reference page button tagged `tag`
    pub fn press(&mut self, tag: &str) -> PageResult<()> {
        self.click(&button_id(tag))
    }

    /// Clicks each reference page button in turn, e.g. `["1", "+", "2", "calculate"]`
    pub fn press_all(&mut self, tags: &[&str]) -> PageResult<()> {
        tags.iter().try_for_each(|tag| self.press(tag))
    }

    /// Changes the theme control's value
    pub fn select_theme(&mut self, value: &str) -> PageResult<()> {
        let id = self.config.theme_switcher_id.clone();
        self.handle(DomEvent::input(&id, value))
    }

    fn on_load(&mut self) -> PageResult<()> {
        if self.widgets.is_some() {
            return Ok(());
        }

        let switcher = self
            .dom
            .get_element(&self.config.theme_switcher_id)
            .ok_or_else(|| PageError::MissingMount {
                selector: format!("#{}", self.config.theme_switcher_id),
            })?;
        let initial = switcher.value().map(str::to_string);

        let calculator_id = &self.config.calculator_id;
        if self.dom.get_element(calculator_id).is_none() {
            return Err(PageError::MissingMount {
                selector: format!("#{calculator_id}"),
            });
        }
        let result_id = self
            .dom
            .query_data(calculator_id, &self.config.result_attr)
            .into_iter()
            .next()
            .ok_or_else(|| PageError::MissingMount {
                selector: PageConfig::data_selector(&self.config.result_attr),
            })?;

        let ids = |attr: &str| -> HashSet<String> {
            self.dom.query_data(calculator_id, attr).into_iter().collect()
        };
        let number_ids = ids(&self.config.number_attr);
        let operator_ids = ids(&self.config.operator_attr);
        let control_ids = ids(&self.config.control_attr);

        let theme = ThemeSelector::attach(&mut self.dom.body, initial.as_deref());
        let calculator = CalculatorEngine::new();
        self.dom.set_element_text(&result_id, calculator.display());

        tracing::info!(
            numbers = number_ids.len(),
            operators = operator_ids.len(),
            controls = control_ids.len(),
            "page widgets loaded"
        );

        self.widgets = Some(Widgets {
            theme,
            calculator,
            result_id,
            number_ids,
            operator_ids,
            control_ids,
        });
        Ok(())
    }

    fn on_click(&mut self, element_id: &str) -> PageResult<()> {
        let widgets = self.widgets.as_mut().ok_or(PageError::NotLoaded)?;
        let element = self
            .dom
            .get_element(element_id)
            .ok_or_else(|| PageError::ElementNotFound {
                id: element_id.to_string(),
            })?;

        let data = |attr: &str| element.data(attr).unwrap_or_default().to_string();

        // Listener registration order: numbers, controls, operators
        let mut listeners = Vec::new();
        if widgets.number_ids.contains(element_id) {
            listeners.push((Key::Number, data(&self.config.number_attr)));
        }
        if widgets.control_ids.contains(element_id) {
            listeners.push((Key::Control, data(&self.config.control_attr)));
        }
        if widgets.operator_ids.contains(element_id) {
            listeners.push((Key::Operator, data(&self.config.operator_attr)));
        }

        // Every listener runs even if an earlier one fails; the first
        // failure is reported.
        let mut first_err = None;
        for (key, tag) in listeners {
            let outcome = match key {
                Key::Number => widgets.calculator.digit(&tag),
                Key::Control => Ok(widgets.calculator.control(&tag)),
                Key::Operator => widgets.calculator.operator(&tag),
            };
            match outcome {
                Ok(Transition::Rendered) => self
                    .dom
                    .set_element_text(&widgets.result_id, widgets.calculator.display()),
                Ok(Transition::Unchanged) => {}
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }

        first_err.map_or(Ok(()), |err| Err(err.into()))
    }

    fn on_input(&mut self, element_id: &str, value: &str) -> PageResult<()> {
        let widgets = self.widgets.as_ref().ok_or(PageError::NotLoaded)?;
        if element_id == self.config.theme_switcher_id {
            widgets.theme.on_control_changed(&mut self.dom.body, Some(value));
        }
        Ok(())
    }
}
