//! Browser bindings
//!
//! Wires the widgets to the real document with web-sys. Mirrors
//! [`super::PageDriver`]: everything is constructed once on window `load`,
//! and every tagged element gets its own listener.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, DomTokenList, Element, Event, EventTarget, HtmlElement, HtmlSelectElement,
};

use crate::config::PageConfig;
use crate::core::{CalcResult, CalculatorEngine, Transition};
use crate::error::PageError;
use crate::theme::{ClassList, ThemeSelector};

type KeyHandler = fn(&mut CalculatorEngine, &str) -> CalcResult<Transition>;

/// Body class list as a theme target
struct BodyClasses(DomTokenList);

impl ClassList for BodyClasses {
    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.0.add_1(class) {
            tracing::warn!(class, error = ?err, "failed to add body class");
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.0.remove_1(class) {
            tracing::warn!(class, error = ?err, "failed to remove body class");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.contains(class)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn missing(selector: String) -> JsValue {
    to_js(PageError::MissingMount { selector })
}

/// Initialize the widgets once the page has loaded
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| missing("window".to_string()))?;
    let on_load = Closure::wrap(
        Box::new(move |_event: Event| mount(&PageConfig::default()))
            as Box<dyn FnMut(Event) -> Result<(), JsValue>>,
    );
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

/// Mounts both widgets on the current document
pub fn mount(config: &PageConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| missing("document".to_string()))?;

    enable_theme_switcher(&document, config)?;
    enable_calculator(&document, config)?;

    console::log_1(&"Page widgets initialized".into());
    Ok(())
}

fn enable_theme_switcher(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let switcher: HtmlSelectElement = document
        .get_element_by_id(&config.theme_switcher_id)
        .ok_or_else(|| missing(format!("#{}", config.theme_switcher_id)))?
        .dyn_into()?;
    let body = document.body().ok_or_else(|| missing("body".to_string()))?;

    let selector =
        ThemeSelector::attach(&mut BodyClasses(body.class_list()), Some(switcher.value().as_str()));

    let on_input = Closure::wrap(Box::new(move |event: Event| {
        let value = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|s| s.value());
        console::log_1(&value.clone().unwrap_or_default().into());
        selector.on_control_changed(&mut BodyClasses(body.class_list()), value.as_deref());
    }) as Box<dyn FnMut(Event)>);
    switcher.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

fn enable_calculator(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let root = document
        .get_element_by_id(&config.calculator_id)
        .ok_or_else(|| missing(format!("#{}", config.calculator_id)))?;
    let result_selector = PageConfig::data_selector(&config.result_attr);
    let result = root
        .query_selector(&result_selector)?
        .ok_or_else(|| missing(result_selector))?;

    let engine = Rc::new(RefCell::new(CalculatorEngine::new()));
    result.set_text_content(Some(engine.borrow().display()));

    wire_keys(&root, &config.number_attr, &engine, &result, CalculatorEngine::digit)?;
    wire_keys(&root, &config.control_attr, &engine, &result, |engine, tag| {
        Ok(engine.control(tag))
    })?;
    wire_keys(&root, &config.operator_attr, &engine, &result, CalculatorEngine::operator)?;
    Ok(())
}

/// Attaches a click listener to every element under `root` carrying
/// `data-<attr>`; the listener feeds the tag value to `handler`.
fn wire_keys(
    root: &Element,
    attr: &str,
    engine: &Rc<RefCell<CalculatorEngine>>,
    result: &Element,
    handler: KeyHandler,
) -> Result<(), JsValue> {
    let nodes = root.query_selector_all(&PageConfig::data_selector(attr))?;

    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let target: EventTarget = node.dyn_into()?;

        let engine = Rc::clone(engine);
        let result = result.clone();
        let attr = attr.to_string();
        let on_click = Closure::wrap(Box::new(move |event: Event| -> Result<(), JsValue> {
            let tag = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                .and_then(|el| el.dataset().get(&attr))
                .unwrap_or_default();

            let transition = handler(&mut engine.borrow_mut(), &tag).map_err(to_js)?;
            if transition.rendered() {
                result.set_text_content(Some(engine.borrow().display()));
            }
            Ok(())
        }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);

        target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}
