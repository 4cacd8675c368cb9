//! End-to-end tests driving the reference page through host events

use page_widgets::prelude::*;
use page_widgets::wasm::button_id;

fn loaded_page() -> PageDriver {
    let mut driver = PageDriver::new();
    driver.load().unwrap();
    driver
}

// =============================================================================
// Calculator sessions
// =============================================================================

#[test]
fn test_session_with_chained_calculate() {
    let mut page = loaded_page();

    page.press_all(&["2", "0", "/", "4"]).unwrap();
    assert_eq!(page.result_text(), Some("4"));

    page.press("calculate").unwrap();
    assert_eq!(page.result_text(), Some("5"));

    // Left operand is still 20, so dividing again uses it
    page.press("calculate").unwrap();
    assert_eq!(page.result_text(), Some("4"));
}

#[test]
fn test_result_can_be_extended_by_typing() {
    let mut page = loaded_page();
    page.press_all(&["1", "+", "1", "calculate", "3"]).unwrap();
    assert_eq!(page.result_text(), Some("23"));
}

#[test]
fn test_fractional_result_and_delete() {
    let mut page = loaded_page();
    page.press_all(&["1", "/", "8", "calculate"]).unwrap();
    assert_eq!(page.result_text(), Some("0.125"));

    page.press("delete").unwrap();
    assert_eq!(page.result_text(), Some("0.12"));
}

#[test]
fn test_divide_by_zero_renders_infinity() {
    let mut page = loaded_page();
    page.press_all(&["7", "/", "calculate"]).unwrap();
    assert_eq!(page.result_text(), Some("Infinity"));

    page.press("delete").unwrap();
    assert_eq!(page.result_text(), Some("0"));
}

#[test]
fn test_operator_after_zero_result_divides_stale_left() {
    let mut page = loaded_page();
    page.press_all(&["5", "-", "5", "calculate"]).unwrap();
    assert_eq!(page.result_text(), Some("0"));

    // Right operand is 0 so "/" only records the operator
    page.press("/").unwrap();
    page.press("calculate").unwrap();
    assert_eq!(page.result_text(), Some("Infinity"));
}

#[test]
fn test_reset_mid_expression() {
    let mut page = loaded_page();
    page.press_all(&["9", "*", "9", "reset"]).unwrap();
    assert_eq!(page.result_text(), Some("0"));

    let state = page.engine().map(|e| *e.state()).unwrap();
    assert_eq!(state, CalculatorState::default());

    page.press("calculate").unwrap();
    assert_eq!(page.result_text(), Some("0"));
}

#[test]
fn test_every_reference_button_is_wired() {
    let mut page = loaded_page();
    let dom_ids: Vec<String> = ["number", "operator", "control"]
        .iter()
        .flat_map(|attr| page.dom().query_data("calculator", attr))
        .collect();
    assert_eq!(dom_ids.len(), 17);

    for id in &dom_ids {
        page.click(id).unwrap();
    }
    assert!(page.engine().map(CalculatorEngine::render_count).unwrap() > 1);
}

// =============================================================================
// Theme switching
// =============================================================================

#[test]
fn test_theme_follows_control() {
    let mut page = loaded_page();
    assert_eq!(page.active_theme(), Some(Theme::Dark));

    for (value, theme) in [("2", Theme::Light), ("3", Theme::Contrast), ("1", Theme::Dark)] {
        page.select_theme(value).unwrap();
        assert_eq!(page.active_theme(), Some(theme));
        assert_eq!(
            page.dom().get_element("theme-switcher").and_then(DomElement::value),
            Some(value)
        );
    }
}

#[test]
fn test_theme_does_not_disturb_calculator() {
    let mut page = loaded_page();
    page.press_all(&["4", "2"]).unwrap();
    page.select_theme("3").unwrap();
    assert_eq!(page.result_text(), Some("42"));
    assert!(page.body().has_class("theme-contrast"));
}

// =============================================================================
// Configuration and malformed markup
// =============================================================================

#[test]
fn test_custom_mount_ids() {
    let config = PageConfig::from_json(r#"{ "theme_switcher_id": "skin", "calculator_id": "calc" }"#)
        .unwrap();
    let mut page = PageDriver::with_config(config);
    page.load().unwrap();

    page.press_all(&["3", "*", "3", "calculate"]).unwrap();
    assert_eq!(page.result_text(), Some("9"));

    page.handle(DomEvent::input("skin", "2")).unwrap();
    assert_eq!(page.active_theme(), Some(Theme::Light));
}

#[test]
fn test_malformed_markup_surfaces_error() {
    let config = PageConfig::default();
    let mut dom = MockDom::page(&config);
    dom.append_child(
        "calculator",
        DomElement::new("button")
            .with_id(&button_id("%"))
            .with_data("operator", "%"),
    );
    let mut page = PageDriver::with_dom(config, dom);
    page.load().unwrap();
    page.press("6").unwrap();

    let err = page.press("%").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Calculator supports only +, -, / and * operators, got '%'"
    );
    assert_eq!(page.result_text(), Some("6"));
    assert_eq!(page.engine().and_then(|e| e.state().operator), None);
}
