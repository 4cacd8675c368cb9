//! Page wiring configuration
//!
//! Mount ids and the `data-*` attribute names the widgets look for. The
//! defaults match the reference page markup.

use serde::{Deserialize, Serialize};

use crate::error::PageResult;

/// Where the widgets find their elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the theme select control
    pub theme_switcher_id: String,
    /// Id of the calculator container
    pub calculator_id: String,
    /// Data attribute marking the result display (`data-result`)
    pub result_attr: String,
    /// Data attribute carrying digit tags (`data-number`)
    pub number_attr: String,
    /// Data attribute carrying operator symbols (`data-operator`)
    pub operator_attr: String,
    /// Data attribute carrying control actions (`data-control`)
    pub control_attr: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_switcher_id: "theme-switcher".to_string(),
            calculator_id: "calculator".to_string(),
            result_attr: "result".to_string(),
            number_attr: "number".to_string(),
            operator_attr: "operator".to_string(),
            control_attr: "control".to_string(),
        }
    }
}

impl PageConfig {
    /// Create the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> PageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the theme switcher id
    #[must_use]
    pub fn with_theme_switcher_id(mut self, id: &str) -> Self {
        self.theme_switcher_id = id.to_string();
        self
    }

    /// Set the calculator container id
    #[must_use]
    pub fn with_calculator_id(mut self, id: &str) -> Self {
        self.calculator_id = id.to_string();
        self
    }

    /// CSS selector for an attribute, e.g. `[data-number]`
    #[must_use]
    pub fn data_selector(attr: &str) -> String {
        format!("[data-{attr}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[test]
    fn test_defaults() {
        let config = PageConfig::new();
        assert_eq!(config.theme_switcher_id, "theme-switcher");
        assert_eq!(config.calculator_id, "calculator");
        assert_eq!(config.result_attr, "result");
        assert_eq!(config.number_attr, "number");
        assert_eq!(config.operator_attr, "operator");
        assert_eq!(config.control_attr, "control");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{ "calculator_id": "calc" }"#).unwrap();
        assert_eq!(config.calculator_id, "calc");
        assert_eq!(config.theme_switcher_id, "theme-switcher");
    }

    #[test]
    fn test_json_round_trip() {
        let config = PageConfig::new().with_theme_switcher_id("switch");
        let json = config.to_json().unwrap();
        assert_eq!(PageConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = PageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_data_selector() {
        assert_eq!(PageConfig::data_selector("number"), "[data-number]");
    }
}
