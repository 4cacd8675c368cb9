//! Page theme switcher
//!
//! A select control holds `"1"`, `"2"` or `"3"`; each maps to a theme that is
//! applied as a single `theme-<name>` class on the page body. Unknown or
//! missing values fall back to dark.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual theme for the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (fallback)
    #[default]
    Dark,
    /// Light theme
    Light,
    /// High contrast theme
    Contrast,
}

impl Theme {
    /// Every theme, in control order
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Contrast];

    /// Theme identifier
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Contrast => "contrast",
        }
    }

    /// CSS class that marks the theme on the body
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
            Self::Contrast => "theme-contrast",
        }
    }

    /// Looks up a selector control value. Only `"1"`, `"2"` and `"3"` map.
    #[must_use]
    pub fn from_control_value(value: Option<&str>) -> Option<Self> {
        match value? {
            "1" => Some(Self::Dark),
            "2" => Some(Self::Light),
            "3" => Some(Self::Contrast),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything carrying a CSS class list
pub trait ClassList {
    /// Adds a class if not already present
    fn add_class(&mut self, class: &str);

    /// Removes a class if present
    fn remove_class(&mut self, class: &str);

    /// Checks for a class
    fn has_class(&self, class: &str) -> bool;
}

/// Applies themes to a class list target. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSelector;

impl ThemeSelector {
    /// Creates the selector and applies the theme for the control's
    /// initial value, so the page starts consistent with the control.
    pub fn attach<T: ClassList + ?Sized>(target: &mut T, initial_value: Option<&str>) -> Self {
        let selector = Self;
        selector.on_control_changed(target, initial_value);
        selector
    }

    /// Replaces any theme class on `target` with the one for `theme`,
    /// falling back to dark.
    pub fn apply_theme<T: ClassList + ?Sized>(&self, target: &mut T, theme: Option<Theme>) -> Theme {
        for known in Theme::ALL {
            target.remove_class(known.css_class());
        }
        let theme = theme.unwrap_or_default();
        target.add_class(theme.css_class());
        theme
    }

    /// Handles a change notification from the selector control
    pub fn on_control_changed<T: ClassList + ?Sized>(
        &self,
        target: &mut T,
        raw_value: Option<&str>,
    ) -> Theme {
        tracing::debug!(value = ?raw_value, "theme control changed");
        let theme = self.apply_theme(target, Theme::from_control_value(raw_value));
        tracing::debug!(theme = %theme, "theme applied");
        theme
    }
}
