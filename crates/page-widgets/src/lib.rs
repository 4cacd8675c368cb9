//! Page Widgets - theme switcher and keypad calculator
//!
//! Two independent widgets for a single page, both constructed once the
//! page has loaded:
//!
//! - a theme switcher that maps a select control's value to one
//!   `theme-*` class on the document body;
//! - a four-function calculator whose keypad buttons carry `data-number`,
//!   `data-operator` and `data-control` tags.
//!
//! The calculator core is plain state transitions with no knowledge of
//! how events arrive. The [`wasm`] module holds the adapters: a mock DOM
//! driver for native tests and, behind the `wasm` feature, the web-sys
//! binding.
//!
//! # Example
//!
//! ```rust
//! use page_widgets::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.digit("1").unwrap();
//! calc.digit("2").unwrap();
//! calc.operator("/").unwrap();
//! calc.digit("4").unwrap();
//! calc.calculate();
//! assert_eq!(calc.display(), "3");
//!
//! // Typing after a zero replaces it rather than appending
//! calc.reset();
//! calc.digit("0").unwrap();
//! calc.digit("5").unwrap();
//! assert_eq!(calc.display(), "5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod error;
pub mod theme;

/// Host adapters - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::core::number::{is_truthy, parse_js_number, to_js_string};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, CalculatorState, ControlAction, Operator,
        Transition,
    };
    pub use crate::error::{PageError, PageResult};
    pub use crate::theme::{ClassList, Theme, ThemeSelector};
    pub use crate::wasm::{DomElement, DomEvent, MockDom, PageDriver};
}
