//! Errors surfaced by the page wiring layer.

use thiserror::Error;

use crate::core::CalcError;

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur while wiring or driving the page
#[derive(Debug, Error)]
pub enum PageError {
    /// A calculator transition rejected its input
    #[error(transparent)]
    Calculator(#[from] CalcError),

    /// An input event arrived before the page finished loading
    #[error("Page has not finished loading")]
    NotLoaded,

    /// Event targeted an element that does not exist
    #[error("Element '{id}' not found")]
    ElementNotFound {
        /// Element id
        id: String,
    },

    /// A widget mount point is missing from the page
    #[error("Missing mount point: {selector}")]
    MissingMount {
        /// CSS selector that matched nothing
        selector: String,
    },

    /// Configuration could not be parsed
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
