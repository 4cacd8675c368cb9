//! Calculator core, independent of any event delivery mechanism

pub mod engine;
pub mod number;
mod operations;

pub use engine::{CalculatorEngine, CalculatorState, ControlAction, Transition};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator transitions
pub type CalcResult<T> = Result<T, CalcError>;

/// Malformed keypad markup. A failing transition leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A digit-tagged element carries a non-numeric tag value
    #[error("Operand value must be a number, got '{value}'")]
    InvalidInput {
        /// The offending tag value
        value: String,
    },

    /// An operator-tagged element carries a symbol outside `+ - / *`
    #[error("Calculator supports only +, -, / and * operators, got '{symbol}'")]
    UnsupportedOperator {
        /// The offending symbol
        symbol: String,
    },
}
