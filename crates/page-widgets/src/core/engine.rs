//! Calculator state machine
//!
//! One pending operator, a left operand captured when the operator is chosen,
//! and a right operand that is either being typed or holds the last result.
//! The right operand is always what the display shows.
//!
//! Operand text follows JavaScript number semantics (see [`crate::core::number`]),
//! which gives the keypad two observable quirks that are kept on purpose:
//!
//! - a zero right operand is falsy, so typing `0` then `5` shows `5`;
//! - choosing an operator while the right operand is zero records the
//!   operator without shifting operands or rendering.

use crate::core::number::{is_truthy, parse_js_number, to_js_string};
use crate::core::{CalcError, CalcResult, Operator};

/// Arithmetic state owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculatorState {
    /// Pending operator, if any
    pub operator: Option<Operator>,
    /// Operand captured when the operator was chosen
    pub left_operand: f64,
    /// Operand being entered, or the most recent result
    pub right_operand: f64,
}

/// Whether a transition ran the render step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State was projected to the display
    Rendered,
    /// Nothing was rendered
    Unchanged,
}

impl Transition {
    /// Returns true if the display text was refreshed
    #[must_use]
    pub const fn rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// Control keys on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Clear operator and both operands
    Reset,
    /// Drop the last character of the right operand
    Delete,
    /// Apply the pending operator
    Calculate,
}

impl ControlAction {
    /// Parses a control tag value. Unknown tags are `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "reset" => Some(Self::Reset),
            "delete" => Some(Self::Delete),
            "calculate" => Some(Self::Calculate),
            _ => None,
        }
    }

    /// Returns the tag value used in markup
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Delete => "delete",
            Self::Calculate => "calculate",
        }
    }
}

/// Four-function calculator engine
#[derive(Debug)]
pub struct CalculatorEngine {
    state: CalculatorState,
    /// Text projected from the right operand on the last render
    display: String,
    render_count: usize,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine at the default state and renders it once
    #[must_use]
    pub fn new() -> Self {
        let mut engine = Self {
            state: CalculatorState::default(),
            display: String::new(),
            render_count: 0,
        };
        engine.render();
        engine
    }

    /// Current arithmetic state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display text as of the last render
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Number of times the render step has run, construction included
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Handles a digit key carrying `tag`.
    ///
    /// The tag must be numeric under `Number()` coercion. A truthy right
    /// operand gets the tag appended to its text form; otherwise the tag
    /// replaces it.
    pub fn digit(&mut self, tag: &str) -> CalcResult<Transition> {
        let value = parse_js_number(tag);
        if value.is_nan() {
            return Err(CalcError::InvalidInput {
                value: tag.to_string(),
            });
        }

        self.state.right_operand = if is_truthy(self.state.right_operand) {
            parse_js_number(&format!("{}{tag}", to_js_string(self.state.right_operand)))
        } else {
            value
        };

        Ok(self.render())
    }

    /// Handles an operator key carrying `symbol`.
    pub fn operator(&mut self, symbol: &str) -> CalcResult<Transition> {
        let op = Operator::from_symbol(symbol)?;
        self.state.operator = Some(op);

        if !is_truthy(self.state.right_operand) {
            return Ok(Transition::Unchanged);
        }

        self.state.left_operand = self.state.right_operand;
        self.state.right_operand = 0.0;
        Ok(self.render())
    }

    /// Handles a control key carrying `tag`. Unknown tags do nothing.
    pub fn control(&mut self, tag: &str) -> Transition {
        match ControlAction::from_tag(tag) {
            Some(ControlAction::Reset) => self.reset(),
            Some(ControlAction::Delete) => self.delete(),
            Some(ControlAction::Calculate) => self.calculate(),
            None => Transition::Unchanged,
        }
    }

    /// Clears the operator and both operands
    pub fn reset(&mut self) -> Transition {
        self.state = CalculatorState::default();
        self.render()
    }

    /// Drops the last character of the right operand's text form
    pub fn delete(&mut self) -> Transition {
        let mut text = to_js_string(self.state.right_operand);
        text.pop();
        let value = parse_js_number(&text);
        self.state.right_operand = if is_truthy(value) { value } else { 0.0 };
        self.render()
    }

    /// Applies the pending operator to the operands.
    ///
    /// The operator and left operand stay as they are, so calling this again
    /// repeats the operation against the new right operand.
    pub fn calculate(&mut self) -> Transition {
        let Some(op) = self.state.operator else {
            return Transition::Unchanged;
        };

        self.state.right_operand = op.apply(self.state.left_operand, self.state.right_operand);
        self.render()
    }

    fn render(&mut self) -> Transition {
        tracing::debug!(
            operator = ?self.state.operator,
            left_operand = self.state.left_operand,
            right_operand = self.state.right_operand,
            "render"
        );
        self.display = to_js_string(self.state.right_operand);
        self.render_count += 1;
        Transition::Rendered
    }
}
