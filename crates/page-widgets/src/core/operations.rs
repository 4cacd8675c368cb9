//! Arithmetic operators supported by the keypad

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult};

/// Binary operator that can be pending on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Divide, Self::Multiply];

    /// Returns the operator symbol carried by keypad markup
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator tag value.
    ///
    /// Only the exact symbols `+`, `-`, `/` and `*` are accepted.
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(CalcError::UnsupportedOperator {
                symbol: other.to_string(),
            }),
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero produces an infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Parsing =====

    #[test]
    fn test_from_symbol_accepts_all_four() {
        assert_eq!(Operator::from_symbol("+").unwrap(), Operator::Add);
        assert_eq!(Operator::from_symbol("-").unwrap(), Operator::Subtract);
        assert_eq!(Operator::from_symbol("*").unwrap(), Operator::Multiply);
        assert_eq!(Operator::from_symbol("/").unwrap(), Operator::Divide);
    }

    #[test]
    fn test_from_symbol_rejects_others() {
        for symbol in ["%", "^", "x", "", " +", "++"] {
            let err = Operator::from_symbol(symbol).unwrap_err();
            assert_eq!(
                err,
                CalcError::UnsupportedOperator {
                    symbol: symbol.to_string()
                }
            );
        }
    }

    #[test]
    fn test_from_str_matches_from_symbol() {
        let op: Operator = "*".parse().unwrap();
        assert_eq!(op, Operator::Multiply);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_symbol_round_trips() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()).unwrap(), op);
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    // ===== Arithmetic =====

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }
}
