//! Catalogue of the operations a [`Calculator`](crate::Calculator) provides.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the public calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Mod,
    Divide,
    TryDivide,
    Power,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 7] = [
        Operation::Sum,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Mod,
        Operation::Divide,
        Operation::TryDivide,
        Operation::Power,
    ];

    /// The kebab-case name used for display, parsing and serialization.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Mod => "mod",
            Operation::Divide => "divide",
            Operation::TryDivide => "try-divide",
            Operation::Power => "power",
        }
    }

    /// Number of operands, or `None` for the variadic summation.
    pub fn arity(self) -> Option<usize> {
        match self {
            Operation::Sum => None,
            _ => Some(2),
        }
    }

    /// Whether the operation reports [`CalcError::DivisionByZero`].
    pub fn can_signal(self) -> bool {
        matches!(self, Operation::Mod | Operation::Divide)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let op = match lowered.as_str() {
            "sum" | "add" => Operation::Sum,
            "subtract" | "sub" => Operation::Subtract,
            "multiply" | "mul" => Operation::Multiply,
            "mod" | "modulo" | "rem" => Operation::Mod,
            "divide" | "div" => Operation::Divide,
            "try-divide" | "try_divide" | "trydivide" => Operation::TryDivide,
            "power" | "pow" => Operation::Power,
            _ => return Err(CalcError::unknown_operation(s)),
        };
        Ok(op)
    }
}
