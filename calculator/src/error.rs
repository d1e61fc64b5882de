//! Error types for calculator operations

use crate::operation::Operation;

/// Result type for calculator operations.
///
/// A convenience alias using [`CalcError`] as the error type.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Error type for all calculator operations.
///
/// Only `modulo` and `divide` can fail on arithmetic grounds, and only when
/// the divisor is zero. The remaining variants come from the operation
/// catalogue and from loading summation cases.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// A modulus or division was attempted with a zero divisor
    #[error("{}", division_by_zero_message(.operation))]
    DivisionByZero { operation: Operation },

    /// An operation name did not match any known operation
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Summation cases could not be parsed
    #[error("Invalid summation cases: {source}")]
    InvalidCases {
        #[from]
        source: serde_json::Error,
    },
}

fn division_by_zero_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Mod => "Modulus by zero.",
        _ => "Division by zero.",
    }
}

impl CalcError {
    /// Create a division-by-zero error for the given operation.
    pub fn division_by_zero(operation: Operation) -> Self {
        Self::DivisionByZero { operation }
    }

    /// Create an unknown-operation error.
    ///
    /// # Arguments
    /// * `name` - The operation name as the caller supplied it
    pub fn unknown_operation<S: Into<String>>(name: S) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Whether this error is a [`CalcError::DivisionByZero`].
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}
