//! # calculator
//!
//! A small, stateless arithmetic library over 32-bit integers and 64-bit
//! floats.
//!
//! ## Quick Start
//!
//! ```
//! use calculator::{CalcError, Calculator};
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.sum(Some(&[1, 2, 3, 4, 5])), 15);
//! assert_eq!(calc.modulo(-7, 4)?, -3);
//! assert_eq!(calc.divide(7, 2)?, 3.5);
//! assert_eq!(calc.try_divide(7, 0), (false, 0.0));
//! assert!(calc.divide(10, 0).unwrap_err().is_division_by_zero());
//! # Ok::<(), CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the [`Calculator`] type and its operations
//! - [`operation`]: named catalogue of the operations
//! - [`cases`]: JSON-backed summation cases for data-driven checks
//! - [`error`]: error types and result handling
//!
//! ## Overflow
//!
//! Summation widens to `i64` and cannot overflow for any realistic input.
//! Subtraction, multiplication and remainder wrap like native 32-bit
//! arithmetic in every build profile.
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`] with the crate's [`CalcError`].
//! The only arithmetic failure is a zero divisor in `modulo` or `divide`;
//! `try_divide` reports the same condition as a `(false, 0.0)` pair instead.

pub mod calculator;
pub mod cases;
pub mod error;
pub mod operation;

pub use calculator::Calculator;
pub use cases::{AddCase, CaseOutcome, check_all, load_cases};
pub use error::{CalcError, Result};
pub use operation::Operation;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let calc = Calculator::default();
        assert_eq!(calc, Calculator::new());
        assert_eq!(Operation::ALL.len(), 7);
        assert!(AddCase::new(2, 3, 5).check(&calc).passed);
    }
}
