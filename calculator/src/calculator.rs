//! The stateless arithmetic calculator

use crate::error::{CalcError, Result};
use crate::operation::Operation;

/// Stateless collection of pure arithmetic operations.
///
/// `Calculator` carries no data, so it is `Copy` and may be shared freely
/// between threads. Integer operations use 32-bit two's-complement
/// wraparound; only [`modulo`](Self::modulo) and [`divide`](Self::divide)
/// can fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Sum a list of values, widening each to `i64` before accumulating.
    ///
    /// An absent list and an empty list both sum to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.sum(Some(&[i32::MAX, i32::MAX])), 4_294_967_294);
    /// assert_eq!(calc.sum(None), 0);
    /// ```
    pub fn sum(&self, values: Option<&[i32]>) -> i64 {
        values.map_or(0, |values| values.iter().copied().map(i64::from).sum())
    }

    /// `a - b`, wrapping on overflow.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    /// `a * b`, wrapping on overflow.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// Truncating remainder of `a / b`; the result takes the sign of `a`.
    ///
    /// `i32::MIN % -1` wraps to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero.
    pub fn modulo(&self, a: i32, b: i32) -> Result<i32> {
        if b == 0 {
            tracing::debug!(a, "modulus by zero");
            return Err(CalcError::division_by_zero(Operation::Mod));
        }
        Ok(a.wrapping_rem(b))
    }

    /// `a / b` computed in floating point.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero.
    pub fn divide(&self, a: i32, b: i32) -> Result<f64> {
        if b == 0 {
            tracing::debug!(a, "division by zero");
            return Err(CalcError::division_by_zero(Operation::Divide));
        }
        Ok(f64::from(a) / f64::from(b))
    }

    /// Non-signaling form of [`divide`](Self::divide).
    ///
    /// Returns `(false, 0.0)` when `b` is zero and `(true, a / b)` otherwise.
    pub fn try_divide(&self, a: i32, b: i32) -> (bool, f64) {
        match self.divide(a, b) {
            Ok(result) => (true, result),
            Err(_) => (false, 0.0),
        }
    }

    /// `value` raised to `exponent`, with the platform's NaN and infinity rules.
    pub fn power(&self, value: f64, exponent: f64) -> f64 {
        value.powf(exponent)
    }
}
