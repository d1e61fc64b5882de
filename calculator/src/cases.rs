//! Data-driven summation cases
//!
//! A case is a pair of operands together with the sum the calculator is
//! expected to produce. Cases are usually kept as a JSON array next to the
//! tests that use them:
//!
//! ```json
//! [
//!   { "A": 1, "B": 2, "Expected": 3 },
//!   { "a": -4, "b": 4, "expected": 0 }
//! ]
//! ```
//!
//! Reading the file is left to the caller; [`load_cases`] takes the text.

use crate::calculator::Calculator;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single `(a, b, expected)` summation case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCase {
    #[serde(alias = "A")]
    pub a: i32,
    #[serde(alias = "B")]
    pub b: i32,
    #[serde(alias = "Expected")]
    pub expected: i64,
}

/// Result of checking an [`AddCase`] against a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub case: AddCase,
    pub actual: i64,
    pub passed: bool,
}

impl AddCase {
    pub fn new(a: i32, b: i32, expected: i64) -> Self {
        Self { a, b, expected }
    }

    /// Sum the operands and compare against the expected value.
    pub fn check(&self, calc: &Calculator) -> CaseOutcome {
        let actual = calc.sum(Some(&[self.a, self.b]));
        let passed = actual == self.expected;
        if passed {
            tracing::trace!(a = self.a, b = self.b, actual, "summation case passed");
        } else {
            tracing::warn!(
                a = self.a,
                b = self.b,
                expected = self.expected,
                actual,
                "summation case failed"
            );
        }
        CaseOutcome {
            case: *self,
            actual,
            passed,
        }
    }
}

/// Parse a JSON array of summation cases.
///
/// # Errors
///
/// Returns [`CalcError::InvalidCases`](crate::CalcError::InvalidCases) if the
/// text is not a JSON array of cases.
pub fn load_cases(json: &str) -> Result<Vec<AddCase>> {
    let cases: Vec<AddCase> = serde_json::from_str(json)?;
    tracing::debug!("Loaded {} summation cases", cases.len());
    Ok(cases)
}

/// Check every case, preserving order.
pub fn check_all(calc: &Calculator, cases: &[AddCase]) -> Vec<CaseOutcome> {
    cases.iter().map(|case| case.check(calc)).collect()
}
