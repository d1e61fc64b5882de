//! Rendering of command results as text or JSON

use crate::config::{CliConfig, OutputFormat};
use anyhow::Result;
use calculator::{CaseOutcome, Operation};
use serde::{Serialize, Serializer};

/// An integer or floating-point operand or result
///
/// Non-finite floats serialize as the strings `"NaN"`, `"inf"` and `"-inf"`
/// since JSON has no literal for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Number::Int(n) => serializer.serialize_i64(n),
            Number::Float(x) if x.is_nan() => serializer.serialize_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                serializer.serialize_str(if x > 0.0 { "inf" } else { "-inf" })
            }
            Number::Float(x) => serializer.serialize_f64(x),
        }
    }
}

impl Number {
    fn render(self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Number::Int(n), _) => n.to_string(),
            (Number::Float(x), Some(p)) => format!("{x:.p$}"),
            (Number::Float(x), None) => x.to_string(),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

/// The result of a single arithmetic operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub inputs: Vec<Number>,
    pub result: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Catalogue entry printed by `calc operations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub name: Operation,
    pub arity: Option<usize>,
    pub can_signal: bool,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op,
            arity: op.arity(),
            can_signal: op.can_signal(),
        }
    }
}

/// Everything a command can produce
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Report(Report),
    Cases(Vec<CaseOutcome>),
    Operations(Vec<OperationInfo>),
}

impl Output {
    /// Number of failed summation cases, zero for other outputs
    pub fn failures(&self) -> usize {
        match self {
            Output::Cases(outcomes) => outcomes.iter().filter(|o| !o.passed).count(),
            _ => 0,
        }
    }

    pub fn render(&self, config: &CliConfig) -> Result<String> {
        match config.format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Text => Ok(self.render_text(config.precision)),
        }
    }

    fn render_json(&self) -> Result<String> {
        let json = match self {
            Output::Report(report) => serde_json::to_string_pretty(report)?,
            Output::Cases(outcomes) => serde_json::to_string_pretty(outcomes)?,
            Output::Operations(ops) => serde_json::to_string_pretty(ops)?,
        };
        Ok(json)
    }

    fn render_text(&self, precision: Option<usize>) -> String {
        match self {
            Output::Report(report) => {
                let result = report.result.render(precision);
                match report.success {
                    Some(success) => format!("{success} {result}"),
                    None => result,
                }
            }
            Output::Cases(outcomes) => {
                let failures = self.failures();
                outcomes
                    .iter()
                    .map(|o| {
                        let status = if o.passed { "ok" } else { "FAILED" };
                        format!(
                            "{} + {} = {} (expected {}) ... {status}",
                            o.case.a, o.case.b, o.actual, o.case.expected
                        )
                    })
                    .chain(std::iter::once(format!(
                        "{} passed; {} failed",
                        outcomes.len() - failures,
                        failures
                    )))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Output::Operations(ops) => ops
                .iter()
                .map(|info| {
                    let arity = info
                        .arity
                        .map_or_else(|| "variadic".to_string(), |n| n.to_string());
                    let signals = if info.can_signal {
                        "  (fails on zero divisor)"
                    } else {
                        ""
                    };
                    format!("{:<12} {arity}{signals}", info.name.name())
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
