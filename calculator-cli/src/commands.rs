//! Command-line arguments and their execution

use crate::config::{CliConfig, OutputFormat};
use crate::output::{Number, Output, Report};
use anyhow::{Context, Result};
use calculator::{Calculator, Operation};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Stateless integer and floating-point calculator.
#[derive(Parser, Debug)]
#[command(name = "calc", author, version, about, long_about = None)]
pub struct Args {
    /// Output format (text or json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places for floating-point results in text output
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sum any number of integers (none sums to 0)
    Sum {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Subtract B from A
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Multiply A by B
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Remainder of A divided by B, with the sign of A
    Mod {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Divide A by B in floating point
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Divide A by B, printing a success flag instead of failing on zero
    TryDivide {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Raise VALUE to EXPONENT
    Power {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
    /// Verify a JSON file of summation cases
    Cases {
        /// JSON array of { "A", "B", "Expected" } objects
        file: PathBuf,
    },
    /// List the available operations
    Operations,
}

impl Args {
    /// Build the effective configuration: file values, then flag overrides.
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let base = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        Ok(base.merge_args(self.format, self.precision))
    }
}

impl Command {
    /// Run the command against `calc`.
    ///
    /// Division or modulus by zero surfaces as the calculator's own error.
    pub fn execute(&self, calc: &Calculator) -> Result<Output> {
        let report = match *self {
            Command::Sum { ref values } => Report {
                operation: Operation::Sum,
                inputs: values.iter().copied().map(Into::into).collect(),
                result: calc.sum(Some(values.as_slice())).into(),
                success: None,
            },
            Command::Subtract { a, b } => binary(Operation::Subtract, a, b, calc.subtract(a, b)),
            Command::Multiply { a, b } => binary(Operation::Multiply, a, b, calc.multiply(a, b)),
            Command::Mod { a, b } => binary(Operation::Mod, a, b, calc.modulo(a, b)?),
            Command::Divide { a, b } => binary(Operation::Divide, a, b, calc.divide(a, b)?),
            Command::TryDivide { a, b } => {
                let (success, result) = calc.try_divide(a, b);
                Report {
                    success: Some(success),
                    ..binary(Operation::TryDivide, a, b, result)
                }
            }
            Command::Power { value, exponent } => Report {
                operation: Operation::Power,
                inputs: vec![value.into(), exponent.into()],
                result: calc.power(value, exponent).into(),
                success: None,
            },
            Command::Cases { ref file } => return run_cases(calc, file),
            Command::Operations => {
                return Ok(Output::Operations(
                    Operation::ALL.into_iter().map(Into::into).collect(),
                ));
            }
        };
        tracing::debug!(operation = %report.operation, "evaluated");
        Ok(Output::Report(report))
    }
}

fn binary<R: Into<Number>>(operation: Operation, a: i32, b: i32, result: R) -> Report {
    Report {
        operation,
        inputs: vec![a.into(), b.into()],
        result: result.into(),
        success: None,
    }
}

fn run_cases(calc: &Calculator, file: &Path) -> Result<Output> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read cases file {}", file.display()))?;
    let cases = calculator::load_cases(&json)
        .with_context(|| format!("Invalid cases file {}", file.display()))?;
    tracing::info!("Checking {} summation cases from {}", cases.len(), file.display());
    Ok(Output::Cases(calculator::check_all(calc, &cases)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("calc").chain(args.iter().copied())).unwrap()
    }

    fn report(output: Output) -> Report {
        match output {
            Output::Report(report) => report,
            other => panic!("expected a report, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_operands() {
        let args = parse(&["mod", "-7", "4"]);
        assert_eq!(args.command, Command::Mod { a: -7, b: 4 });

        let args = parse(&["sum", "-1", "-2", "3"]);
        assert_eq!(
            args.command,
            Command::Sum {
                values: vec![-1, -2, 3]
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = parse(&["divide", "7", "2", "--format", "json", "-p", "2", "-vv"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.precision, Some(2));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_rejects_out_of_range_operand() {
        let result = Args::try_parse_from(["calc", "subtract", "2147483648", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_sum() {
        let calc = Calculator::new();
        let r = report(parse(&["sum"]).command.execute(&calc).unwrap());
        assert_eq!(r.result, Number::Int(0));

        let r = report(
            parse(&["sum", "2147483647", "2147483647"])
                .command
                .execute(&calc)
                .unwrap(),
        );
        assert_eq!(r.result, Number::Int(4_294_967_294));
        assert_eq!(r.inputs.len(), 2);
    }

    #[test]
    fn test_execute_binary_operations() {
        let calc = Calculator::new();
        let cases = [
            (Command::Subtract { a: 0, b: 5 }, Number::Int(-5)),
            (Command::Multiply { a: -3, b: 4 }, Number::Int(-12)),
            (Command::Mod { a: -7, b: 4 }, Number::Int(-3)),
            (Command::Divide { a: 7, b: 2 }, Number::Float(3.5)),
            (
                Command::Power {
                    value: 2.0,
                    exponent: 3.0,
                },
                Number::Float(8.0),
            ),
        ];
        for (command, expected) in cases {
            let r = report(command.execute(&calc).unwrap());
            assert_eq!(r.result, expected, "{command:?}");
            assert_eq!(r.success, None);
        }
    }

    #[test]
    fn test_execute_zero_divisor() {
        let calc = Calculator::new();

        let err = Command::Divide { a: 10, b: 0 }.execute(&calc).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero.");
        let err = Command::Mod { a: 5, b: 0 }.execute(&calc).unwrap_err();
        assert!(
            err.downcast_ref::<calculator::CalcError>()
                .is_some_and(|e| e.is_division_by_zero())
        );

        let r = report(Command::TryDivide { a: 7, b: 0 }.execute(&calc).unwrap());
        assert_eq!(r.success, Some(false));
        assert_eq!(r.result, Number::Float(0.0));
    }

    #[test]
    fn test_execute_cases_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "A": 1, "B": 2, "Expected": 3 }}, {{ "A": 1, "B": 2, "Expected": 4 }}]"#
        )
        .unwrap();

        let calc = Calculator::new();
        let output = Command::Cases {
            file: file.path().to_path_buf(),
        }
        .execute(&calc)
        .unwrap();
        assert_eq!(output.failures(), 1);
    }

    #[test]
    fn test_execute_cases_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Command::Cases {
            file: dir.path().join("nope.json"),
        }
        .execute(&Calculator::new())
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read cases file"));
    }

    #[test]
    fn test_resolve_config_merges_file_and_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\nprecision = 3").unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["operations", "--config", path]).resolve_config().unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, Some(3));

        let config = parse(&["operations", "--config", path, "-f", "text"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.precision, Some(3));
    }
}
