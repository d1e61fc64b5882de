//! calculator-cli: command-line front end for the `calculator` crate
//!
//! The `calc` binary parses [`commands::Args`], resolves a
//! [`config::CliConfig`], runs the requested operation and prints the
//! result as text or JSON.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::{Args, Command};
pub use config::{CliConfig, OutputFormat};
pub use output::{Number, Output, Report};

use anyhow::{Result, bail};
use calculator::Calculator;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Log filter for a `-v` count, used when neither `RUST_LOG` nor the
/// config file names one.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Log filter used when `RUST_LOG` is not set.
///
/// A `-v` flag wins over the config file's `log_level`; with neither the
/// level is `warn`.
pub fn log_filter(verbose: u8, config: &CliConfig) -> &str {
    match (&config.log_level, verbose) {
        (Some(level), 0) => level.as_str(),
        _ => default_log_level(verbose),
    }
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins over [`log_filter`].
pub fn init_tracing(verbose: u8, config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the parsed command and write the rendered output to `out`.
///
/// The output is written before failed summation cases are reported, so a
/// failing `cases` run still shows every outcome.
pub fn run<W: Write>(args: &Args, config: &CliConfig, out: &mut W) -> Result<()> {
    let output = args.command.execute(&Calculator::new())?;
    writeln!(out, "{}", output.render(config)?)?;
    ensure_passed(&output)
}

/// Fail when the output holds failed summation cases.
pub fn ensure_passed(output: &Output) -> Result<()> {
    let failures = output.failures();
    if failures > 0 {
        bail!("{failures} summation case(s) failed");
    }
    Ok(())
}
