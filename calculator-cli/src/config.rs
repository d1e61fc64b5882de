//! Configuration for the `calc` command

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

/// Settings for the `calc` command, read from an optional TOML file.
///
/// ```toml
/// format = "json"
/// precision = 5
/// log_level = "info"
/// ```
///
/// Command-line flags take precedence over values from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for floating-point results in text output
    pub precision: Option<usize>,
    /// Log filter used when `RUST_LOG` is not set (e.g. "info")
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse calculator configuration")
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Set the output format (builder style)
    pub fn with_format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    /// Set the float precision (builder style)
    pub fn with_precision(self, precision: Option<usize>) -> Self {
        Self { precision, ..self }
    }

    /// Set the default log filter (builder style)
    pub fn with_log_level<S: Into<String>>(self, log_level: S) -> Self {
        Self {
            log_level: Some(log_level.into()),
            ..self
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn merge_args(self, format: Option<OutputFormat>, precision: Option<usize>) -> Self {
        Self {
            format: format.unwrap_or(self.format),
            precision: precision.or(self.precision),
            ..self
        }
    }
}
