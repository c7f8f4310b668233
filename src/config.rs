use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level IHA configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IhaToml {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Pulse threshold settings.
    #[serde(default)]
    pub pulse: PulseToml,
}

impl IhaToml {
    /// Loads the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_date_col")]
    pub date_col: String,
    #[serde(default = "default_flow_col")]
    pub flow_col: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            delimiter: default_delimiter(),
            date_col: default_date_col(),
            flow_col: default_flow_col(),
            format: default_format(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}
fn default_date_col() -> String {
    "Date".to_string()
}
fn default_flow_col() -> String {
    "Flow".to_string()
}
fn default_format() -> String {
    "csv".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PulseToml {
    #[serde(default = "default_pulse_source")]
    pub source: String,
    #[serde(default = "default_high_percentile")]
    pub high_percentile: f64,
    #[serde(default = "default_low_percentile")]
    pub low_percentile: f64,
}

impl Default for PulseToml {
    fn default() -> Self {
        Self {
            source: default_pulse_source(),
            high_percentile: default_high_percentile(),
            low_percentile: default_low_percentile(),
        }
    }
}

fn default_pulse_source() -> String {
    "whole-series".to_string()
}
fn default_high_percentile() -> f64 {
    90.0
}
fn default_low_percentile() -> f64 {
    10.0
}
