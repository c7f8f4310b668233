//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::PathBuf;

use anyhow::{Result, bail};

use iha_indicators::{IhaConfig, ThresholdSource};
use iha_io::ReaderConfig;

use crate::config::{IoToml, PulseToml};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a single-byte field delimiter; `tab` and `\t` mean a tab.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
        },
    }
}

/// Picks the CLI path when given, else the config path.
pub fn resolve_input(cli: Option<PathBuf>, io: &IoToml) -> Result<PathBuf> {
    match cli.or_else(|| io.input.clone()) {
        Some(path) => Ok(path),
        None => bail!("no input path: set [io].input in config or use --input"),
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    Ok(ReaderConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_date_col(&io.date_col)
        .with_flow_col(&io.flow_col))
}

/// Builds an [`IhaConfig`] from the TOML pulse configuration.
///
/// `source_override` (from `--pulse-source`) takes precedence over the file.
pub fn build_iha_config(pulse: &PulseToml, source_override: Option<&str>) -> Result<IhaConfig> {
    let source: ThresholdSource = source_override.unwrap_or(pulse.source.as_str()).parse()?;
    let cfg = IhaConfig::default()
        .with_pulse_source(source)
        .with_high_percentile(pulse.high_percentile)
        .with_low_percentile(pulse.low_percentile);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_names() {
        assert_eq!(parse_format("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn parse_delimiter_variants() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn cli_input_overrides_config() {
        let io = IoToml {
            input: Some(PathBuf::from("from_config.csv")),
            ..IoToml::default()
        };
        let path = resolve_input(Some(PathBuf::from("from_cli.csv")), &io).unwrap();
        assert_eq!(path, PathBuf::from("from_cli.csv"));
        assert_eq!(
            resolve_input(None, &io).unwrap(),
            PathBuf::from("from_config.csv")
        );
        assert!(resolve_input(None, &IoToml::default()).is_err());
    }

    #[test]
    fn pulse_source_override() {
        let pulse = PulseToml::default();
        let cfg = build_iha_config(&pulse, Some("per-year")).unwrap();
        assert_eq!(cfg.pulse().source(), ThresholdSource::PerYear);

        let cfg = build_iha_config(&pulse, None).unwrap();
        assert_eq!(cfg.pulse().source(), ThresholdSource::WholeSeries);

        assert!(build_iha_config(&pulse, Some("monthly")).is_err());
    }

    #[test]
    fn invalid_percentiles_rejected() {
        let pulse = PulseToml {
            high_percentile: 10.0,
            low_percentile: 90.0,
            ..PulseToml::default()
        };
        assert!(build_iha_config(&pulse, None).is_err());
    }
}
