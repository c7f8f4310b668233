//! Compute command: every annual indicator for one discharge series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use iha_indicators::IhaReport;
use iha_io::{read_series, write_report_csv, write_report_json};

use crate::cli::ComputeArgs;
use crate::config::IhaToml;
use crate::convert::{self, OutputFormat};
use crate::output;

/// Run the indicator pipeline.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();

    // 1. Load config and merge CLI overrides
    let config = IhaToml::load(args.config.as_deref())?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let iha_cfg = convert::build_iha_config(&config.pulse, args.pulse_source.as_deref())?;
    let format_name = args.format.as_deref().unwrap_or(config.io.format.as_str());
    let format = convert::parse_format(format_name)?;

    // 2. Read series
    let series = read_series(&input, &reader_cfg)
        .with_context(|| format!("failed to read discharge series: {}", input.display()))?;

    // 3. Compute
    let report = IhaReport::compute(&series, &iha_cfg).context("indicator computation failed")?;
    info!(
        n_years = report.years.len(),
        pulse_source = %iha_cfg.pulse().source(),
        "indicators computed"
    );

    // 4. Write
    let output_path = args.output.or(config.io.output);
    let writer = output::open(output_path.as_deref())?;
    let written = match format {
        OutputFormat::Csv => write_report_csv(writer, &report),
        OutputFormat::Json => write_report_json(writer, &report),
    };
    written.context("failed to write report")?;

    if let Some(p) = &output_path {
        info!(path = %p.display(), "report written");
    }
    Ok(())
}
