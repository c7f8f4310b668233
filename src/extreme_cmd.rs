//! Extreme command: one annual k-day rolling-mean extreme.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use iha_indicators::{Extreme, annual_k_day_extreme};
use iha_io::read_series;

use crate::cli::ExtremeArgs;
use crate::config::IhaToml;
use crate::convert;
use crate::output;

/// Run the k-day extreme computation and print `year,value` rows.
pub fn run(args: ExtremeArgs) -> Result<()> {
    let _cmd = info_span!("extreme", k = args.k, direction = %args.direction).entered();

    let direction: Extreme = args.direction.parse()?;
    let config = IhaToml::load(args.config.as_deref())?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;

    let series = read_series(&input, &reader_cfg)
        .with_context(|| format!("failed to read discharge series: {}", input.display()))?;
    let result = annual_k_day_extreme(&series, args.k, direction)?;
    info!(n_years = result.len(), "k-day extreme computed");

    let mut writer = output::open(args.output.as_deref())?;
    writeln!(writer, "year,{}_day_{}", args.k, direction)?;
    for (year, value) in &result {
        if value.is_nan() {
            writeln!(writer, "{year},")?;
        } else {
            writeln!(writer, "{year},{value}")?;
        }
    }
    writer.flush().context("failed to write output")?;
    Ok(())
}
