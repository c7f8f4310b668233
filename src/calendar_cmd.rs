//! Calendar command: month x year median table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use iha_indicators::calendar_summary;
use iha_io::{read_series, write_calendar_summary_csv};

use crate::cli::CalendarArgs;
use crate::config::IhaToml;
use crate::convert;
use crate::output;

/// Run the calendar summary.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();

    let config = IhaToml::load(args.config.as_deref())?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;

    let series = read_series(&input, &reader_cfg)
        .with_context(|| format!("failed to read discharge series: {}", input.display()))?;

    let summary = calendar_summary(&series);
    info!(n_years = summary.rows().len(), "calendar summary built");

    let writer = output::open(args.output.as_deref())?;
    write_calendar_summary_csv(writer, &summary).context("failed to write calendar summary")?;
    Ok(())
}
