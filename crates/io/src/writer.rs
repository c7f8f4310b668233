//! CSV and JSON writers for indicator reports and calendar summaries.

use std::io::Write;

use iha_calendar::MONTH_LABELS;
use iha_indicators::{CalendarSummary, INDICATOR_COLUMNS, IhaReport};
use tracing::debug;

use crate::error::IoError;

/// Formats one cell; `NaN` becomes an empty cell.
fn cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write the indicator table as CSV: header `year,<indicator columns>`, one
/// row per year.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if writing fails.
pub fn write_report_csv<W: Write>(writer: W, report: &IhaReport) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(std::iter::once("year").chain(INDICATOR_COLUMNS))?;
    for row in &report.years {
        let record = std::iter::once(row.year.to_string())
            .chain(row.values().into_iter().map(cell));
        wtr.write_record(record)?;
    }
    wtr.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;

    debug!(rows = report.years.len(), "report csv written");
    Ok(())
}

/// Write the calendar summary as CSV: header
/// `year,jan,...,dec,median,p10,p90`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if writing fails.
pub fn write_calendar_summary_csv<W: Write>(
    writer: W,
    summary: &CalendarSummary,
) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let header = std::iter::once("year")
        .chain(MONTH_LABELS)
        .chain(["median", "p10", "p90"]);
    wtr.write_record(header)?;

    for row in summary.rows() {
        let record = std::iter::once(row.year.to_string())
            .chain(row.monthly_medians.iter().copied().map(cell))
            .chain([row.median, row.p10, row.p90].map(cell));
        wtr.write_record(record)?;
    }
    wtr.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;

    debug!(rows = summary.rows().len(), "calendar summary csv written");
    Ok(())
}

/// Write the full report, configuration included, as pretty-printed JSON.
/// `NaN` values become `null`.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization or writing fails.
pub fn write_report_json<W: Write>(mut writer: W, report: &IhaReport) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer).map_err(|e| IoError::Json {
        reason: e.to_string(),
    })?;
    Ok(())
}
