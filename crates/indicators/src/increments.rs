//! Rise and fall rates: statistics of day-to-day flow changes.

use iha_series::{FlowSeries, YearPartition};
use serde::Serialize;

use crate::annual::{AnnualResult, per_year};

/// Rise and fall statistics of one year. Every field is `NaN` when its
/// underlying set of differences is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncrementStats {
    /// Mean of the strictly positive differences.
    pub mean_rise: f64,
    /// Median of the strictly positive differences.
    pub median_rise: f64,
    /// Mean of the strictly negative differences (a negative number).
    pub mean_fall: f64,
    /// Median of the strictly negative differences (a negative number).
    pub median_fall: f64,
}

fn year_increments(part: &YearPartition<'_>) -> IncrementStats {
    let (mut rises, mut falls): (Vec<f64>, Vec<f64>) = part
        .valid_pairs()
        .map(|(a, b)| b - a)
        .filter(|d| *d != 0.0)
        .partition(|d| *d > 0.0);

    rises.sort_by(f64::total_cmp);
    falls.sort_by(f64::total_cmp);

    IncrementStats {
        mean_rise: iha_stats::mean(&rises),
        median_rise: iha_stats::median(&rises),
        mean_fall: iha_stats::mean(&falls),
        median_fall: iha_stats::median(&falls),
    }
}

/// All rise/fall statistics per year.
pub fn increment_stats(series: &FlowSeries) -> AnnualResult<IncrementStats> {
    per_year(series, year_increments)
}

/// Mean positive day-to-day change per year.
pub fn mean_of_pos_inc_cons_flows(series: &FlowSeries) -> AnnualResult<f64> {
    increment_stats(series).map(|s| s.mean_rise)
}

/// Mean negative day-to-day change per year.
pub fn mean_of_neg_inc_cons_flows(series: &FlowSeries) -> AnnualResult<f64> {
    increment_stats(series).map(|s| s.mean_fall)
}

/// Median positive day-to-day change per year.
pub fn median_of_pos_inc_cons_flows(series: &FlowSeries) -> AnnualResult<f64> {
    increment_stats(series).map(|s| s.median_rise)
}

/// Median negative day-to-day change per year.
pub fn median_of_neg_inc_cons_flows(series: &FlowSeries) -> AnnualResult<f64> {
    increment_stats(series).map(|s| s.median_fall)
}
