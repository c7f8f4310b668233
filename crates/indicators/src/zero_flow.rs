//! Zero-flow periods.
//!
//! A zero-flow period is a run of at least two consecutive days with flow
//! exactly 0; a missing day ends a run. Onset and zero-day count apply to
//! any zero day, isolated or not.
//!
//! Note the two indexing conventions: `onset` is the calendar day-of-year
//! (1-based), while `central_point` is the median 0-based position within
//! the year's partition.

use iha_series::{FlowSeries, YearPartition};
use serde::Serialize;

use crate::annual::{AnnualResult, per_year};

/// Minimum run length for a zero-flow period.
const MIN_PERIOD_DAYS: usize = 2;

/// All zero-flow statistics of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZeroFlowStats {
    /// Number of zero-flow periods.
    pub periods: usize,
    /// Mean period length in days; `NaN` with no period.
    pub mean_period_length: f64,
    /// Day-of-year (1-based) of the first zero day.
    pub onset: Option<u16>,
    /// Median 0-based position of the zero days; `NaN` with none.
    pub central_point: f64,
    /// Number of zero days.
    pub zero_days: usize,
}

/// Lengths of the zero-flow periods (runs of at least two zero days).
pub fn zero_flow_runs(flows: &[f64]) -> Vec<usize> {
    let (mut runs, open) = flows
        .iter()
        .fold((Vec::new(), 0usize), |(mut runs, len), &v| {
            if v == 0.0 {
                (runs, len + 1)
            } else {
                if len >= MIN_PERIOD_DAYS {
                    runs.push(len);
                }
                (runs, 0)
            }
        });
    if open >= MIN_PERIOD_DAYS {
        runs.push(open);
    }
    runs
}

fn year_stats(part: &YearPartition<'_>) -> ZeroFlowStats {
    let runs = zero_flow_runs(part.flows());
    let mean_period_length = if runs.is_empty() {
        f64::NAN
    } else {
        runs.iter().sum::<usize>() as f64 / runs.len() as f64
    };

    let positions: Vec<usize> = part
        .flows()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == 0.0)
        .map(|(i, _)| i)
        .collect();

    let onset = positions
        .first()
        .and_then(|&i| part.doy(i))
        .map(|d| d.get());

    // positions are already ascending
    let sorted: Vec<f64> = positions.iter().map(|&i| i as f64).collect();

    ZeroFlowStats {
        periods: runs.len(),
        mean_period_length,
        onset,
        central_point: iha_stats::median(&sorted),
        zero_days: positions.len(),
    }
}

/// Every zero-flow statistic per year.
pub fn zero_flow_stats(series: &FlowSeries) -> AnnualResult<ZeroFlowStats> {
    per_year(series, year_stats)
}

/// Number of zero-flow periods per year.
pub fn freq_zero_flow_periods(series: &FlowSeries) -> AnnualResult<usize> {
    zero_flow_stats(series).map(|s| s.periods)
}

/// Mean zero-flow period length per year; `NaN` with no period.
pub fn mean_zero_flow_periods(series: &FlowSeries) -> AnnualResult<f64> {
    zero_flow_stats(series).map(|s| s.mean_period_length)
}

/// Day-of-year of the first zero-flow day per year.
pub fn zero_flow_onset(series: &FlowSeries) -> AnnualResult<Option<u16>> {
    zero_flow_stats(series).map(|s| s.onset)
}

/// Median 0-based position of zero-flow days per year.
pub fn zero_flow_central_point(series: &FlowSeries) -> AnnualResult<f64> {
    zero_flow_stats(series).map(|s| s.central_point)
}

/// Number of zero-flow days per year.
pub fn zero_flow_days(series: &FlowSeries) -> AnnualResult<usize> {
    zero_flow_stats(series).map(|s| s.zero_days)
}
