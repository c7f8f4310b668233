//! k-day rolling-mean extremes and the baseflow index.

use std::fmt;
use std::str::FromStr;

use iha_series::FlowSeries;

use crate::annual::{AnnualResult, per_year};
use crate::error::IndicatorError;

/// Which end of the distribution an extreme statistic selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    /// Smallest value.
    Minimum,
    /// Largest value.
    Maximum,
}

impl Extreme {
    /// Extreme of the non-missing values; `NaN` if there are none.
    fn select(self, values: impl Iterator<Item = f64>) -> f64 {
        // f64::min/max ignore a NaN operand, so the NaN seed only survives
        // when every value is missing.
        match self {
            Extreme::Minimum => values.fold(f64::NAN, f64::min),
            Extreme::Maximum => values.fold(f64::NAN, f64::max),
        }
    }
}

impl FromStr for Extreme {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(Extreme::Minimum),
            "max" | "maximum" => Ok(Extreme::Maximum),
            other => Err(IndicatorError::invalid(
                "direction",
                format!("expected \"min\" or \"max\", got {other:?}"),
            )),
        }
    }
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extreme::Minimum => f.write_str("min"),
            Extreme::Maximum => f.write_str("max"),
        }
    }
}

/// Trailing k-day means of one year's flows.
///
/// Only complete windows inside the slice are produced, so the first `k - 1`
/// days of a year never carry a value; a window touching a missing day
/// yields `NaN`.
fn rolling_means(flows: &[f64], k: usize) -> impl Iterator<Item = f64> + '_ {
    flows.windows(k).map(move |w| {
        if w.iter().any(|v| v.is_nan()) {
            f64::NAN
        } else {
            w.iter().sum::<f64>() / k as f64
        }
    })
}

fn k_day_extreme(flows: &[f64], k: usize, extreme: Extreme) -> f64 {
    extreme.select(rolling_means(flows, k))
}

/// Annual extreme of the trailing k-day mean flow.
///
/// The rolling window restarts at every year boundary. A year with fewer
/// than `k` days, or with no window free of missing values, yields `NaN`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `k` is 0.
pub fn annual_k_day_extreme(
    series: &FlowSeries,
    k: usize,
    extreme: Extreme,
) -> Result<AnnualResult<f64>, IndicatorError> {
    if k == 0 {
        return Err(IndicatorError::invalid(
            "k",
            "window length must be at least 1 day",
        ));
    }
    Ok(per_year(series, |p| k_day_extreme(p.flows(), k, extreme)))
}

fn fixed_window(series: &FlowSeries, k: usize, extreme: Extreme) -> AnnualResult<f64> {
    per_year(series, |p| k_day_extreme(p.flows(), k, extreme))
}

/// Annual minimum daily flow.
pub fn annual_1_day_minima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 1, Extreme::Minimum)
}

/// Annual minimum of the 7-day mean flow.
pub fn annual_7_day_minima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 7, Extreme::Minimum)
}

/// Annual minimum of the 90-day mean flow.
pub fn annual_90_day_minima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 90, Extreme::Minimum)
}

/// Annual maximum daily flow.
pub fn annual_1_day_maxima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 1, Extreme::Maximum)
}

/// Annual maximum of the 7-day mean flow.
pub fn annual_7_day_maxima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 7, Extreme::Maximum)
}

/// Annual maximum of the 90-day mean flow.
pub fn annual_90_day_maxima(series: &FlowSeries) -> AnnualResult<f64> {
    fixed_window(series, 90, Extreme::Maximum)
}

/// Baseflow index: annual 7-day minimum flow divided by annual mean flow.
///
/// The mean ignores missing days. `NaN` when the mean is zero or undefined.
pub fn baseflow_index(series: &FlowSeries) -> AnnualResult<f64> {
    per_year(series, |p| {
        let mean = iha_stats::nan_mean(p.flows());
        if mean.is_nan() || mean == 0.0 {
            return f64::NAN;
        }
        k_day_extreme(p.flows(), 7, Extreme::Minimum) / mean
    })
}
