//! Per-year and whole-series percentiles of flow.
//!
//! Both use linear interpolation between order statistics
//! (`h = (n - 1) * p / 100`), the definition shared by R type 7 and NumPy's
//! default. Missing values are ignored.

use iha_series::FlowSeries;

use crate::annual::{AnnualResult, per_year};
use crate::error::IndicatorError;

/// Converts a percentile in `[0, 100]` to a probability.
pub(crate) fn check_percentile(name: &str, p: f64) -> Result<f64, IndicatorError> {
    if !p.is_finite() || !(0.0..=100.0).contains(&p) {
        return Err(IndicatorError::invalid(
            name,
            format!("percentile must be within [0, 100], got {p}"),
        ));
    }
    Ok(p / 100.0)
}

pub(crate) fn percentile_by_year(series: &FlowSeries, prob: f64) -> AnnualResult<f64> {
    per_year(series, |part| iha_stats::nan_quantile(part.flows(), prob))
}

pub(crate) fn percentile_of_series(series: &FlowSeries, prob: f64) -> f64 {
    iha_stats::nan_quantile(series.flows(), prob)
}

/// The `p`-th percentile (0..=100) of each year's flows.
///
/// A year without any valid flow yields `NaN`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `p` is outside `[0, 100]`
/// or not finite.
pub fn annual_percentile(series: &FlowSeries, p: f64) -> Result<AnnualResult<f64>, IndicatorError> {
    let prob = check_percentile("p", p)?;
    Ok(percentile_by_year(series, prob))
}

/// The `p`-th percentile (0..=100) over the whole series.
///
/// `NaN` if the series has no valid flow.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `p` is outside `[0, 100]`
/// or not finite.
pub fn global_percentile(series: &FlowSeries, p: f64) -> Result<f64, IndicatorError> {
    let prob = check_percentile("p", p)?;
    Ok(percentile_of_series(series, prob))
}
