//! High and low flow pulses.
//!
//! A day is *in* a high pulse when its flow is strictly above the high
//! threshold, and in a low pulse when strictly below the low threshold. A
//! pulse *starts* on a pair of consecutive valid days whose classification
//! changes into the pulse state:
//!
//! | Kind | Start condition on `(a, b)` |
//! |------|-----------------------------|
//! | High | `a <= threshold < b` |
//! | Low  | `a >= threshold > b` |
//!
//! Pairs touching a missing value never start a pulse. A pulse that starts
//! across a year boundary (last day of year `Y`, first day of `Y + 1`) is
//! credited to `Y`, judged with `Y`'s threshold.

use std::fmt;
use std::str::FromStr;

use iha_series::{FlowSeries, YearPartition};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annual::{AnnualResult, per_year_with_next};
use crate::error::IndicatorError;
use crate::quantile::{check_percentile, percentile_by_year, percentile_of_series};

/// Where pulse thresholds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdSource {
    /// One percentile computed over all years (IHA convention).
    #[default]
    WholeSeries,
    /// A percentile recomputed from each year's own flows.
    PerYear,
}

impl FromStr for ThresholdSource {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "whole-series" | "global" => Ok(ThresholdSource::WholeSeries),
            "per-year" | "annual" => Ok(ThresholdSource::PerYear),
            other => Err(IndicatorError::invalid(
                "threshold_source",
                format!("expected \"whole-series\" or \"per-year\", got {other:?}"),
            )),
        }
    }
}

impl fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdSource::WholeSeries => f.write_str("whole-series"),
            ThresholdSource::PerYear => f.write_str("per-year"),
        }
    }
}

/// Pulse kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseKind {
    /// Flow above the high threshold.
    High,
    /// Flow below the low threshold.
    Low,
}

impl PulseKind {
    /// Whether a day with `flow` is inside this kind of pulse.
    pub fn contains(self, flow: f64, threshold: f64) -> bool {
        match self {
            PulseKind::High => flow > threshold,
            PulseKind::Low => flow < threshold,
        }
    }

    /// Whether the consecutive pair `(a, b)` starts a pulse.
    ///
    /// Any `NaN` operand makes every comparison false, so missing days never
    /// start a pulse.
    pub fn starts(self, a: f64, b: f64, threshold: f64) -> bool {
        match self {
            PulseKind::High => a <= threshold && b > threshold,
            PulseKind::Low => a >= threshold && b < threshold,
        }
    }
}

/// Configuration for pulse thresholds.
///
/// Defaults: whole-series source, high = 90th percentile, low = 10th.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseConfig {
    source: ThresholdSource,
    high_percentile: f64,
    low_percentile: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            source: ThresholdSource::WholeSeries,
            high_percentile: 90.0,
            low_percentile: 10.0,
        }
    }
}

impl PulseConfig {
    /// Set the threshold source.
    pub fn with_source(mut self, source: ThresholdSource) -> Self {
        self.source = source;
        self
    }

    /// Set the percentile (0..=100) defining the high threshold.
    pub fn with_high_percentile(mut self, p: f64) -> Self {
        self.high_percentile = p;
        self
    }

    /// Set the percentile (0..=100) defining the low threshold.
    pub fn with_low_percentile(mut self, p: f64) -> Self {
        self.low_percentile = p;
        self
    }

    /// Returns the threshold source.
    pub fn source(&self) -> ThresholdSource {
        self.source
    }

    /// Returns the high percentile.
    pub fn high_percentile(&self) -> f64 {
        self.high_percentile
    }

    /// Returns the low percentile.
    pub fn low_percentile(&self) -> f64 {
        self.low_percentile
    }

    /// Validate that both percentiles lie in `[0, 100]` and `low < high`.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] naming the offending
    /// field.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let high = check_percentile("high_percentile", self.high_percentile)?;
        let low = check_percentile("low_percentile", self.low_percentile)?;
        if low >= high {
            return Err(IndicatorError::invalid(
                "low_percentile",
                format!(
                    "must be below high_percentile ({} >= {})",
                    self.low_percentile, self.high_percentile
                ),
            ));
        }
        Ok(())
    }
}

/// Thresholds applied to one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PulseThresholds {
    /// Flow above which a day is in a high pulse.
    pub high: f64,
    /// Flow below which a day is in a low pulse.
    pub low: f64,
}

impl PulseThresholds {
    fn for_kind(&self, kind: PulseKind) -> f64 {
        match kind {
            PulseKind::High => self.high,
            PulseKind::Low => self.low,
        }
    }
}

/// Pulse count and in-pulse day count of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PulseCount {
    /// Number of pulse starts credited to the year.
    pub pulses: usize,
    /// Number of days satisfying the pulse predicate.
    pub days: usize,
}

impl PulseCount {
    /// Mean pulse duration in days; `NaN` with no pulse.
    pub fn mean_duration(&self) -> f64 {
        if self.pulses == 0 {
            f64::NAN
        } else {
            self.days as f64 / self.pulses as f64
        }
    }
}

/// Thresholds used for each year under `config`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn pulse_thresholds(
    series: &FlowSeries,
    config: &PulseConfig,
) -> Result<AnnualResult<PulseThresholds>, IndicatorError> {
    config.validate()?;
    let high_p = config.high_percentile / 100.0;
    let low_p = config.low_percentile / 100.0;

    let thresholds: AnnualResult<PulseThresholds> = match config.source {
        ThresholdSource::WholeSeries => {
            let fixed = PulseThresholds {
                high: percentile_of_series(series, high_p),
                low: percentile_of_series(series, low_p),
            };
            debug!(high = fixed.high, low = fixed.low, "whole-series pulse thresholds");
            series.years().into_iter().map(|y| (y, fixed)).collect()
        }
        ThresholdSource::PerYear => {
            let high = percentile_by_year(series, high_p);
            let low = percentile_by_year(series, low_p);
            high.iter()
                .map(|(y, h)| {
                    let l = low.get(*y).copied().unwrap_or(f64::NAN);
                    (*y, PulseThresholds { high: *h, low: l })
                })
                .collect()
        }
    };
    Ok(thresholds)
}

fn count_year(
    part: &YearPartition<'_>,
    next: Option<&YearPartition<'_>>,
    kind: PulseKind,
    threshold: f64,
) -> PulseCount {
    let mut pulses = part
        .valid_pairs()
        .filter(|&(a, b)| kind.starts(a, b, threshold))
        .count();

    if let (Some(last), Some(first)) = (part.last_flow(), next.and_then(|n| n.first_flow()))
        && kind.starts(last, first, threshold)
    {
        pulses += 1;
    }

    let days = part
        .flows()
        .iter()
        .filter(|&&v| kind.contains(v, threshold))
        .count();

    PulseCount { pulses, days }
}

/// Pulse and in-pulse day counts per year for one pulse kind.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn pulse_counts(
    series: &FlowSeries,
    config: &PulseConfig,
    kind: PulseKind,
) -> Result<AnnualResult<PulseCount>, IndicatorError> {
    let thresholds = pulse_thresholds(series, config)?;
    Ok(per_year_with_next(series, |part, next| {
        let threshold = thresholds
            .get(part.year())
            .map_or(f64::NAN, |t| t.for_kind(kind));
        count_year(part, next, kind, threshold)
    }))
}

/// Number of high pulses starting in each year.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn high_pulses_per_year(
    series: &FlowSeries,
    config: &PulseConfig,
) -> Result<AnnualResult<usize>, IndicatorError> {
    Ok(pulse_counts(series, config, PulseKind::High)?.map(|c| c.pulses))
}

/// Number of low pulses starting in each year.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn low_pulses_per_year(
    series: &FlowSeries,
    config: &PulseConfig,
) -> Result<AnnualResult<usize>, IndicatorError> {
    Ok(pulse_counts(series, config, PulseKind::Low)?.map(|c| c.pulses))
}

/// Days above the high threshold divided by the number of high pulses.
///
/// `NaN` for a year without high pulses.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn mean_duration_high_pulses(
    series: &FlowSeries,
    config: &PulseConfig,
) -> Result<AnnualResult<f64>, IndicatorError> {
    Ok(pulse_counts(series, config, PulseKind::High)?.map(PulseCount::mean_duration))
}

/// Days below the low threshold divided by the number of low pulses.
///
/// `NaN` for a year without low pulses.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
pub fn mean_duration_low_pulses(
    series: &FlowSeries,
    config: &PulseConfig,
) -> Result<AnnualResult<f64>, IndicatorError> {
    Ok(pulse_counts(series, config, PulseKind::Low)?.map(PulseCount::mean_duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_start_requires_upward_crossing() {
        assert!(PulseKind::High.starts(5.0, 11.0, 10.0));
        assert!(PulseKind::High.starts(10.0, 11.0, 10.0));
        assert!(!PulseKind::High.starts(11.0, 12.0, 10.0));
        assert!(!PulseKind::High.starts(9.0, 10.0, 10.0));
    }

    #[test]
    fn test_low_start_requires_downward_crossing() {
        assert!(PulseKind::Low.starts(5.0, 1.0, 2.0));
        assert!(PulseKind::Low.starts(2.0, 1.0, 2.0));
        assert!(!PulseKind::Low.starts(1.0, 0.5, 2.0));
        assert!(!PulseKind::Low.starts(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_missing_values_never_start() {
        assert!(!PulseKind::High.starts(f64::NAN, 11.0, 10.0));
        assert!(!PulseKind::High.starts(1.0, f64::NAN, 10.0));
        assert!(!PulseKind::Low.starts(f64::NAN, 0.0, 10.0));
        assert!(!PulseKind::Low.contains(f64::NAN, 10.0));
    }

    #[test]
    fn test_mean_duration_zero_pulses_is_nan() {
        let c = PulseCount { pulses: 0, days: 4 };
        assert!(c.mean_duration().is_nan());
        let c = PulseCount { pulses: 2, days: 5 };
        assert_eq!(c.mean_duration(), 2.5);
    }

    #[test]
    fn test_config_defaults() {
        let c = PulseConfig::default();
        assert_eq!(c.source(), ThresholdSource::WholeSeries);
        assert_eq!(c.high_percentile(), 90.0);
        assert_eq!(c.low_percentile(), 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_inverted_percentiles() {
        let c = PulseConfig::default()
            .with_high_percentile(20.0)
            .with_low_percentile(25.0);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("low_percentile"));
    }

    #[test]
    fn test_config_rejects_out_of_range() {
        let c = PulseConfig::default().with_high_percentile(101.0);
        assert!(c.validate().unwrap_err().to_string().contains("high_percentile"));
    }

    #[test]
    fn test_threshold_source_parse_and_display() {
        assert_eq!(
            "whole_series".parse::<ThresholdSource>().unwrap(),
            ThresholdSource::WholeSeries
        );
        assert_eq!(
            "Per-Year".parse::<ThresholdSource>().unwrap(),
            ThresholdSource::PerYear
        );
        assert!("monthly".parse::<ThresholdSource>().is_err());
        for s in [ThresholdSource::WholeSeries, ThresholdSource::PerYear] {
            assert_eq!(s.to_string().parse::<ThresholdSource>().unwrap(), s);
        }
    }
}
