//! Full indicator table: every annual indicator for every year.

use iha_series::FlowSeries;
use serde::Serialize;
use tracing::{debug, info};

use crate::annual::AnnualResult;
use crate::config::IhaConfig;
use crate::error::IndicatorError;
use crate::increments::increment_stats;
use crate::pulse::{PulseKind, ThresholdSource, pulse_counts};
use crate::reversal::flow_reversals;
use crate::rolling::{
    annual_1_day_maxima, annual_1_day_minima, annual_7_day_maxima, annual_7_day_minima,
    annual_90_day_maxima, annual_90_day_minima, baseflow_index,
};
use crate::timing::{annual_max_julian_day, annual_min_julian_day};
use crate::zero_flow::zero_flow_stats;

/// Indicator column names, in table order.
pub const INDICATOR_COLUMNS: [&str; 23] = [
    "annual_1_day_minima",
    "annual_7_day_minima",
    "annual_90_day_minima",
    "annual_1_day_maxima",
    "annual_7_day_maxima",
    "annual_90_day_maxima",
    "baseflow_index",
    "annual_min_julian_day",
    "annual_max_julian_day",
    "high_pulses_per_year",
    "low_pulses_per_year",
    "mean_duration_high_pulses",
    "mean_duration_low_pulses",
    "flow_reversals",
    "freq_zero_flow_periods",
    "mean_zero_flow_periods",
    "zero_flow_onset",
    "zero_flow_central_point",
    "zero_flow_days",
    "mean_of_pos_inc_cons_flows",
    "mean_of_neg_inc_cons_flows",
    "median_of_pos_inc_cons_flows",
    "median_of_neg_inc_cons_flows",
];

/// One row of the indicator table. Undefined values are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualIndicators {
    pub year: i32,
    pub annual_1_day_minima: f64,
    pub annual_7_day_minima: f64,
    pub annual_90_day_minima: f64,
    pub annual_1_day_maxima: f64,
    pub annual_7_day_maxima: f64,
    pub annual_90_day_maxima: f64,
    pub baseflow_index: f64,
    pub annual_min_julian_day: f64,
    pub annual_max_julian_day: f64,
    pub high_pulses_per_year: f64,
    pub low_pulses_per_year: f64,
    pub mean_duration_high_pulses: f64,
    pub mean_duration_low_pulses: f64,
    pub flow_reversals: f64,
    pub freq_zero_flow_periods: f64,
    pub mean_zero_flow_periods: f64,
    pub zero_flow_onset: f64,
    pub zero_flow_central_point: f64,
    pub zero_flow_days: f64,
    pub mean_of_pos_inc_cons_flows: f64,
    pub mean_of_neg_inc_cons_flows: f64,
    pub median_of_pos_inc_cons_flows: f64,
    pub median_of_neg_inc_cons_flows: f64,
}

impl AnnualIndicators {
    /// Indicator values in [`INDICATOR_COLUMNS`] order.
    pub fn values(&self) -> [f64; 23] {
        [
            self.annual_1_day_minima,
            self.annual_7_day_minima,
            self.annual_90_day_minima,
            self.annual_1_day_maxima,
            self.annual_7_day_maxima,
            self.annual_90_day_maxima,
            self.baseflow_index,
            self.annual_min_julian_day,
            self.annual_max_julian_day,
            self.high_pulses_per_year,
            self.low_pulses_per_year,
            self.mean_duration_high_pulses,
            self.mean_duration_low_pulses,
            self.flow_reversals,
            self.freq_zero_flow_periods,
            self.mean_zero_flow_periods,
            self.zero_flow_onset,
            self.zero_flow_central_point,
            self.zero_flow_days,
            self.mean_of_pos_inc_cons_flows,
            self.mean_of_neg_inc_cons_flows,
            self.median_of_pos_inc_cons_flows,
            self.median_of_neg_inc_cons_flows,
        ]
    }

    /// Value of a named indicator column.
    pub fn value(&self, column: &str) -> Option<f64> {
        INDICATOR_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values()[i])
    }
}

/// Summary of the run configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    pub pulse_source: ThresholdSource,
    pub high_percentile: f64,
    pub low_percentile: f64,
    pub n_days: usize,
    pub n_years: usize,
}

/// Every indicator for every year of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IhaReport {
    /// Configuration used.
    pub config: ConfigSummary,
    /// One row per year, ascending.
    pub years: Vec<AnnualIndicators>,
}

fn value_or_nan(result: &AnnualResult<f64>, year: i32) -> f64 {
    result.get(year).copied().unwrap_or(f64::NAN)
}

fn count_or_nan(result: &AnnualResult<usize>, year: i32) -> f64 {
    result.get(year).map_or(f64::NAN, |&v| v as f64)
}

fn day_or_nan(result: &AnnualResult<Option<u16>>, year: i32) -> f64 {
    result
        .get(year)
        .copied()
        .flatten()
        .map_or(f64::NAN, f64::from)
}

impl IhaReport {
    /// Computes every indicator under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] if `config` is invalid.
    #[tracing::instrument(skip_all, fields(n_days = series.len()))]
    pub fn compute(series: &FlowSeries, config: &IhaConfig) -> Result<Self, IndicatorError> {
        config.validate()?;

        let min1 = annual_1_day_minima(series);
        let min7 = annual_7_day_minima(series);
        let min90 = annual_90_day_minima(series);
        let max1 = annual_1_day_maxima(series);
        let max7 = annual_7_day_maxima(series);
        let max90 = annual_90_day_maxima(series);
        let bfi = baseflow_index(series);
        let min_day = annual_min_julian_day(series);
        let max_day = annual_max_julian_day(series);
        let high = pulse_counts(series, config.pulse(), PulseKind::High)?;
        let low = pulse_counts(series, config.pulse(), PulseKind::Low)?;
        let reversals = flow_reversals(series);
        let zero = zero_flow_stats(series);
        let inc = increment_stats(series);
        debug!("all indicators computed");

        let years: Vec<AnnualIndicators> = series
            .years()
            .into_iter()
            .map(|year| {
                let z = zero.get(year);
                let i = inc.get(year);
                let h = high.get(year);
                let l = low.get(year);
                AnnualIndicators {
                    year,
                    annual_1_day_minima: value_or_nan(&min1, year),
                    annual_7_day_minima: value_or_nan(&min7, year),
                    annual_90_day_minima: value_or_nan(&min90, year),
                    annual_1_day_maxima: value_or_nan(&max1, year),
                    annual_7_day_maxima: value_or_nan(&max7, year),
                    annual_90_day_maxima: value_or_nan(&max90, year),
                    baseflow_index: value_or_nan(&bfi, year),
                    annual_min_julian_day: day_or_nan(&min_day, year),
                    annual_max_julian_day: day_or_nan(&max_day, year),
                    high_pulses_per_year: h.map_or(f64::NAN, |c| c.pulses as f64),
                    low_pulses_per_year: l.map_or(f64::NAN, |c| c.pulses as f64),
                    mean_duration_high_pulses: h.map_or(f64::NAN, |c| c.mean_duration()),
                    mean_duration_low_pulses: l.map_or(f64::NAN, |c| c.mean_duration()),
                    flow_reversals: count_or_nan(&reversals, year),
                    freq_zero_flow_periods: z.map_or(f64::NAN, |s| s.periods as f64),
                    mean_zero_flow_periods: z.map_or(f64::NAN, |s| s.mean_period_length),
                    zero_flow_onset: z.and_then(|s| s.onset).map_or(f64::NAN, f64::from),
                    zero_flow_central_point: z.map_or(f64::NAN, |s| s.central_point),
                    zero_flow_days: z.map_or(f64::NAN, |s| s.zero_days as f64),
                    mean_of_pos_inc_cons_flows: i.map_or(f64::NAN, |s| s.mean_rise),
                    mean_of_neg_inc_cons_flows: i.map_or(f64::NAN, |s| s.mean_fall),
                    median_of_pos_inc_cons_flows: i.map_or(f64::NAN, |s| s.median_rise),
                    median_of_neg_inc_cons_flows: i.map_or(f64::NAN, |s| s.median_fall),
                }
            })
            .collect();

        info!(n_years = years.len(), "indicator report built");

        Ok(Self {
            config: ConfigSummary {
                pulse_source: config.pulse().source(),
                high_percentile: config.pulse().high_percentile(),
                low_percentile: config.pulse().low_percentile(),
                n_days: series.len(),
                n_years: years.len(),
            },
            years,
        })
    }

    /// Row for `year`, if present.
    pub fn year(&self, year: i32) -> Option<&AnnualIndicators> {
        self.years.iter().find(|r| r.year == year)
    }
}

/// Serialize a report to pretty-printed JSON. `NaN` becomes `null`.
pub fn to_json(report: &IhaReport) -> Result<String, IndicatorError> {
    serde_json::to_string_pretty(report).map_err(|e| IndicatorError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32) -> AnnualIndicators {
        AnnualIndicators {
            year,
            annual_1_day_minima: 1.0,
            annual_7_day_minima: 2.0,
            annual_90_day_minima: 3.0,
            annual_1_day_maxima: 4.0,
            annual_7_day_maxima: 5.0,
            annual_90_day_maxima: 6.0,
            baseflow_index: 7.0,
            annual_min_julian_day: 8.0,
            annual_max_julian_day: 9.0,
            high_pulses_per_year: 10.0,
            low_pulses_per_year: 11.0,
            mean_duration_high_pulses: 12.0,
            mean_duration_low_pulses: 13.0,
            flow_reversals: 14.0,
            freq_zero_flow_periods: 15.0,
            mean_zero_flow_periods: 16.0,
            zero_flow_onset: 17.0,
            zero_flow_central_point: 18.0,
            zero_flow_days: 19.0,
            mean_of_pos_inc_cons_flows: 20.0,
            mean_of_neg_inc_cons_flows: 21.0,
            median_of_pos_inc_cons_flows: 22.0,
            median_of_neg_inc_cons_flows: f64::NAN,
        }
    }

    #[test]
    fn test_values_follow_column_order() {
        let r = row(2000);
        let values = r.values();
        for (i, v) in values.iter().take(22).enumerate() {
            assert_eq!(*v, (i + 1) as f64, "column {}", INDICATOR_COLUMNS[i]);
        }
        assert!(values[22].is_nan());
    }

    #[test]
    fn test_value_by_name() {
        let r = row(2000);
        assert_eq!(r.value("flow_reversals"), Some(14.0));
        assert_eq!(r.value("no_such_column"), None);
    }

    #[test]
    fn test_serialized_field_order_matches_columns() {
        let json = serde_json::to_string(&row(2000)).unwrap();
        let mut last = json.find("\"year\"").unwrap();
        for col in INDICATOR_COLUMNS {
            let pos = json.find(&format!("\"{col}\"")).unwrap();
            assert!(pos > last, "{col} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_to_json_writes_nan_as_null() {
        let report = IhaReport {
            config: ConfigSummary {
                pulse_source: ThresholdSource::WholeSeries,
                high_percentile: 90.0,
                low_percentile: 10.0,
                n_days: 365,
                n_years: 1,
            },
            years: vec![row(2000)],
        };
        let json = to_json(&report).unwrap();
        assert!(json.contains("\"pulse_source\": \"whole-series\""));
        assert!(json.contains("\"median_of_neg_inc_cons_flows\": null"));
        assert!(json.contains("\"year\": 2000"));
    }
}
