//! # iha-indicators
//!
//! Annual Indicators of Hydrologic Alteration computed from one
//! [`FlowSeries`](iha_series::FlowSeries).
//!
//! Every indicator is a pure function of the series returning an
//! [`AnnualResult`] keyed by the years present in the series. Per-year work
//! runs in parallel across years; a year whose value is undefined gets
//! `NaN` (or `None` for day-of-year values) instead of failing the call.
//!
//! ## Modules
//!
//! | Module | Indicators |
//! |--------|------------|
//! | `rolling` | 1/7/90-day minima and maxima, baseflow index |
//! | `quantile` | per-year and whole-series percentiles |
//! | `pulse` | high/low pulse counts and mean durations |
//! | `reversal` | rising/falling reversals |
//! | `zero_flow` | zero-flow periods, onset, central point, zero days |
//! | `increments` | mean/median rise and fall rates |
//! | `timing` | Julian day of annual minimum and maximum |
//! | `calendar_summary` | month x year medians with annual percentiles |
//! | `report` | all of the above in one table |

mod annual;
mod calendar_summary;
mod config;
mod error;
mod increments;
mod pulse;
mod quantile;
mod report;
mod reversal;
mod rolling;
mod timing;
mod zero_flow;

pub use annual::AnnualResult;
pub use calendar_summary::{CalendarSummary, CalendarSummaryRow, calendar_summary};
pub use config::IhaConfig;
pub use error::IndicatorError;
pub use increments::{
    IncrementStats, increment_stats, mean_of_neg_inc_cons_flows, mean_of_pos_inc_cons_flows,
    median_of_neg_inc_cons_flows, median_of_pos_inc_cons_flows,
};
pub use pulse::{
    PulseConfig, PulseCount, PulseKind, PulseThresholds, ThresholdSource, high_pulses_per_year,
    low_pulses_per_year, mean_duration_high_pulses, mean_duration_low_pulses, pulse_counts,
    pulse_thresholds,
};
pub use quantile::{annual_percentile, global_percentile};
pub use report::{AnnualIndicators, ConfigSummary, INDICATOR_COLUMNS, IhaReport, to_json};
pub use reversal::{Direction, count_reversals, flow_reversals};
pub use rolling::{
    Extreme, annual_1_day_maxima, annual_1_day_minima, annual_7_day_maxima, annual_7_day_minima,
    annual_90_day_maxima, annual_90_day_minima, annual_k_day_extreme, baseflow_index,
};
pub use timing::{annual_max_julian_day, annual_min_julian_day};
pub use zero_flow::{
    ZeroFlowStats, freq_zero_flow_periods, mean_zero_flow_periods, zero_flow_central_point,
    zero_flow_days, zero_flow_onset, zero_flow_runs, zero_flow_stats,
};
