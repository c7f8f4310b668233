//! Julian day of the annual extremes.

use iha_series::{FlowSeries, YearPartition};

use crate::annual::{AnnualResult, per_year};

fn julian_day_of(part: &YearPartition<'_>, position: Option<usize>) -> Option<u16> {
    position.and_then(|i| part.doy(i)).map(|d| d.get())
}

/// Day-of-year (1 = January 1) of each year's minimum flow.
///
/// Ties resolve to the earliest day. `None` for a year without valid flow.
pub fn annual_min_julian_day(series: &FlowSeries) -> AnnualResult<Option<u16>> {
    per_year(series, |p| julian_day_of(p, iha_stats::first_argmin(p.flows())))
}

/// Day-of-year (1 = January 1) of each year's maximum flow.
///
/// Ties resolve to the earliest day. `None` for a year without valid flow.
pub fn annual_max_julian_day(series: &FlowSeries) -> AnnualResult<Option<u16>> {
    per_year(series, |p| julian_day_of(p, iha_stats::first_argmax(p.flows())))
}
