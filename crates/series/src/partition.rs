//! Borrowed per-year and per-month views of a [`FlowSeries`](crate::FlowSeries).

use chrono::NaiveDate;
use iha_calendar::{Doy, YearMonth};

/// The days of one calendar year, in date order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPartition<'a> {
    year: i32,
    dates: &'a [NaiveDate],
    flows: &'a [f64],
}

impl<'a> YearPartition<'a> {
    pub(crate) fn new(year: i32, dates: &'a [NaiveDate], flows: &'a [f64]) -> Self {
        Self { year, dates, flows }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Dates of this year.
    pub fn dates(&self) -> &'a [NaiveDate] {
        self.dates
    }

    /// Flows of this year; `NaN` marks a missing value.
    pub fn flows(&self) -> &'a [f64] {
        self.flows
    }

    /// Number of days present.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns `true` if the partition has no days.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Consecutive `(flow[i], flow[i + 1])` pairs where neither is missing.
    ///
    /// A missing day removes both pairs it touches; nothing is bridged
    /// across it.
    pub fn valid_pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.flows
            .windows(2)
            .map(|w| (w[0], w[1]))
            .filter(|(a, b)| !a.is_nan() && !b.is_nan())
    }

    /// Day-of-year of the `i`-th day of the partition.
    pub fn doy(&self, i: usize) -> Option<Doy> {
        self.dates.get(i).map(|d| Doy::from_date(*d))
    }

    /// Flow on the first day of the partition.
    pub fn first_flow(&self) -> Option<f64> {
        self.flows.first().copied()
    }

    /// Flow on the last day of the partition.
    pub fn last_flow(&self) -> Option<f64> {
        self.flows.last().copied()
    }
}

/// The days of one `(year, month)`, in date order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPartition<'a> {
    key: YearMonth,
    flows: &'a [f64],
}

impl<'a> MonthPartition<'a> {
    pub(crate) fn new(key: YearMonth, flows: &'a [f64]) -> Self {
        Self { key, flows }
    }

    /// `(year, month)` key.
    pub fn key(&self) -> YearMonth {
        self.key
    }

    /// Flows of this month; `NaN` marks a missing value.
    pub fn flows(&self) -> &'a [f64] {
        self.flows
    }
}
