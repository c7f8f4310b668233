//! Validated, date-sorted daily discharge series.

use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use iha_calendar::YearMonth;
use tracing::debug;

use crate::error::SeriesError;
use crate::partition::{MonthPartition, YearPartition};
use crate::table::{Column, RawTable};
use crate::validate::ValidationCollector;

/// Text date formats accepted for a `Text` date column, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// A daily discharge series: `(date, flow)` pairs sorted ascending by date,
/// one entry per date.
///
/// Missing flows are `f64::NAN`. Calendar days absent from the input are not
/// filled in; run-based indicators treat adjacent entries as consecutive
/// days. The series is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSeries {
    dates: Vec<NaiveDate>,
    flows: Vec<f64>,
    /// Index range of each calendar year, ascending by year.
    years: Vec<(i32, Range<usize>)>,
}

impl FlowSeries {
    /// Builds a series from a raw table.
    ///
    /// Only the `date_col` and `flow_col` columns are used; any other
    /// columns are ignored. A `Text` date column is parsed with the
    /// accepted formats (`YYYY-MM-DD`, `YYYY/MM/DD`, `DD.MM.YYYY`,
    /// `MM/DD/YYYY`). An `Integer` flow column is widened to `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidSchema`] if either column is absent, the
    /// date column is not date-typed and not parseable text, the flow column
    /// is not numeric, or the columns differ in length.
    pub fn from_table(
        table: &RawTable,
        date_col: &str,
        flow_col: &str,
    ) -> Result<Self, SeriesError> {
        let mut c = ValidationCollector::new();

        let dates = match table.column(date_col) {
            None => {
                c.push(format!("date column '{date_col}' not found"));
                None
            }
            Some(Column::Date(d)) => Some(d.clone()),
            Some(Column::Text(cells)) => match parse_dates(cells) {
                Ok(d) => Some(d),
                Err(msg) => {
                    c.push(format!("date column '{date_col}': {msg}"));
                    None
                }
            },
            Some(other) => {
                c.push(format!(
                    "date column '{date_col}' has type {}, expected date",
                    other.type_name()
                ));
                None
            }
        };

        let flows = match table.column(flow_col) {
            None => {
                c.push(format!("flow column '{flow_col}' not found"));
                None
            }
            Some(Column::Float(v)) => Some(v.clone()),
            Some(Column::Integer(v)) => Some(v.iter().map(|&x| x as f64).collect::<Vec<_>>()),
            Some(other) => {
                c.push(format!(
                    "flow column '{flow_col}' has type {}, expected numeric",
                    other.type_name()
                ));
                None
            }
        };

        if let (Some(d), Some(f)) = (&dates, &flows)
            && d.len() != f.len()
        {
            c.push(format!(
                "date column length {} != flow column length {}",
                d.len(),
                f.len()
            ));
        }

        c.finish()?;

        let (Some(dates), Some(flows)) = (dates, flows) else {
            return Err(SeriesError::InvalidSchema {
                count: 1,
                details: "date or flow column unavailable".to_string(),
            });
        };

        Ok(Self::from_pairs(dates.into_iter().zip(flows)))
    }

    /// Builds a series from already-typed pairs.
    ///
    /// Pairs are stably sorted by date; for a repeated date the first
    /// occurrence in input order is kept and later ones are dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NaiveDate, f64)>) -> Self {
        let mut pairs: Vec<(NaiveDate, f64)> = pairs.into_iter().collect();
        let n_input = pairs.len();
        pairs.sort_by_key(|&(d, _)| d);
        pairs.dedup_by_key(|p| p.0);

        let dropped = n_input - pairs.len();
        if dropped > 0 {
            debug!(dropped, "duplicate dates removed, first occurrence kept");
        }

        let (dates, flows): (Vec<NaiveDate>, Vec<f64>) = pairs.into_iter().unzip();
        let years = contiguous_ranges(&dates, |d| d.year());

        debug!(
            n_days = dates.len(),
            n_years = years.len(),
            n_missing = flows.iter().filter(|v| v.is_nan()).count(),
            "flow series built"
        );

        Self {
            dates,
            flows,
            years,
        }
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Flows aligned with [`dates`](Self::dates). `NaN` marks a missing value.
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// `(date, flow)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.flows.iter().copied())
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the series has no days.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Distinct calendar years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().map(|(y, _)| *y).collect()
    }

    /// One partition per calendar year, ascending, each in date order.
    pub fn annual_partitions(&self) -> Vec<YearPartition<'_>> {
        self.years
            .iter()
            .map(|(year, range)| {
                YearPartition::new(
                    *year,
                    &self.dates[range.clone()],
                    &self.flows[range.clone()],
                )
            })
            .collect()
    }

    /// One partition per `(year, month)` present, ascending.
    pub fn monthly_partitions(&self) -> Vec<MonthPartition<'_>> {
        contiguous_ranges(&self.dates, |d| YearMonth::from_date(*d))
            .into_iter()
            .map(|(key, range)| MonthPartition::new(key, &self.flows[range]))
            .collect()
    }
}

/// Splits sorted dates into maximal runs sharing one key.
fn contiguous_ranges<K: PartialEq>(
    dates: &[NaiveDate],
    key: impl Fn(&NaiveDate) -> K,
) -> Vec<(K, Range<usize>)> {
    let mut out: Vec<(K, Range<usize>)> = Vec::new();
    for (i, date) in dates.iter().enumerate() {
        let k = key(date);
        match out.last_mut() {
            Some((last, range)) if *last == k => range.end = i + 1,
            _ => out.push((k, i..i + 1)),
        }
    }
    out
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
}

fn parse_dates(cells: &[String]) -> Result<Vec<NaiveDate>, String> {
    let mut dates = Vec::with_capacity(cells.len());
    let mut failures = 0usize;
    let mut first_failure: Option<(usize, &str)> = None;
    for (row, cell) in cells.iter().enumerate() {
        match parse_date(cell) {
            Some(d) => dates.push(d),
            None => {
                failures += 1;
                first_failure.get_or_insert((row, cell.as_str()));
            }
        }
    }
    match first_failure {
        None => Ok(dates),
        Some((row, cell)) => Err(format!(
            "{failures} value(s) not parseable as dates (first at row {row}: {cell:?})"
        )),
    }
}
