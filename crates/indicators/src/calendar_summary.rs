//! Year x month table of median flows with annual percentiles.

use std::collections::BTreeMap;

use iha_series::FlowSeries;
use serde::Serialize;

use crate::quantile::percentile_by_year;

/// One year of the calendar summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSummaryRow {
    /// Calendar year.
    pub year: i32,
    /// Median flow of each month, January first. `NaN` for a month without
    /// valid data.
    pub monthly_medians: [f64; 12],
    /// Median flow of the year.
    pub median: f64,
    /// 10th percentile of the year's flow.
    pub p10: f64,
    /// 90th percentile of the year's flow.
    pub p90: f64,
}

/// Calendar summary rows in ascending year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CalendarSummary {
    rows: Vec<CalendarSummaryRow>,
}

impl CalendarSummary {
    /// Rows, one per year.
    pub fn rows(&self) -> &[CalendarSummaryRow] {
        &self.rows
    }

    /// Row for `year`, if present.
    pub fn row(&self, year: i32) -> Option<&CalendarSummaryRow> {
        self.rows.iter().find(|r| r.year == year)
    }
}

/// Builds the month x year median table.
pub fn calendar_summary(series: &FlowSeries) -> CalendarSummary {
    let mut monthly: BTreeMap<i32, [f64; 12]> = BTreeMap::new();
    for part in series.monthly_partitions() {
        let key = part.key();
        let medians = monthly.entry(key.year()).or_insert([f64::NAN; 12]);
        medians[key.month_index()] = iha_stats::nan_median(part.flows());
    }

    let median = percentile_by_year(series, 0.5);
    let p10 = percentile_by_year(series, 0.1);
    let p90 = percentile_by_year(series, 0.9);

    let rows = monthly
        .into_iter()
        .map(|(year, monthly_medians)| CalendarSummaryRow {
            year,
            monthly_medians,
            median: median.get(year).copied().unwrap_or(f64::NAN),
            p10: p10.get(year).copied().unwrap_or(f64::NAN),
            p90: p90.get(year).copied().unwrap_or(f64::NAN),
        })
        .collect();

    CalendarSummary { rows }
}
