use chrono::{Datelike, NaiveDate};
use iha_calendar::YearMonth;
use iha_series::FlowSeries;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ramp(start: NaiveDate, n: usize) -> FlowSeries {
    FlowSeries::from_pairs(
        start
            .iter_days()
            .take(n)
            .enumerate()
            .map(|(i, d)| (d, i as f64)),
    )
}

#[test]
fn annual_partitions_are_ascending_and_contiguous() {
    let series = ramp(date(1999, 12, 30), 5);
    let parts = series.annual_partitions();
    assert_eq!(parts.len(), 2);

    assert_eq!(parts[0].year(), 1999);
    assert_eq!(parts[0].flows(), &[0.0, 1.0]);
    assert_eq!(parts[1].year(), 2000);
    assert_eq!(parts[1].flows(), &[2.0, 3.0, 4.0]);
    assert_eq!(parts[1].dates()[0], date(2000, 1, 1));
}

#[test]
fn partitions_skip_absent_years() {
    let series = FlowSeries::from_pairs(vec![
        (date(1990, 6, 1), 1.0),
        (date(1992, 6, 1), 2.0),
    ]);
    let years: Vec<i32> = series.annual_partitions().iter().map(|p| p.year()).collect();
    assert_eq!(years, vec![1990, 1992]);
}

#[test]
fn full_leap_year_partition() {
    let series = ramp(date(2000, 1, 1), 366);
    let parts = series.annual_partitions();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].len(), 366);
    assert_eq!(parts[0].doy(365).unwrap().get(), 366);
}

#[test]
fn monthly_partitions_keys() {
    let series = ramp(date(2000, 1, 30), 35);
    let keys: Vec<YearMonth> = series.monthly_partitions().iter().map(|p| p.key()).collect();
    assert_eq!(
        keys,
        vec![
            YearMonth::from_date(date(2000, 1, 30)),
            YearMonth::from_date(date(2000, 2, 1)),
            YearMonth::from_date(date(2000, 3, 1)),
        ]
    );
    let feb = series.monthly_partitions()[1];
    assert_eq!(feb.flows().len(), 29);
}

#[test]
fn empty_series_has_no_partitions() {
    let series = FlowSeries::from_pairs(Vec::new());
    assert!(series.is_empty());
    assert!(series.annual_partitions().is_empty());
    assert!(series.monthly_partitions().is_empty());
}

proptest! {
    #[test]
    fn partitions_cover_series_in_order(
        start_offset in 0i64..3000,
        n in 0usize..1200,
    ) {
        let start = date(1980, 1, 1) + chrono::Duration::days(start_offset);
        let series = ramp(start, n);
        let parts = series.annual_partitions();

        let total: usize = parts.iter().map(|p| p.len()).sum();
        prop_assert_eq!(total, series.len());

        let flattened: Vec<f64> = parts.iter().flat_map(|p| p.flows().iter().copied()).collect();
        prop_assert_eq!(flattened.as_slice(), series.flows());

        for pair in parts.windows(2) {
            prop_assert!(pair[0].year() < pair[1].year());
        }
        for p in &parts {
            prop_assert!(p.dates().iter().all(|d| d.year() == p.year()));
        }
    }
}
