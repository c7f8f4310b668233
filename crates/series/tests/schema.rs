use chrono::NaiveDate;
use iha_series::{Column, FlowSeries, RawTable, SeriesError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn details(err: SeriesError) -> (usize, String) {
    match err {
        SeriesError::InvalidSchema { count, details } => (count, details),
    }
}

#[test]
fn typed_columns_build_series() {
    let table = RawTable::new()
        .with_column("Date", Column::Date(vec![date(2000, 1, 1), date(2000, 1, 2)]))
        .with_column("Flow", Column::Float(vec![1.5, f64::NAN]));
    let series = FlowSeries::from_table(&table, "Date", "Flow").unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.flows()[0], 1.5);
    assert!(series.flows()[1].is_nan());
}

#[test]
fn text_dates_are_parsed() {
    let table = RawTable::new()
        .with_column(
            "Date",
            Column::Text(vec!["2000-01-02".into(), "2000-01-01".into()]),
        )
        .with_column("Flow", Column::Integer(vec![20, 10]));
    let series = FlowSeries::from_table(&table, "Date", "Flow").unwrap();
    assert_eq!(series.dates(), &[date(2000, 1, 1), date(2000, 1, 2)]);
    assert_eq!(series.flows(), &[10.0, 20.0]);
}

#[test]
fn custom_column_names() {
    let table = RawTable::new()
        .with_column("day", Column::Date(vec![date(2010, 5, 5)]))
        .with_column("q_m3s", Column::Float(vec![3.0]))
        .with_column("station", Column::Text(vec!["X".into()]));
    let series = FlowSeries::from_table(&table, "day", "q_m3s").unwrap();
    assert_eq!(series.iter().collect::<Vec<_>>(), vec![(date(2010, 5, 5), 3.0)]);
}

#[test]
fn missing_date_column() {
    let table = RawTable::new().with_column("Flow", Column::Float(vec![1.0]));
    let (count, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert_eq!(count, 1);
    assert!(msg.contains("date column 'Date' not found"));
}

#[test]
fn missing_flow_column() {
    let table = RawTable::new().with_column("Date", Column::Date(vec![date(2000, 1, 1)]));
    let (count, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert_eq!(count, 1);
    assert!(msg.contains("flow column 'Flow' not found"));
}

#[test]
fn both_columns_missing_reported_together() {
    let (count, _) = details(FlowSeries::from_table(&RawTable::new(), "Date", "Flow").unwrap_err());
    assert_eq!(count, 2);
}

#[test]
fn unparseable_text_dates() {
    let table = RawTable::new()
        .with_column(
            "Date",
            Column::Text(vec!["2000-01-01".into(), "yesterday".into()]),
        )
        .with_column("Flow", Column::Float(vec![1.0, 2.0]));
    let (_, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert!(msg.contains("not parseable as dates"));
    assert!(msg.contains("yesterday"));
}

#[test]
fn numeric_date_column_rejected() {
    let table = RawTable::new()
        .with_column("Date", Column::Integer(vec![20000101]))
        .with_column("Flow", Column::Float(vec![1.0]));
    let (_, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert!(msg.contains("has type integer, expected date"));
}

#[test]
fn text_flow_column_rejected() {
    let table = RawTable::new()
        .with_column("Date", Column::Date(vec![date(2000, 1, 1)]))
        .with_column("Flow", Column::Text(vec!["high".into()]));
    let (_, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert!(msg.contains("has type text, expected numeric"));
}

#[test]
fn length_mismatch_rejected() {
    let table = RawTable::new()
        .with_column("Date", Column::Date(vec![date(2000, 1, 1), date(2000, 1, 2)]))
        .with_column("Flow", Column::Float(vec![1.0]));
    let (_, msg) = details(FlowSeries::from_table(&table, "Date", "Flow").unwrap_err());
    assert!(msg.contains("date column length 2 != flow column length 1"));
}

#[test]
fn round_trip_reproduces_sorted_deduplicated_input() {
    let input = vec![
        (date(2001, 1, 2), 5.0),
        (date(2000, 12, 31), 1.0),
        (date(2001, 1, 1), 2.0),
        (date(2000, 12, 31), 100.0),
        (date(2001, 1, 3), f64::NAN),
    ];
    let table = RawTable::new()
        .with_column("Date", Column::Date(input.iter().map(|p| p.0).collect()))
        .with_column("Flow", Column::Float(input.iter().map(|p| p.1).collect()));

    let series = FlowSeries::from_table(&table, "Date", "Flow").unwrap();
    let pairs: Vec<(NaiveDate, f64)> = series.iter().collect();

    let expected = [
        (date(2000, 12, 31), 1.0),
        (date(2001, 1, 1), 2.0),
        (date(2001, 1, 2), 5.0),
    ];
    assert_eq!(pairs.len(), 4);
    assert_eq!(&pairs[..3], &expected);
    assert_eq!(pairs[3].0, date(2001, 1, 3));
    assert!(pairs[3].1.is_nan());
}
