//! CSV reader configuration and table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use iha_series::{Column, FlowSeries, RawTable};
use tracing::{debug, info};

use crate::error::IoError;

/// Cell values read as a missing number.
const MISSING_TOKENS: [&str; 4] = ["", "NA", "NaN", "nan"];

/// Configuration for reading a discharge table from CSV.
///
/// The [`Default`] implementation expects a comma-separated file with a
/// header row naming a `Date` and a `Flow` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Field delimiter.
    delimiter: u8,
    /// Header of the date column.
    date_col: String,
    /// Header of the discharge column.
    flow_col: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_col: "Date".into(),
            flow_col: "Flow".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date column header.
    pub fn with_date_col(mut self, name: impl Into<String>) -> Self {
        self.date_col = name.into();
        self
    }

    /// Set the discharge column header.
    pub fn with_flow_col(mut self, name: impl Into<String>) -> Self {
        self.flow_col = name.into();
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the date column header.
    pub fn date_col(&self) -> &str {
        &self.date_col
    }

    /// Returns the discharge column header.
    pub fn flow_col(&self) -> &str {
        &self.flow_col
    }
}

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Types one column: `Float` when every non-missing cell parses as a number,
/// `Text` otherwise.
fn infer_column(cells: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = cells
        .iter()
        .map(|c| {
            if is_missing(c) {
                Some(f64::NAN)
            } else {
                c.parse::<f64>().ok()
            }
        })
        .collect();
    match parsed {
        Some(values) => Column::Float(values),
        None => Column::Text(cells),
    }
}

/// Read a CSV table from any reader.
///
/// Every header becomes one column. Cells are trimmed of surrounding
/// whitespace before typing.
///
/// # Errors
///
/// Returns [`IoError::Csv`] on malformed input, including rows whose field
/// count differs from the header.
pub fn read_csv_from<R: Read>(reader: R, config: &ReaderConfig) -> Result<RawTable, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (col, value) in cells.iter_mut().zip(record.iter()) {
            col.push(value.to_string());
        }
    }

    let n_rows = cells.first().map_or(0, Vec::len);
    let table = headers
        .into_iter()
        .zip(cells)
        .fold(RawTable::new(), |table, (name, col)| {
            let column = infer_column(col);
            debug!(column = %name, kind = column.type_name(), "typed csv column");
            table.with_column(name, column)
        });

    debug!(rows = n_rows, "csv table loaded");
    Ok(table)
}

/// Read a CSV file into a [`RawTable`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, or
/// [`IoError::Csv`] if it cannot be opened or parsed.
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<RawTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Csv {
        reason: format!("{}: {e}", path.display()),
    })?;
    read_csv_from(file, config)
}

/// Read a CSV file and validate it into a [`FlowSeries`] using the
/// configured date and flow columns.
///
/// # Errors
///
/// Returns any [`read_csv`] error, or [`IoError::Series`] if the table does
/// not satisfy the series schema.
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<FlowSeries, IoError> {
    let table = read_csv(path, config)?;
    let series = FlowSeries::from_table(&table, config.date_col(), config.flow_col())?;
    info!(
        path = %path.display(),
        n_days = series.len(),
        n_years = series.years().len(),
        "discharge series loaded",
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = ReaderConfig::default();
        assert_eq!(c.delimiter(), b',');
        assert_eq!(c.date_col(), "Date");
        assert_eq!(c.flow_col(), "Flow");
    }

    #[test]
    fn builder_methods() {
        let c = ReaderConfig::default()
            .with_delimiter(b';')
            .with_date_col("day")
            .with_flow_col("q");
        assert_eq!(c.delimiter(), b';');
        assert_eq!(c.date_col(), "day");
        assert_eq!(c.flow_col(), "q");
    }

    #[test]
    fn infer_float_with_missing_tokens() {
        let cells = ["1.5", "", "NA", "NaN", "nan", "3"]
            .map(String::from)
            .to_vec();
        let Column::Float(values) = infer_column(cells) else {
            panic!("expected float column");
        };
        assert_eq!(values[0], 1.5);
        assert!(values[1..5].iter().all(|v| v.is_nan()));
        assert_eq!(values[5], 3.0);
    }

    #[test]
    fn infer_text_when_any_cell_is_not_numeric() {
        let cells = ["1.5", "2001-01-01"].map(String::from).to_vec();
        assert!(matches!(infer_column(cells), Column::Text(_)));
    }

    #[test]
    fn read_from_bytes() {
        let data = "Date,Flow\n2001-01-01,1.0\n2001-01-02, 2.5 \n";
        let table = read_csv_from(data.as_bytes(), &ReaderConfig::default()).unwrap();
        assert_eq!(
            table.column("Flow"),
            Some(&Column::Float(vec![1.0, 2.5]))
        );
        assert!(matches!(table.column("Date"), Some(Column::Text(_))));
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let data = "Date,Flow\n2001-01-01,1.0,extra\n";
        let err = read_csv_from(data.as_bytes(), &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, IoError::Csv { .. }));
    }
}
