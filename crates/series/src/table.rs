//! Raw two-or-more column table handed over by a loader.

use chrono::NaiveDate;

/// One typed column of a [`RawTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Already-typed calendar dates.
    Date(Vec<NaiveDate>),
    /// Unparsed text cells.
    Text(Vec<String>),
    /// Floating-point values; `NaN` marks a missing value.
    Float(Vec<f64>),
    /// Integer values.
    Integer(Vec<i64>),
}

impl Column {
    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            Column::Date(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Integer(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Date(_) => "date",
            Column::Text(_) => "text",
            Column::Float(_) => "float",
            Column::Integer(_) => "integer",
        }
    }
}

/// An ordered set of named columns.
///
/// Column names are unique; inserting an existing name replaces that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<(String, Column)>,
}

impl RawTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a column.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.insert(name, column);
        self
    }

    /// Adds or replaces a column in place.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name, column)),
        }
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }
}
