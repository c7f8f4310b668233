//! Error types for iha-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the iha-io crate.
///
/// Covers missing files, CSV and JSON format failures, and schema problems
/// raised while turning a loaded table into a series.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error from the csv reader or writer, including the
    /// underlying I/O failure.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a JSON serialization failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Wraps a schema error from iha-series.
    #[error("series error: {reason}")]
    Series {
        /// Description of the schema problem.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<iha_series::SeriesError> for IoError {
    fn from(e: iha_series::SeriesError) -> Self {
        IoError::Series {
            reason: e.to_string(),
        }
    }
}
