//! Error types for iha-series.

/// Error type for series construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// The input table does not satisfy the (date, flow) schema.
    ///
    /// Covers absent columns, a date column that is neither date-typed nor
    /// parseable text, a non-numeric flow column, and mismatched lengths.
    /// All violations found in one table are reported together.
    #[error("invalid schema, {count} problem(s): {details}")]
    InvalidSchema {
        /// Number of accumulated schema violations.
        count: usize,
        /// Human-readable summary of the violations.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_schema() {
        let err = SeriesError::InvalidSchema {
            count: 2,
            details: "column 'Date' not found; column 'Flow' not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid schema, 2 problem(s): column 'Date' not found; column 'Flow' not found"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SeriesError>();
    }
}
