//! Indicator error types.

/// Errors raised by indicator calls.
///
/// Per-year values that are mathematically undefined (no pulses, no valid
/// flows, ...) are not errors; they are reported as `NaN` or `None` in that
/// year's entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicatorError {
    /// A call received a parameter outside its domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// JSON serialization of a result failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl IndicatorError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
