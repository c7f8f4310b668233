//! Accumulated schema validation.

use crate::error::SeriesError;

/// Accumulates schema violations and converts them into a single
/// [`SeriesError::InvalidSchema`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one violation.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded violations.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise one `InvalidSchema` whose
    /// details join all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), SeriesError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SeriesError::InvalidSchema {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}
