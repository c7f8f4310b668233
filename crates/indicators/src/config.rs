//! Indicator configuration.

use crate::error::IndicatorError;
use crate::pulse::{PulseConfig, ThresholdSource};

/// Configuration for a full indicator run.
///
/// Only the pulse indicators are parameterised; every other indicator is
/// fully defined by the series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IhaConfig {
    pulse: PulseConfig,
}

impl IhaConfig {
    /// Set where pulse thresholds come from.
    pub fn with_pulse_source(mut self, source: ThresholdSource) -> Self {
        self.pulse = self.pulse.with_source(source);
        self
    }

    /// Set the percentile defining the high-pulse threshold.
    pub fn with_high_percentile(mut self, p: f64) -> Self {
        self.pulse = self.pulse.with_high_percentile(p);
        self
    }

    /// Set the percentile defining the low-pulse threshold.
    pub fn with_low_percentile(mut self, p: f64) -> Self {
        self.pulse = self.pulse.with_low_percentile(p);
        self
    }

    /// Returns the pulse configuration.
    pub fn pulse(&self) -> &PulseConfig {
        &self.pulse
    }

    /// Validate all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] for an out-of-range or
    /// inverted percentile pair.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        self.pulse.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = IhaConfig::default();
        assert_eq!(config.pulse().source(), ThresholdSource::WholeSeries);
        assert_eq!(config.pulse().high_percentile(), 90.0);
        assert_eq!(config.pulse().low_percentile(), 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = IhaConfig::default()
            .with_pulse_source(ThresholdSource::PerYear)
            .with_high_percentile(75.0)
            .with_low_percentile(25.0);

        assert_eq!(config.pulse().source(), ThresholdSource::PerYear);
        assert_eq!(config.pulse().high_percentile(), 75.0);
        assert_eq!(config.pulse().low_percentile(), 25.0);
    }

    #[test]
    fn test_validate_rejects_bad_percentiles() {
        let config = IhaConfig::default().with_low_percentile(-5.0);
        assert!(matches!(
            config.validate(),
            Err(IndicatorError::InvalidParameter { .. })
        ));
    }
}
