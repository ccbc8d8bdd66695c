//! Defaults for threshold statistics.

use grade_core::enums::TotalCountBasis;
use grade_core::inputs::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    /// Average a learner must strictly exceed to be counted.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Whether `total_count` covers every learner or only qualifying ones.
    #[serde(default)]
    pub total_count: TotalCountBasis,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            total_count: TotalCountBasis::default(),
        }
    }
}

impl StatsConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the threshold is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "stats.threshold".into(),
                reason: format!("must be a finite number, got {}", self.threshold),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StatsConfig::default();
        assert!((config.threshold - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.total_count, TotalCountBasis::Population);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn infinite_threshold_is_invalid() {
        let config = StatsConfig {
            threshold: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
