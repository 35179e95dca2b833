//! Analytics configuration
//!
//! Parameters are loaded from JSON. Every field is optional and falls back
//! to the documented default, so an empty object is a valid configuration.

use prism_core::{FeeSchedule, MAX_FEE_BPS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::amm::DEFAULT_INVARIANT_TOLERANCE_BPS;
use crate::depth::{DepthParams, LARGE_IMPACT_SIZE, MAX_DEPTH_LEVELS, SMALL_IMPACT_SIZE};
use crate::histogram::DEFAULT_BUCKET_SIZE_BPS;
use crate::qb::{DEFAULT_EWMA_ALPHA, VALIDITY_THRESHOLD_BPS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunable parameters for the analytics components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// EWMA weight on the newest Q(B) observation
    pub ewma_alpha: f64,
    /// Max raw-vs-smoothed Q(B) deviation for a valid result
    pub validity_threshold_bps: f64,
    /// Order-book levels kept per side
    pub max_depth_levels: usize,
    pub small_impact_size: f64,
    pub large_impact_size: f64,
    /// Allowed constant-product drift
    pub invariant_tolerance_bps: f64,
    pub histogram_bucket_bps: f64,
    pub fees: FeeSchedule,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            ewma_alpha: DEFAULT_EWMA_ALPHA,
            validity_threshold_bps: VALIDITY_THRESHOLD_BPS,
            max_depth_levels: MAX_DEPTH_LEVELS,
            small_impact_size: SMALL_IMPACT_SIZE,
            large_impact_size: LARGE_IMPACT_SIZE,
            invariant_tolerance_bps: DEFAULT_INVARIANT_TOLERANCE_BPS,
            histogram_bucket_bps: DEFAULT_BUCKET_SIZE_BPS,
            fees: FeeSchedule::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded default configuration
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("default_config.json"))
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ewma_alpha > 0.0 && self.ewma_alpha <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ewmaAlpha must be in (0, 1], got {}",
                self.ewma_alpha
            )));
        }
        if !(self.validity_threshold_bps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "validityThresholdBps must be positive, got {}",
                self.validity_threshold_bps
            )));
        }
        if self.max_depth_levels == 0 {
            return Err(ConfigError::Invalid(
                "maxDepthLevels must be at least 1".to_string(),
            ));
        }
        if !(self.small_impact_size > 0.0 && self.large_impact_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "impact sizes must be positive, got {} and {}",
                self.small_impact_size, self.large_impact_size
            )));
        }
        if !(self.invariant_tolerance_bps >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "invariantToleranceBps must be non-negative, got {}",
                self.invariant_tolerance_bps
            )));
        }
        if !(self.histogram_bucket_bps > 0.0 && self.histogram_bucket_bps.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "histogramBucketBps must be positive, got {}",
                self.histogram_bucket_bps
            )));
        }
        if let Some(category) = self.fees.excessive_category() {
            return Err(ConfigError::Invalid(format!(
                "{:?} fee of {} bps exceeds {} bps",
                category,
                self.fees.bps(category),
                MAX_FEE_BPS
            )));
        }
        if self.fees.total_bps() == 0 {
            return Err(ConfigError::Invalid(
                "fee schedule must charge at least one bps".to_string(),
            ));
        }
        Ok(())
    }

    /// Depth parser parameters
    pub fn depth_params(&self) -> DepthParams {
        DepthParams {
            max_levels: self.max_depth_levels,
            small_impact_size: self.small_impact_size,
            large_impact_size: self.large_impact_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AnalyticsConfig::load_default().unwrap();
        assert_eq!(config, AnalyticsConfig::default());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AnalyticsConfig::from_json("{}").unwrap();
        assert_eq!(config.ewma_alpha, 0.3);
        assert_eq!(config.max_depth_levels, 50);
        assert_eq!(config.fees, FeeSchedule::new(25, 15, 10));
    }

    #[test]
    fn test_partial_override() {
        let config =
            AnalyticsConfig::from_json(r#"{"ewmaAlpha": 0.5, "maxDepthLevels": 20}"#).unwrap();
        assert_eq!(config.ewma_alpha, 0.5);
        assert_eq!(config.depth_params().max_levels, 20);
        assert_eq!(config.invariant_tolerance_bps, 10.0);
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let err = AnalyticsConfig::from_json(r#"{"ewmaAlpha": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(AnalyticsConfig::from_json(r#"{"ewmaAlpha": 1.5}"#).is_err());
    }

    #[test]
    fn test_zero_fee_schedule_rejected() {
        let json = r#"{"fees": {"protocolBps": 0, "lpBps": 0, "insuranceBps": 0}}"#;
        assert!(matches!(
            AnalyticsConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_oversized_fee_rate_rejected() {
        let json = r#"{"fees": {"protocolBps": 4294967295, "lpBps": 1, "insuranceBps": 0}}"#;
        let err = AnalyticsConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("Protocol")));

        let json = r#"{"fees": {"protocolBps": 0, "lpBps": 10001, "insuranceBps": 0}}"#;
        assert!(AnalyticsConfig::from_json(json).is_err());

        let json = r#"{"fees": {"protocolBps": 10000, "lpBps": 0, "insuranceBps": 0}}"#;
        assert!(AnalyticsConfig::from_json(json).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AnalyticsConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            AnalyticsConfig::from_file("/nonexistent/prism.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
