use serde::{Deserialize, Serialize};

/// Calibration band supplied per pool.
///
/// Sane when `min < max` and `0 < midpoint <= max`. The analytics never
/// mutate a band; it changes only through operator action upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationBand {
    pub min: f64,
    pub max: f64,
    pub midpoint: f64,
}

impl CalibrationBand {
    pub fn new(min: f64, max: f64, midpoint: f64) -> Self {
        Self { min, max, midpoint }
    }

    /// Band width (`max - min`)
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Outcome of a Q(B) solve.
///
/// `error` is the instantaneous-vs-smoothed deviation in basis points and is
/// `+inf` when the band itself was rejected. JSON has no infinity, so a
/// rejected result serializes `error` as `null`; read `valid` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QbResult {
    pub q_value: f64,
    pub q_value_smoothed: f64,
    pub error: f64,
    pub valid: bool,
    pub message: String,
}

impl QbResult {
    /// Result for a band that failed validation
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            q_value: 0.0,
            q_value_smoothed: 0.0,
            error: f64::INFINITY,
            valid: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_width() {
        let band = CalibrationBand::new(100.0, 1000.0, 550.0);
        assert_eq!(band.width(), 900.0);
    }

    #[test]
    fn test_rejected_result_shape() {
        let result = QbResult::rejected("min must be less than max");
        assert_eq!(result.q_value, 0.0);
        assert_eq!(result.q_value_smoothed, 0.0);
        assert!(result.error.is_infinite());
        assert!(!result.valid);
    }

    #[test]
    fn test_rejected_result_json_has_null_error() {
        let json = serde_json::to_value(QbResult::rejected("bad band")).unwrap();
        assert!(json["error"].is_null());
        assert_eq!(json["valid"], serde_json::Value::Bool(false));
        assert_eq!(json["qValue"], serde_json::json!(0.0));
    }

    #[test]
    fn test_band_json_shape() {
        let band: CalibrationBand =
            serde_json::from_str(r#"{"min": 1.0, "max": 2.0, "midpoint": 1.5}"#).unwrap();
        assert_eq!(band, CalibrationBand::new(1.0, 2.0, 1.5));
    }
}
