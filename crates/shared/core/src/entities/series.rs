use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// One sample of the Q(B) time series.
///
/// The series itself lives with the caller; the analytics only map one
/// sequence of points to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationPoint {
    pub timestamp: Timestamp,
    pub q_value: f64,
    #[serde(default)]
    pub q_value_smoothed: f64,
    #[serde(default)]
    pub source: String,
}

impl AggregationPoint {
    /// Raw sample, not yet smoothed
    pub fn new(timestamp: Timestamp, q_value: f64, source: impl Into<String>) -> Self {
        Self {
            timestamp,
            q_value,
            q_value_smoothed: q_value,
            source: source.into(),
        }
    }
}

/// Fixed-width bucket over absolute error, `[range_start, range_end)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHistogramBucket {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
    pub percentage: f64,
}

impl ErrorHistogramBucket {
    pub fn contains(&self, abs_error: f64) -> bool {
        abs_error >= self.range_start && abs_error < self.range_end
    }
}
