//! Q(B) calibration score
//!
//! The score is a logarithmic measure of a band's width relative to its
//! midpoint:
//!
//! ```text
//! Q = ln((max - min) / midpoint + 1) * 10
//! ```
//!
//! Successive scores are smoothed with an EWMA. The previous smoothed value
//! is threaded through by the caller; nothing here remembers past calls.

use prism_core::{AggregationPoint, CalibrationBand, QbResult, to_bps};

/// Default EWMA weight on the newest observation
pub const DEFAULT_EWMA_ALPHA: f64 = 0.3;

/// Maximum instantaneous-vs-smoothed deviation (bps) for a valid result
pub const VALIDITY_THRESHOLD_BPS: f64 = 1.0;

/// Scale applied to the log term
const Q_SCALE: f64 = 10.0;

/// One EWMA step: `alpha * value + (1 - alpha) * prev`
#[inline]
pub fn ewma(value: f64, prev: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * prev
}

/// Raw (unsmoothed) score for a band. Assumes the band is sane.
#[inline]
pub fn raw_q(band: &CalibrationBand) -> f64 {
    (band.width() / band.midpoint + 1.0).ln() * Q_SCALE
}

/// Reason a band cannot be scored, if any
fn check_band(band: &CalibrationBand) -> Option<&'static str> {
    if band.min >= band.max {
        return Some("Invalid calibration band: min must be less than max");
    }
    if band.midpoint <= 0.0 || band.midpoint > band.max {
        return Some("Invalid calibration band: midpoint must be in (0, max]");
    }
    if !(band.min.is_finite() && band.max.is_finite() && band.midpoint.is_finite()) {
        return Some("Invalid calibration band: bounds must be finite");
    }
    None
}

/// Solve Q(B) with the default 1 bp validity threshold.
///
/// `prev` is the previous smoothed value; `None` means there is no history
/// and the raw score is taken as-is.
pub fn solve(band: &CalibrationBand, prev: Option<f64>, alpha: f64) -> QbResult {
    solve_with_threshold(band, prev, alpha, VALIDITY_THRESHOLD_BPS)
}

/// Solve Q(B) with an explicit validity threshold in bps
pub fn solve_with_threshold(
    band: &CalibrationBand,
    prev: Option<f64>,
    alpha: f64,
    threshold_bps: f64,
) -> QbResult {
    if let Some(reason) = check_band(band) {
        return QbResult::rejected(reason);
    }

    let q_value = raw_q(band);
    let q_value_smoothed = match prev {
        Some(prev) => ewma(q_value, prev, alpha),
        None => q_value,
    };

    let error = to_bps((q_value - q_value_smoothed).abs());
    let valid = error < threshold_bps;
    let message = if valid {
        "Q(B) consistent with smoothed value".to_string()
    } else {
        format!(
            "Q(B) deviates {:.4} bps from smoothed value (threshold {} bps)",
            error, threshold_bps
        )
    };

    QbResult {
        q_value,
        q_value_smoothed,
        error,
        valid,
        message,
    }
}

/// Smooth a chronological Q(B) series.
///
/// The recurrence is seeded with the first sample's raw value, so the first
/// output point carries `q_value_smoothed == q_value`. The input order is
/// trusted; points are never sorted.
pub fn aggregate_history(history: &[AggregationPoint], alpha: f64) -> Vec<AggregationPoint> {
    let Some(first) = history.first() else {
        return Vec::new();
    };

    history
        .iter()
        .scan(first.q_value, |prev, point| {
            let smoothed = ewma(point.q_value, *prev, alpha);
            *prev = smoothed;
            Some(AggregationPoint {
                q_value_smoothed: smoothed,
                ..point.clone()
            })
        })
        .collect()
}
