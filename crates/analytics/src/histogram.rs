//! Prediction-error histogram
//!
//! Observations are bucketed by absolute value into fixed-width, half-open
//! ranges `[i * width, (i + 1) * width)` starting at zero. The bucket count
//! is `ceil(max|e| / width) + 1`, so the largest observation always has a
//! bucket and every observation lands in exactly one.

use prism_core::{AnalyticsError, AnalyticsResult, ErrorHistogramBucket};

/// Default bucket width in bps
pub const DEFAULT_BUCKET_SIZE_BPS: f64 = 0.5;

/// Upper bound on buckets produced by a single call
pub const MAX_BUCKETS: usize = 100_000;

/// Bucket signed errors by absolute value
pub fn build(errors: &[f64], bucket_size_bps: f64) -> AnalyticsResult<Vec<ErrorHistogramBucket>> {
    if errors.is_empty() {
        return Ok(Vec::new());
    }
    if !(bucket_size_bps.is_finite() && bucket_size_bps > 0.0) {
        return Err(AnalyticsError::invalid(format!(
            "bucket size must be positive, got {}",
            bucket_size_bps
        )));
    }
    if errors.iter().any(|e| !e.is_finite()) {
        return Err(AnalyticsError::degenerate("error series contains non-finite values"));
    }

    let max_error = errors.iter().map(|e| e.abs()).fold(0.0, f64::max);
    let span = (max_error / bucket_size_bps).ceil();
    if span >= MAX_BUCKETS as f64 {
        return Err(AnalyticsError::invalid(format!(
            "bucket size {} too small for max error {}",
            bucket_size_bps, max_error
        )));
    }
    let num_buckets = span as usize + 1;

    let mut counts = vec![0usize; num_buckets];
    for e in errors {
        let idx = ((e.abs() / bucket_size_bps).floor() as usize).min(num_buckets - 1);
        counts[idx] += 1;
    }

    let total = errors.len() as f64;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| ErrorHistogramBucket {
            range_start: i as f64 * bucket_size_bps,
            range_end: (i + 1) as f64 * bucket_size_bps,
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect())
}
