//! Config-driven entry point
//!
//! `AnalyticsEngine` binds the components to one `AnalyticsConfig`. It keeps
//! no series state: previous Q(B) values and history buffers are always
//! passed in by the caller, so one engine can be shared freely across
//! threads.

use log::{debug, warn};
use prism_core::{
    AggregationPoint, AmmImpactResult, AmmPool, AnalyticsResult, CalibrationBand,
    ErrorHistogramBucket, FeeDistribution, L2ParsedData, OrderBookSnapshot, QbResult,
    VenueComparison, VenueQuote,
};
use rust_decimal::Decimal;

use crate::config::{AnalyticsConfig, ConfigError};
use crate::{amm, depth, fees, histogram, qb};

/// Analytics components bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Create an engine, validating the configuration first
    pub fn new(config: AnalyticsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Solve Q(B) for a band given the caller's previous smoothed value
    pub fn solve_qb(&self, band: &CalibrationBand, prev: Option<f64>) -> QbResult {
        let result = qb::solve_with_threshold(
            band,
            prev,
            self.config.ewma_alpha,
            self.config.validity_threshold_bps,
        );
        if result.valid {
            debug!(
                "Q(B) solved: q={:.6}, smoothed={:.6}, error={:.4}bps",
                result.q_value, result.q_value_smoothed, result.error
            );
        } else {
            warn!("Q(B) invalid for band {:?}: {}", band, result.message);
        }
        result
    }

    /// Smooth a chronological Q(B) history
    pub fn aggregate_history(&self, history: &[AggregationPoint]) -> Vec<AggregationPoint> {
        qb::aggregate_history(history, self.config.ewma_alpha)
    }

    /// Parse an order-book snapshot
    pub fn parse_depth(&self, snapshot: &OrderBookSnapshot) -> AnalyticsResult<L2ParsedData> {
        let parsed = depth::parse_with(snapshot, &self.config.depth_params());
        match &parsed {
            Ok(data) => debug!(
                "Depth parsed: mid={}, spread={:.2}bps, liquidity={}",
                data.mid_price, data.spread_bps, data.liquidity
            ),
            Err(e) => warn!("Depth snapshot at {} rejected: {}", snapshot.timestamp, e),
        }
        parsed
    }

    /// Quote a swap against a constant-product pool
    pub fn simulate_swap(
        &self,
        pool: &AmmPool,
        amount_in: f64,
        fee_percent: f64,
    ) -> AnalyticsResult<AmmImpactResult> {
        amm::simulate(pool, amount_in, fee_percent)
    }

    /// Check reserves against `k` with the configured tolerance
    pub fn check_pool_invariant(&self, pool: &AmmPool, k: f64) -> bool {
        let holds = amm::check_invariant(
            pool.reserve_in,
            pool.reserve_out,
            k,
            self.config.invariant_tolerance_bps,
        );
        if !holds {
            warn!(
                "Pool invariant violated: reserves={}x{}, k={}, tolerance={}bps",
                pool.reserve_in, pool.reserve_out, k, self.config.invariant_tolerance_bps
            );
        }
        holds
    }

    /// Rank venue quotes by price impact
    pub fn compare_venues(&self, quotes: Vec<VenueQuote>) -> AnalyticsResult<Vec<VenueComparison>> {
        amm::compare_venues(quotes)
    }

    /// Bucket prediction errors with the configured width
    pub fn error_histogram(&self, errors: &[f64]) -> AnalyticsResult<Vec<ErrorHistogramBucket>> {
        histogram::build(errors, self.config.histogram_bucket_bps)
    }

    /// Split the fees on a volume figure with the configured schedule
    pub fn distribute_fees(&self, total_volume: Decimal) -> AnalyticsResult<FeeDistribution> {
        fees::distribute(total_volume, &self.config.fees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = AnalyticsConfig {
            ewma_alpha: 2.0,
            ..Default::default()
        };
        assert!(AnalyticsEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_uses_configured_alpha() {
        let engine = AnalyticsEngine::new(AnalyticsConfig {
            ewma_alpha: 1.0,
            ..Default::default()
        })
        .unwrap();
        // alpha = 1 ignores history entirely
        let result = engine.solve_qb(&CalibrationBand::new(100.0, 1000.0, 550.0), Some(0.0));
        assert_eq!(result.q_value, result.q_value_smoothed);
        assert!(result.valid);
    }

    #[test]
    fn test_engine_uses_configured_tolerance() {
        let strict = AnalyticsEngine::new(AnalyticsConfig {
            invariant_tolerance_bps: 0.0,
            ..Default::default()
        })
        .unwrap();
        let pool = AmmPool::new(1_000.0, 1_000.0);
        assert!(strict.check_pool_invariant(&pool, 1_000_000.0));
        assert!(!strict.check_pool_invariant(&AmmPool::new(1_000.1, 1_000.0), 1_000_000.0));
    }
}
