//! Constant-product AMM swap simulation
//!
//! Quotes a swap against an x * y = k pool (Uniswap V2 style):
//!
//! ```text
//! fee            = amount_in * fee_percent / 100
//! new_reserve_in = reserve_in + (amount_in - fee)
//! amount_out     = reserve_out - k / new_reserve_in
//! ```
//!
//! The fee is taken out before the curve and is not added back to the
//! reserves, so the post-trade pool keeps the same k.

use prism_core::{
    AmmImpactResult, AmmPool, AnalyticsError, AnalyticsResult, VenueComparison, VenueQuote,
    from_bps,
};

/// Default tolerance for `check_invariant`, in bps
pub const DEFAULT_INVARIANT_TOLERANCE_BPS: f64 = 10.0;

/// Quote a swap of `amount_in` with a `fee_percent` (0.3 = 0.3%) fee
pub fn simulate(
    pool: &AmmPool,
    amount_in: f64,
    fee_percent: f64,
) -> AnalyticsResult<AmmImpactResult> {
    simulate_with_state(pool, amount_in, fee_percent).map(|(result, _)| result)
}

/// Quote a swap and also return the pool as it would be after the trade
pub fn simulate_with_state(
    pool: &AmmPool,
    amount_in: f64,
    fee_percent: f64,
) -> AnalyticsResult<(AmmImpactResult, AmmPool)> {
    if !pool.has_liquidity() || !pool.constant_product().is_finite() {
        return Err(AnalyticsError::degenerate(format!(
            "pool needs positive reserves (in={}, out={})",
            pool.reserve_in, pool.reserve_out
        )));
    }
    if !(amount_in.is_finite() && amount_in > 0.0) {
        return Err(AnalyticsError::degenerate(format!(
            "swap amount must be positive, got {}",
            amount_in
        )));
    }
    if !(0.0..100.0).contains(&fee_percent) {
        return Err(AnalyticsError::invalid(format!(
            "fee percent must be in [0, 100), got {}",
            fee_percent
        )));
    }

    let fee_amount = amount_in * fee_percent / 100.0;
    let amount_in_after_fee = amount_in - fee_amount;

    let k = pool.constant_product();
    let new_reserve_in = pool.reserve_in + amount_in_after_fee;
    let new_reserve_out = k / new_reserve_in;
    let amount_out = pool.reserve_out - new_reserve_out;

    if amount_out <= 0.0 {
        return Err(AnalyticsError::degenerate(format!(
            "swap of {} produces no output",
            amount_in
        )));
    }

    let execution_price = amount_in / amount_out;
    // out per in, while execution price is in per out; the two only share
    // units for a balanced pool
    let spot_price = pool
        .spot_price()
        .ok_or_else(|| AnalyticsError::degenerate("pool has no spot price"))?;
    let price_impact = (execution_price / spot_price - 1.0) * 100.0;
    let slippage = (execution_price - spot_price) / spot_price * 100.0;

    let result = AmmImpactResult {
        amount_out,
        execution_price,
        price_impact_bps: price_impact * 100.0,
        fee_amount,
        slippage,
    };

    Ok((result, AmmPool::new(new_reserve_in, new_reserve_out)))
}

/// Whether `reserve_in * reserve_out` is within `tolerance_bps` of `k`.
///
/// A non-positive or non-finite `k` never satisfies the invariant.
pub fn check_invariant(reserve_in: f64, reserve_out: f64, k: f64, tolerance_bps: f64) -> bool {
    if !(k.is_finite() && k > 0.0) {
        log::debug!("invariant check against unusable k={}", k);
        return false;
    }
    let drift = (reserve_in * reserve_out - k).abs() / k;
    let holds = drift <= from_bps(tolerance_bps);
    if !holds {
        log::debug!(
            "constant product drift {:.6} exceeds {} bps (k={}, reserves={}x{})",
            drift,
            tolerance_bps,
            k,
            reserve_in,
            reserve_out
        );
    }
    holds
}

/// Rank venue quotes by price impact, lowest first.
///
/// The first entry is flagged `best_price`; ties keep their input order.
pub fn compare_venues(mut quotes: Vec<VenueQuote>) -> AnalyticsResult<Vec<VenueComparison>> {
    if quotes.is_empty() {
        return Err(AnalyticsError::EmptyVenueSet);
    }

    quotes.sort_by(|a, b| {
        a.result
            .price_impact_bps
            .total_cmp(&b.result.price_impact_bps)
    });

    Ok(quotes
        .into_iter()
        .enumerate()
        .map(|(rank, quote)| VenueComparison {
            venue: quote.venue,
            result: quote.result,
            best_price: rank == 0,
        })
        .collect())
}
