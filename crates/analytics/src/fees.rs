//! Fee distribution
//!
//! Splits the fees collected on a volume figure between the protocol
//! treasury, LP incentives and the insurance pool. Each share is charged
//! on the full volume at its own rate; the amounts are exact decimals.

use prism_core::{
    AnalyticsError, AnalyticsResult, FeeBreakdown, FeeCategory, FeeDistribution, FeeSchedule,
};
use rust_decimal::Decimal;

/// Distribute fees on `total_volume` using the default 25/15/10 bps schedule
pub fn distribute_default(total_volume: Decimal) -> AnalyticsResult<FeeDistribution> {
    distribute(total_volume, &FeeSchedule::default())
}

/// Distribute fees on a float volume figure
pub fn distribute_f64(
    total_volume: f64,
    schedule: &FeeSchedule,
) -> AnalyticsResult<FeeDistribution> {
    let volume = Decimal::try_from(total_volume).map_err(|e| {
        AnalyticsError::invalid(format!("volume {} not representable: {}", total_volume, e))
    })?;
    distribute(volume, schedule)
}

/// Distribute fees on `total_volume`.
///
/// Fails with `DegenerateInput` when the combined fee is zero, since the
/// breakdown percentages would have no denominator, or when an amount does
/// not fit in a `Decimal`.
pub fn distribute(
    total_volume: Decimal,
    schedule: &FeeSchedule,
) -> AnalyticsResult<FeeDistribution> {
    let overflow = || {
        AnalyticsError::degenerate(format!(
            "fees on volume {} overflow at {}bps",
            total_volume,
            schedule.total_bps()
        ))
    };
    let fee = |category: FeeCategory| {
        total_volume
            .checked_mul(schedule.rate(category))
            .ok_or_else(overflow)
    };

    let protocol_fee = fee(FeeCategory::Protocol)?;
    let lp_incentive = fee(FeeCategory::LpIncentive)?;
    let insurance_pool = fee(FeeCategory::Insurance)?;
    let total = protocol_fee
        .checked_add(lp_incentive)
        .and_then(|sum| sum.checked_add(insurance_pool))
        .ok_or_else(overflow)?;

    if total.is_zero() {
        return Err(AnalyticsError::degenerate(format!(
            "total fee is zero (volume={}, schedule={}bps)",
            total_volume,
            schedule.total_bps()
        )));
    }

    let breakdown = FeeCategory::ALL
        .iter()
        .zip([protocol_fee, lp_incentive, insurance_pool])
        .map(|(&category, amount)| FeeBreakdown {
            category,
            amount,
            percentage: amount / total * Decimal::ONE_HUNDRED,
        })
        .collect();

    Ok(FeeDistribution {
        protocol_fee,
        lp_incentive,
        insurance_pool,
        total,
        breakdown,
    })
}
