//! Constant-product pool state and swap quotes

use serde::{Deserialize, Serialize};

/// Reserves of a constant-product (x * y = k) pool, oriented for a swap
/// from the `in` token to the `out` token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmmPool {
    pub reserve_in: f64,
    pub reserve_out: f64,
}

impl AmmPool {
    pub fn new(reserve_in: f64, reserve_out: f64) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }

    /// Check if pool has liquidity on both sides
    pub fn has_liquidity(&self) -> bool {
        self.reserve_in > 0.0 && self.reserve_out > 0.0
    }

    /// Constant product (k = x * y)
    pub fn constant_product(&self) -> f64 {
        self.reserve_in * self.reserve_out
    }

    /// Spot price of the `in` token in `out` terms
    pub fn spot_price(&self) -> Option<f64> {
        if self.reserve_in == 0.0 {
            return None;
        }
        Some(self.reserve_out / self.reserve_in)
    }
}

/// Quote for a simulated swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmmImpactResult {
    pub amount_out: f64,
    /// Input paid per unit of output (`amount_in / amount_out`)
    pub execution_price: f64,
    pub price_impact_bps: f64,
    pub fee_amount: f64,
    /// Percent deviation of execution price from spot
    pub slippage: f64,
}

/// A swap quote tagged with the venue that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueQuote {
    pub venue: String,
    pub result: AmmImpactResult,
}

impl VenueQuote {
    pub fn new(venue: impl Into<String>, result: AmmImpactResult) -> Self {
        Self {
            venue: venue.into(),
            result,
        }
    }
}

/// Venue quote ranked against its peers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueComparison {
    pub venue: String,
    pub result: AmmImpactResult,
    pub best_price: bool,
}
