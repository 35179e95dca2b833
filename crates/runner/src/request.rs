//! Batch analytics request
//!
//! A request bundles the inputs for one dashboard refresh. Every section is
//! optional; only the sections present are computed.

use prism_core::{AggregationPoint, AmmPool, CalibrationBand, OrderBookSnapshot};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Q(B) solve for one pool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QbRequest {
    pub band: CalibrationBand,
    /// Previous smoothed value, omitted or null when there is no history
    #[serde(default)]
    pub prev_q_value: Option<f64>,
}

/// Swap quote against one pool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub pool: AmmPool,
    pub amount_in: f64,
    pub fee_percent: f64,
}

/// Swap quote on a named venue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRequest {
    pub venue: String,
    #[serde(flatten)]
    pub swap: SwapRequest,
}

/// Pool state to check against a reference k
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvariantRequest {
    pub pool: AmmPool,
    pub k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    pub total_volume: Decimal,
}

/// Inputs for one batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsRequest {
    pub qb: Option<QbRequest>,
    pub history: Option<Vec<AggregationPoint>>,
    pub depth: Option<OrderBookSnapshot>,
    pub swap: Option<SwapRequest>,
    pub venues: Option<Vec<VenueRequest>>,
    pub invariant: Option<InvariantRequest>,
    pub errors: Option<Vec<f64>>,
    pub fees: Option<FeeRequest>,
}

impl AnalyticsRequest {
    /// Parse a request from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
