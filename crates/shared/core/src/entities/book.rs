use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Timestamp};

/// Represents a single price level in the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub quantity: Quantity,
}

impl From<(Price, Quantity)> for PriceLevel {
    fn from((price, quantity): (Price, Quantity)) -> Self {
        PriceLevel { price, quantity }
    }
}

/// Level-2 snapshot as delivered by the market-data layer.
///
/// Bids are expected in descending price order and asks in ascending order.
/// Ordering is the caller's contract; it is never checked or corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub timestamp: Timestamp,
}

impl OrderBookSnapshot {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>, timestamp: Timestamp) -> Self {
        Self {
            bids,
            asks,
            timestamp,
        }
    }

    /// Build a snapshot from `(price, quantity)` tuples
    pub fn from_levels(
        bids: impl IntoIterator<Item = (Price, Quantity)>,
        asks: impl IntoIterator<Item = (Price, Quantity)>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            bids: bids.into_iter().map(PriceLevel::from).collect(),
            asks: asks.into_iter().map(PriceLevel::from).collect(),
            timestamp,
        }
    }
}

/// A price level annotated with the running quantity from the best price.
///
/// `cum_qty` is non-decreasing along a side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub price: Price,
    pub quantity: Quantity,
    pub cum_qty: Quantity,
}

impl Wall {
    pub fn new(price: Price, quantity: Quantity, cum_qty: Quantity) -> Self {
        Self {
            price,
            quantity,
            cum_qty,
        }
    }
}

/// Parsed depth figures for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ParsedData {
    pub bid_walls: Vec<Wall>,
    pub ask_walls: Vec<Wall>,
    pub mid_price: Price,
    pub spread_bps: f64,
    pub bid_vwap: Price,
    pub ask_vwap: Price,
    /// Sell-side impact of a 10k fill against the bids, in bps
    #[serde(rename = "impact10k")]
    pub impact_10k: f64,
    /// Sell-side impact of a 100k fill against the bids, in bps
    #[serde(rename = "impact100k")]
    pub impact_100k: f64,
    /// Total quantity across both (truncated) sides
    pub liquidity: Quantity,
}

impl L2ParsedData {
    pub fn best_bid(&self) -> Option<Price> {
        self.bid_walls.first().map(|w| w.price)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.ask_walls.first().map(|w| w.price)
    }
}
