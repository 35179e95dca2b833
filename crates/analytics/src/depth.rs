//! Level-2 depth parsing
//!
//! Turns a raw bid/ask snapshot into cumulative walls and the headline
//! figures shown on the depth panel: mid, spread, per-side VWAP, liquidity
//! and two fixed-size impact estimates.
//!
//! Both impact figures are measured against the **bid** walls only, i.e.
//! they describe the cost of selling into the book. Buy-side impact is not
//! part of this summary.

use prism_core::{
    AnalyticsError, AnalyticsResult, L2ParsedData, OrderBookSnapshot, PriceLevel, Wall, to_bps,
};
use serde::{Deserialize, Serialize};

use crate::impact::impact_bps;

/// Levels kept per side; deeper levels are ignored
pub const MAX_DEPTH_LEVELS: usize = 50;

/// Size of the small impact probe
pub const SMALL_IMPACT_SIZE: f64 = 10_000.0;

/// Size of the large impact probe
pub const LARGE_IMPACT_SIZE: f64 = 100_000.0;

/// Parser parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthParams {
    pub max_levels: usize,
    pub small_impact_size: f64,
    pub large_impact_size: f64,
}

impl Default for DepthParams {
    fn default() -> Self {
        Self {
            max_levels: MAX_DEPTH_LEVELS,
            small_impact_size: SMALL_IMPACT_SIZE,
            large_impact_size: LARGE_IMPACT_SIZE,
        }
    }
}

/// Build walls for the first `max_levels` levels of one side.
///
/// Levels are taken in the order given; `cum_qty` runs from the first level.
pub fn build_walls(levels: &[PriceLevel], max_levels: usize) -> Vec<Wall> {
    levels
        .iter()
        .take(max_levels)
        .scan(0.0, |cum_qty, level| {
            *cum_qty += level.quantity;
            Some(Wall::new(level.price, level.quantity, *cum_qty))
        })
        .collect()
}

/// Total quantity on a side (the last wall's running sum)
pub fn side_quantity(walls: &[Wall]) -> f64 {
    walls.last().map(|w| w.cum_qty).unwrap_or(0.0)
}

/// Volume-weighted average price of a side
pub fn vwap(walls: &[Wall]) -> Option<f64> {
    let total_qty = side_quantity(walls);
    if total_qty == 0.0 {
        return None;
    }
    let notional: f64 = walls.iter().map(|w| w.price * w.quantity).sum();
    Some(notional / total_qty)
}

/// Parse a snapshot with the default parameters
pub fn parse(snapshot: &OrderBookSnapshot) -> AnalyticsResult<L2ParsedData> {
    parse_with(snapshot, &DepthParams::default())
}

/// Parse a snapshot.
///
/// Fails with `DegenerateInput` when the mid price is zero (empty book) or
/// when either side carries no quantity, since spread and VWAP have no
/// value in those cases.
pub fn parse_with(
    snapshot: &OrderBookSnapshot,
    params: &DepthParams,
) -> AnalyticsResult<L2ParsedData> {
    if snapshot.bids.len() > params.max_levels || snapshot.asks.len() > params.max_levels {
        log::debug!(
            "Truncating depth to {} levels (bids={}, asks={})",
            params.max_levels,
            snapshot.bids.len(),
            snapshot.asks.len()
        );
    }

    let bid_walls = build_walls(&snapshot.bids, params.max_levels);
    let ask_walls = build_walls(&snapshot.asks, params.max_levels);

    let best_bid = bid_walls.first().map(|w| w.price).unwrap_or(0.0);
    let best_ask = ask_walls.first().map(|w| w.price).unwrap_or(0.0);
    let mid_price = (best_bid + best_ask) / 2.0;

    if mid_price == 0.0 {
        return Err(AnalyticsError::degenerate(
            "mid price is zero (empty order book)",
        ));
    }

    let bid_vwap = vwap(&bid_walls)
        .ok_or_else(|| AnalyticsError::degenerate("bid side has no quantity"))?;
    let ask_vwap = vwap(&ask_walls)
        .ok_or_else(|| AnalyticsError::degenerate("ask side has no quantity"))?;

    let spread_bps = to_bps((best_ask - best_bid) / mid_price);
    let impact_10k = impact_bps(&bid_walls, params.small_impact_size, mid_price);
    let impact_100k = impact_bps(&bid_walls, params.large_impact_size, mid_price);
    let liquidity = side_quantity(&bid_walls) + side_quantity(&ask_walls);

    Ok(L2ParsedData {
        bid_walls,
        ask_walls,
        mid_price,
        spread_bps,
        bid_vwap,
        ask_vwap,
        impact_10k,
        impact_100k,
        liquidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Utc;

    fn snapshot() -> OrderBookSnapshot {
        OrderBookSnapshot::from_levels(
            [(100.0, 5.0), (99.0, 10.0), (98.0, 20.0)],
            [(101.0, 4.0), (102.0, 8.0)],
            Utc::now(),
        )
    }

    #[test]
    fn test_walls_accumulate() {
        let parsed = parse(&snapshot()).unwrap();
        let cum: Vec<f64> = parsed.bid_walls.iter().map(|w| w.cum_qty).collect();
        assert_eq!(cum, vec![5.0, 15.0, 35.0]);
        let cum: Vec<f64> = parsed.ask_walls.iter().map(|w| w.cum_qty).collect();
        assert_eq!(cum, vec![4.0, 12.0]);
    }

    #[test]
    fn test_headline_figures() {
        let parsed = parse(&snapshot()).unwrap();
        assert_eq!(parsed.best_bid(), Some(100.0));
        assert_eq!(parsed.best_ask(), Some(101.0));
        assert_eq!(parsed.mid_price, 100.5);
        assert_relative_eq!(parsed.spread_bps, 1.0 / 100.5 * 10_000.0, epsilon = 1e-9);
        assert_relative_eq!(parsed.bid_vwap, 3450.0 / 35.0, epsilon = 1e-9);
        assert_relative_eq!(parsed.ask_vwap, 1220.0 / 12.0, epsilon = 1e-9);
        assert_eq!(parsed.liquidity, 47.0);
    }

    #[test]
    fn test_impact_uses_bid_side() {
        let parsed = parse(&snapshot()).unwrap();
        // Both probes exceed the 35 units of bid depth and under-fill
        let expected = (3450.0 / 35.0 - 100.5) / 100.5 * 10_000.0;
        assert_relative_eq!(parsed.impact_10k, expected, epsilon = 1e-9);
        assert_eq!(parsed.impact_10k, parsed.impact_100k);
        assert!(parsed.impact_10k < 0.0);
    }

    #[test]
    fn test_truncates_to_top_levels() {
        let bids: Vec<(f64, f64)> = (0..60).map(|i| (1000.0 - i as f64, 1.0)).collect();
        let asks: Vec<(f64, f64)> = (0..75).map(|i| (1001.0 + i as f64, 2.0)).collect();
        let parsed = parse(&OrderBookSnapshot::from_levels(bids, asks, Utc::now())).unwrap();

        assert_eq!(parsed.bid_walls.len(), MAX_DEPTH_LEVELS);
        assert_eq!(parsed.ask_walls.len(), MAX_DEPTH_LEVELS);
        assert_eq!(parsed.liquidity, 50.0 + 100.0);
    }

    #[test]
    fn test_custom_level_cap() {
        let params = DepthParams {
            max_levels: 1,
            ..Default::default()
        };
        let parsed = parse_with(&snapshot(), &params).unwrap();
        assert_eq!(parsed.bid_walls.len(), 1);
        assert_eq!(parsed.liquidity, 9.0);
    }

    #[test]
    fn test_empty_book_is_degenerate() {
        let empty = OrderBookSnapshot::new(vec![], vec![], Utc::now());
        assert!(matches!(
            parse(&empty),
            Err(AnalyticsError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_one_sided_book_is_degenerate() {
        let no_asks: Vec<(f64, f64)> = Vec::new();
        let bids_only = OrderBookSnapshot::from_levels([(100.0, 1.0)], no_asks, Utc::now());
        let err = parse(&bids_only).unwrap_err();
        assert_eq!(err, AnalyticsError::degenerate("ask side has no quantity"));
    }

    #[test]
    fn test_zero_quantity_side_is_degenerate() {
        let book = OrderBookSnapshot::from_levels([(100.0, 0.0)], [(101.0, 3.0)], Utc::now());
        assert!(parse(&book).is_err());
    }

    #[test]
    fn test_ordering_is_not_corrected() {
        // Caller contract: bids descending. Reversed input is taken as-is.
        let book =
            OrderBookSnapshot::from_levels([(98.0, 1.0), (100.0, 1.0)], [(101.0, 1.0)], Utc::now());
        let parsed = parse(&book).unwrap();
        assert_eq!(parsed.best_bid(), Some(98.0));
    }
}
