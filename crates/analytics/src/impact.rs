//! Trade impact from walking book depth
//!
//! A market order sweeps levels from the best price outward, taking
//! `min(remaining, level quantity)` at each level until the order is filled
//! or the book runs out. When the book is too thin the order under-fills and
//! impact is measured on whatever quantity was reachable.

use prism_core::{Wall, to_bps};
use serde::{Deserialize, Serialize};

/// Outcome of sweeping a side of the book
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFill {
    /// Quantity actually taken from the book
    pub filled_qty: f64,
    /// Sum of `price * qty` over the taken quantity
    pub notional: f64,
    /// Number of levels touched
    pub levels_consumed: usize,
    /// Whether the requested size was fully available
    pub complete: bool,
}

impl BookFill {
    /// Volume-weighted fill price, `None` if nothing filled
    pub fn avg_price(&self) -> Option<f64> {
        if self.filled_qty == 0.0 {
            return None;
        }
        Some(self.notional / self.filled_qty)
    }
}

/// Sweep `walls` (best price first) for `trade_size` units
pub fn walk_book(walls: &[Wall], trade_size: f64) -> BookFill {
    let mut remaining = trade_size;
    let mut fill = BookFill::default();

    for wall in walls {
        if remaining <= 0.0 {
            break;
        }
        let take = remaining.min(wall.quantity);
        fill.notional += wall.price * take;
        fill.filled_qty += take;
        fill.levels_consumed += 1;
        remaining -= take;
    }

    fill.complete = remaining <= 0.0;
    fill
}

/// Impact of a `trade_size` sweep relative to `mid_price`, in bps.
///
/// Negative when sweeping bids (fills below mid), positive when sweeping
/// asks. Returns 0 when nothing fills or when `mid_price` is not positive.
pub fn impact_bps(walls: &[Wall], trade_size: f64, mid_price: f64) -> f64 {
    if mid_price <= 0.0 || mid_price.is_nan() {
        log::warn!("impact requested against non-positive mid price {}", mid_price);
        return 0.0;
    }

    match walk_book(walls, trade_size).avg_price() {
        Some(avg_price) => to_bps((avg_price - mid_price) / mid_price),
        None => 0.0,
    }
}
