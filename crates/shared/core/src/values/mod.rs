use chrono::{DateTime, Utc};

/// Price value - plain float, the analytics formulas are defined over reals
pub type Price = f64;

/// Quantity value - plain float
pub type Quantity = f64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Basis points per unit (1 bp = 0.01%)
pub const BPS_PER_UNIT: f64 = 10_000.0;

/// Convert a fractional ratio to basis points
#[inline]
pub fn to_bps(ratio: f64) -> f64 {
    ratio * BPS_PER_UNIT
}

/// Convert basis points to a fractional ratio
#[inline]
pub fn from_bps(bps: f64) -> f64 {
    bps / BPS_PER_UNIT
}
