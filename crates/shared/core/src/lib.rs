//! Prism Core Domain
//!
//! Pure value types for the microstructure analytics: calibration bands,
//! order-book snapshots, AMM pools, error histograms and fee splits.
//! This crate contains no I/O and no logging, and holds no state across calls.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Time series
    AggregationPoint,
    // AMM types
    AmmImpactResult,
    AmmPool,
    // Calibration types
    CalibrationBand,
    ErrorHistogramBucket,
    // Fee types
    FeeBreakdown,
    FeeCategory,
    FeeDistribution,
    FeeSchedule,
    // Order book types
    L2ParsedData,
    MAX_FEE_BPS,
    OrderBookSnapshot,
    PriceLevel,
    QbResult,
    VenueComparison,
    VenueQuote,
    Wall,
};
pub use error::{AnalyticsError, AnalyticsResult};
pub use values::{BPS_PER_UNIT, Price, Quantity, Timestamp, from_bps, to_bps};
