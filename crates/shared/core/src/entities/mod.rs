mod band;
mod book;
mod fee;
mod pool;
mod series;

pub use band::{CalibrationBand, QbResult};
pub use book::{L2ParsedData, OrderBookSnapshot, PriceLevel, Wall};
pub use fee::{FeeBreakdown, FeeCategory, FeeDistribution, FeeSchedule, MAX_FEE_BPS};
pub use pool::{AmmImpactResult, AmmPool, VenueComparison, VenueQuote};
pub use series::{AggregationPoint, ErrorHistogramBucket};
