//! Prism Analytics
//!
//! Pure market-microstructure analytics behind the trading dashboard:
//! - **Q(B) calibration**: logarithmic band score with EWMA smoothing
//! - **L2 depth**: cumulative walls, mid, spread, VWAP, trade impact
//! - **AMM impact**: constant-product swap quotes, invariant checks, venue ranking
//! - **Error histogram**: fixed-width buckets over absolute prediction error
//! - **Fee distribution**: protocol / LP / insurance split by bps
//!
//! ## Architecture
//!
//! ```text
//! OrderBookSnapshot ──► depth::parse ──► impact::impact_bps
//!                              │
//!                              ▼
//!                        L2ParsedData
//!
//! CalibrationBand + prev ──► qb::solve ──► QbResult
//! [AggregationPoint] ──► qb::aggregate_history ──► [AggregationPoint]
//! AmmPool ──► amm::simulate ──► AmmImpactResult ──► amm::compare_venues
//! ```
//!
//! Every function is stateless; state that spans calls (previous Q value,
//! history) is owned and passed in by the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prism_analytics::{AnalyticsEngine, AnalyticsConfig};
//!
//! let engine = AnalyticsEngine::new(AnalyticsConfig::load_default()?)?;
//! let first = engine.solve_qb(&band, None);
//! let next = engine.solve_qb(&band, Some(first.q_value_smoothed));
//! ```

pub mod amm;
pub mod config;
pub mod depth;
pub mod engine;
pub mod fees;
pub mod histogram;
pub mod impact;
pub mod qb;

// Re-export main types
pub use amm::{DEFAULT_INVARIANT_TOLERANCE_BPS, check_invariant, compare_venues, simulate};
pub use config::{AnalyticsConfig, ConfigError};
pub use depth::{DepthParams, MAX_DEPTH_LEVELS, parse as parse_depth};
pub use engine::AnalyticsEngine;
pub use fees::{distribute, distribute_default};
pub use histogram::build as build_histogram;
pub use impact::{BookFill, impact_bps, walk_book};
pub use qb::{DEFAULT_EWMA_ALPHA, VALIDITY_THRESHOLD_BPS, aggregate_history, solve};
