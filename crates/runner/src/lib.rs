//! Prism Runner - batch analytics over JSON requests
//!
//! Reads one `AnalyticsRequest`, runs every section present through an
//! `AnalyticsEngine` and collects the outcomes into an `AnalyticsReport`.
//! A failing section is reported in place and does not stop the others.
//!
//! ```text
//! request.json ──► AnalyticsRequest ──► run() ──► AnalyticsReport ──► stdout
//!                                        │
//!                                 AnalyticsEngine
//!                                (AnalyticsConfig)
//! ```

pub mod report;
pub mod request;

use log::{info, warn};
use prism_analytics::AnalyticsEngine;
use prism_core::{AnalyticsResult, VenueComparison, VenueQuote};

pub use report::{AnalyticsReport, Section, SkippedVenue};
pub use request::{
    AnalyticsRequest, FeeRequest, InvariantRequest, QbRequest, SwapRequest, VenueRequest,
};

/// Run every section of `request`
pub fn run(engine: &AnalyticsEngine, request: &AnalyticsRequest) -> AnalyticsReport {
    let mut report = AnalyticsReport::default();

    if let Some(qb) = &request.qb {
        report.qb = Some(engine.solve_qb(&qb.band, qb.prev_q_value));
    }

    if let Some(history) = &request.history {
        report.history = Some(engine.aggregate_history(history));
    }

    if let Some(snapshot) = &request.depth {
        report.depth = Some(engine.parse_depth(snapshot).into());
    }

    if let Some(swap) = &request.swap {
        report.swap = Some(
            engine
                .simulate_swap(&swap.pool, swap.amount_in, swap.fee_percent)
                .into(),
        );
    }

    if let Some(venues) = &request.venues {
        let (ranking, skipped) = compare_venues(engine, venues);
        report.venues = Some(ranking.into());
        report.skipped_venues = skipped;
    }

    if let Some(invariant) = &request.invariant {
        report.invariant_holds = Some(engine.check_pool_invariant(&invariant.pool, invariant.k));
    }

    if let Some(errors) = &request.errors {
        report.histogram = Some(engine.error_histogram(errors).into());
    }

    if let Some(fees) = &request.fees {
        report.fees = Some(engine.distribute_fees(fees.total_volume).into());
    }

    info!("Batch run complete: {} section(s) failed", report.error_count());
    report
}

/// Quote every venue and rank the ones that produced a quote.
///
/// Venues whose swap fails are returned alongside the ranking.
fn compare_venues(
    engine: &AnalyticsEngine,
    venues: &[VenueRequest],
) -> (AnalyticsResult<Vec<VenueComparison>>, Vec<SkippedVenue>) {
    let mut quotes = Vec::with_capacity(venues.len());
    let mut skipped = Vec::new();

    for v in venues {
        match engine.simulate_swap(&v.swap.pool, v.swap.amount_in, v.swap.fee_percent) {
            Ok(result) => quotes.push(VenueQuote::new(v.venue.clone(), result)),
            Err(e) => {
                warn!("Skipping venue {}: {}", v.venue, e);
                skipped.push(SkippedVenue {
                    venue: v.venue.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    (engine.compare_venues(quotes), skipped)
}
