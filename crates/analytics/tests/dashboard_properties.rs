//! End-to-end properties of the analytics as the dashboard consumes them
//!
//! Each test drives the public API the way the presentation layer does:
//! one call per refresh, with any carried state threaded through by hand.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::{Duration, TimeZone, Utc};
use prism_analytics::{AnalyticsConfig, AnalyticsEngine, amm, depth, fees, histogram, impact, qb};
use prism_core::{
    AggregationPoint, AmmPool, AnalyticsError, CalibrationBand, OrderBookSnapshot, VenueQuote,
};
use rust_decimal_macros::dec;

fn engine() -> AnalyticsEngine {
    let _ = env_logger::try_init();
    AnalyticsEngine::new(AnalyticsConfig::load_default().unwrap()).unwrap()
}

#[test]
fn test_qb_refresh_loop_settles() {
    let engine = engine();
    let band = CalibrationBand::new(100.0, 1000.0, 550.0);

    let first = engine.solve_qb(&band, None);
    assert!(first.valid);
    assert_relative_eq!(first.q_value, (900.0_f64 / 550.0 + 1.0).ln() * 10.0);

    // Operator widens the band: the first refresh after the change is flagged
    let wide = CalibrationBand::new(100.0, 2000.0, 550.0);
    let mut prev = Some(first.q_value_smoothed);
    let jump = engine.solve_qb(&wide, prev);
    assert!(!jump.valid);

    // ...and the smoothed value catches up on later refreshes
    let mut last = jump;
    for _ in 0..100 {
        prev = Some(last.q_value_smoothed);
        last = engine.solve_qb(&wide, prev);
    }
    assert!(last.valid);
    assert_abs_diff_eq!(last.q_value_smoothed, last.q_value, epsilon = 1e-9);
}

#[test]
fn test_history_matches_incremental_solves() {
    let engine = engine();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bands = [
        CalibrationBand::new(100.0, 1000.0, 550.0),
        CalibrationBand::new(100.0, 1200.0, 600.0),
        CalibrationBand::new(50.0, 900.0, 500.0),
    ];

    let history: Vec<AggregationPoint> = bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            AggregationPoint::new(
                start + Duration::minutes(i as i64),
                qb::raw_q(band),
                "pool-a",
            )
        })
        .collect();
    let smoothed = engine.aggregate_history(&history);

    // Batch smoothing equals threading prev through solve, seeded with the first raw value
    let mut prev = Some(history[0].q_value);
    for (band, point) in bands.iter().zip(&smoothed) {
        let result = engine.solve_qb(band, prev);
        assert_relative_eq!(result.q_value_smoothed, point.q_value_smoothed, epsilon = 1e-12);
        prev = Some(result.q_value_smoothed);
    }
}

#[test]
fn test_depth_panel_from_json_snapshot() {
    let engine = engine();
    let json = r#"{
        "bids": [{"price": 64000.0, "quantity": 1.5}, {"price": 63990.0, "quantity": 3.0}],
        "asks": [{"price": 64010.0, "quantity": 2.0}, {"price": 64020.0, "quantity": 4.0}],
        "timestamp": "2024-01-01T00:00:00Z"
    }"#;
    let snapshot: OrderBookSnapshot = serde_json::from_str(json).unwrap();
    let parsed = engine.parse_depth(&snapshot).unwrap();

    assert_eq!(parsed.mid_price, 64005.0);
    assert_relative_eq!(parsed.spread_bps, 10.0 / 64005.0 * 10_000.0, epsilon = 1e-9);
    assert_eq!(parsed.liquidity, 10.5);
    assert_eq!(
        parsed.impact_10k,
        impact::impact_bps(&parsed.bid_walls, 10_000.0, parsed.mid_price)
    );

    let out = serde_json::to_value(&parsed).unwrap();
    assert!(out.get("impact10k").is_some());
    assert!(out.get("impact100k").is_some());
    assert!(out["bidWalls"][1].get("cumQty").is_some());
}

#[test]
fn test_depth_guards_empty_book() {
    let empty = OrderBookSnapshot::new(vec![], vec![], Utc::now());
    assert!(matches!(
        depth::parse(&empty),
        Err(AnalyticsError::DegenerateInput(_))
    ));
}

#[test]
fn test_empty_walls_have_no_impact() {
    assert_eq!(impact::impact_bps(&[], 10_000.0, 100.0), 0.0);
}

#[test]
fn test_amm_round_trip() {
    let pool = AmmPool::new(1_000_000.0, 1_000_000.0);
    let k = pool.constant_product();

    let (quote, after) = amm::simulate_with_state(&pool, 10_000.0, 0.3).unwrap();
    assert!(quote.amount_out < 10_000.0);
    assert!(quote.price_impact_bps > 0.0);
    assert!(amm::check_invariant(
        after.reserve_in,
        after.reserve_out,
        k,
        amm::DEFAULT_INVARIANT_TOLERANCE_BPS
    ));

    assert!(amm::check_invariant(pool.reserve_in, pool.reserve_out, k, 10.0));
    assert!(!amm::check_invariant(pool.reserve_in * 1.01, pool.reserve_out, k, 10.0));
}

#[test]
fn test_best_venue_selection() {
    let engine = engine();
    let venues = [("uni", 5_000_000.0), ("sushi", 800_000.0), ("curve", 20_000_000.0)];
    let quotes: Vec<VenueQuote> = venues
        .iter()
        .map(|(name, reserves)| {
            let pool = AmmPool::new(*reserves, *reserves);
            VenueQuote::new(*name, engine.simulate_swap(&pool, 25_000.0, 0.3).unwrap())
        })
        .collect();

    let ranked = engine.compare_venues(quotes).unwrap();
    assert_eq!(ranked[0].venue, "curve");
    assert!(ranked[0].best_price);
    assert!(ranked[1..].iter().all(|c| !c.best_price));
    assert!(
        ranked
            .windows(2)
            .all(|w| w[0].result.price_impact_bps <= w[1].result.price_impact_bps)
    );

    assert_eq!(engine.compare_venues(vec![]), Err(AnalyticsError::EmptyVenueSet));
}

#[test]
fn test_histogram_partitions_errors() {
    assert!(histogram::build(&[], 0.5).unwrap().is_empty());

    let errors = [0.2, -0.7, 1.1, -1.1, 0.0, 2.4, -0.25];
    let buckets = engine().error_histogram(&errors).unwrap();
    let total: usize = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, errors.len());
    assert_eq!(buckets.first().unwrap().range_start, 0.0);
    assert!(buckets.last().unwrap().range_end > 2.4);
}

#[test]
fn test_fee_split() {
    let dist = engine().distribute_fees(dec!(100000)).unwrap();
    assert_eq!(dist.protocol_fee, dec!(250));
    assert_eq!(dist.lp_incentive, dec!(150));
    assert_eq!(dist.insurance_pool, dec!(100));
    assert_eq!(dist.total, dec!(500));

    let pct: rust_decimal::Decimal = dist.breakdown.iter().map(|b| b.percentage).sum();
    assert_eq!(pct, dec!(100));

    assert!(fees::distribute_default(dec!(0)).is_err());
}
