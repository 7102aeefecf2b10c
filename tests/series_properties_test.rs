//! Property tests for conversion and series synthesis

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rate_engine::currency::{Currency, CurrencyPair};
use rate_engine::providers::{SeriesProvider, SyntheticProvider};
use rate_engine::rates::ChartWindow;
use rate_engine::reference::reference_table;

fn currency_strategy() -> impl Strategy<Value = Currency> {
    (0..Currency::all().len()).prop_map(|i| Currency::all()[i])
}

proptest! {
    #[test]
    fn prop_round_trip_conversion(
        amount in 0.01f64..1_000_000.0,
        from in currency_strategy(),
        to in currency_strategy(),
    ) {
        let table = reference_table();
        let there = table.convert(amount, from, to);
        let back = table.convert(there, to, from);
        prop_assert!((back - amount).abs() <= amount * 1e-9);
    }

    #[test]
    fn prop_zero_amount_always_zero(
        from in currency_strategy(),
        to in currency_strategy(),
    ) {
        let table = reference_table();
        prop_assert_eq!(table.convert(0.0, from, to), 0.0);
    }

    #[test]
    fn prop_same_currency_identity(
        amount in 0.0f64..1_000_000.0,
        currency in currency_strategy(),
    ) {
        let table = reference_table();
        let converted = table.convert(amount, currency, currency);
        prop_assert!((converted - amount).abs() < 1e-9);
    }

    #[test]
    fn prop_conversion_scales_linearly(
        amount in 0.01f64..10_000.0,
        from in currency_strategy(),
        to in currency_strategy(),
    ) {
        let table = reference_table();
        let single = table.convert(amount, from, to);
        let double = table.convert(amount * 2.0, from, to);
        prop_assert!((double - single * 2.0).abs() <= single.abs() * 1e-9);
    }
}

#[test]
fn test_synthetic_shape_stable_across_calls() {
    let provider = SyntheticProvider::new();
    let pair = CurrencyPair::new(Currency::USD, Currency::INR);
    let as_of = Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap();

    for window in ChartWindow::all() {
        let a = provider.series(pair, window, as_of).unwrap();
        let b = provider.series(pair, window, as_of).unwrap();

        assert_eq!(a.len(), b.len(), "window {}", window);
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_eq!(pa.timestamp, pb.timestamp);
        }
    }
}

#[test]
fn test_synthetic_one_month_contract() {
    let provider = SyntheticProvider::new();
    let pair = CurrencyPair::new(Currency::USD, Currency::INR);
    let anchor = SyntheticProvider::anchor(pair);
    let as_of = Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap();

    let series = provider.series(pair, ChartWindow::OneMonth, as_of).unwrap();

    assert_eq!(series.len(), 31);
    let span = series.last().timestamp - series.first().timestamp;
    assert_eq!(span, chrono::Duration::days(30));

    for point in series.points() {
        assert!(point.rate >= anchor * 0.92 && point.rate <= anchor * 1.08);
        let scaled = point.rate * 10_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "not 4-decimal rounded");
    }
}

#[test]
fn test_reference_example_rates() {
    let table = reference_table();

    // Spot-check the documented end-to-end example against the full table
    let rupees = table.convert(10.0, Currency::USD, Currency::INR);
    assert_relative_eq!(rupees, 10.0 / 1.08 * 86.04, epsilon = 1e-9);
}
