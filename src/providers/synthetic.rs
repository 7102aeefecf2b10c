//! Synthetic historical series generation (degraded mode)
//!
//! When the live rate source cannot be reached the chart still needs a
//! series; this provider fabricates one around a reference anchor rate.
//! The shape (point count and timestamps) is fully determined by the window
//! and `as_of` — randomness affects rate values only. Output is tagged
//! [`DataOrigin::Synthetic`] and must be surfaced as non-authoritative.

use super::SeriesProvider;
use crate::currency::CurrencyPair;
use crate::error::Result;
use crate::rates::{ChartWindow, DataOrigin, HistoricalSeries, RatePoint};
use crate::reference;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Full width of the random excursion per point; each point moves at most
/// half of this either way
const VOLATILITY: f64 = 0.05;

/// Amplitude of the slow sinusoidal drift across the window
const TREND_AMPLITUDE: f64 = 0.03;

/// Degraded-mode series generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }

    /// Anchor rate the generated series oscillates around
    pub fn anchor(pair: CurrencyPair) -> f64 {
        reference::anchor_rate(pair)
    }
}

impl SeriesProvider for SyntheticProvider {
    fn series(
        &self,
        pair: CurrencyPair,
        window: ChartWindow,
        as_of: DateTime<Utc>,
    ) -> Result<HistoricalSeries> {
        let anchor = reference::anchor_rate(pair);
        let step = window.step();
        let count = window.point_count();
        let span_steps = (count - 1) as f64;

        let mut rng = rand::rng();
        let mut points = Vec::with_capacity(count);

        // Oldest first: k steps back counts down to zero, so the most
        // recent point lands exactly on `as_of`.
        for k in (0..count).rev() {
            let timestamp = as_of - step * k as i32;
            let noise = rng.random_range(-0.5..0.5) * VOLATILITY;
            let trend = (k as f64 / (span_steps / 3.0)).sin() * TREND_AMPLITUDE;
            let rate = round4(anchor * (1.0 + noise + trend));
            points.push(RatePoint::new(timestamp, rate));
        }

        HistoricalSeries::new(points, DataOrigin::Synthetic)
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Synthetic
    }
}

/// Round to 4 decimal places, matching the precision rates are displayed at
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use chrono::{Duration, TimeZone};

    fn fixed_as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_month_shape() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::USD, Currency::INR);
        let series = provider
            .series(pair, ChartWindow::OneMonth, fixed_as_of())
            .unwrap();

        // 30 one-day steps, endpoints inclusive
        assert_eq!(series.len(), 31);
        assert_eq!(series.last().timestamp, fixed_as_of());
        assert_eq!(
            series.first().timestamp,
            fixed_as_of() - Duration::days(30)
        );
        assert!(series.origin().is_synthetic());
    }

    #[test]
    fn test_strictly_ascending() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
        let series = provider
            .series(pair, ChartWindow::OneYear, fixed_as_of())
            .unwrap();

        for window in series.points().windows(2) {
            assert!(window[1].timestamp > window[0].timestamp);
        }
    }

    #[test]
    fn test_rates_bounded_around_anchor() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::USD, Currency::INR);
        let anchor = SyntheticProvider::anchor(pair);
        let series = provider
            .series(pair, ChartWindow::OneMonth, fixed_as_of())
            .unwrap();

        // noise tops out at 2.5% and trend at 3%, comfortably inside 8%
        for point in series.points() {
            assert!(point.rate >= anchor * 0.92, "rate {} too low", point.rate);
            assert!(point.rate <= anchor * 1.08, "rate {} too high", point.rate);
        }
    }

    #[test]
    fn test_rates_rounded_to_four_decimals() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::USD, Currency::INR);
        let series = provider
            .series(pair, ChartWindow::OneMonth, fixed_as_of())
            .unwrap();

        for point in series.points() {
            let scaled = point.rate * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shape_deterministic_values_random() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::GBP, Currency::USD);
        let as_of = fixed_as_of();

        let a = provider.series(pair, ChartWindow::ThreeMonths, as_of).unwrap();
        let b = provider.series(pair, ChartWindow::ThreeMonths, as_of).unwrap();

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_eq!(pa.timestamp, pb.timestamp);
        }
    }

    #[test]
    fn test_one_day_window_samples_hourly() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
        let series = provider
            .series(pair, ChartWindow::OneDay, fixed_as_of())
            .unwrap();

        assert_eq!(series.len(), 25);
        let gap = series.points()[1].timestamp - series.points()[0].timestamp;
        assert_eq!(gap, Duration::hours(1));
    }

    #[test]
    fn test_unknown_pair_anchors_at_one() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::KRW, Currency::BRL);
        let series = provider
            .series(pair, ChartWindow::OneMonth, fixed_as_of())
            .unwrap();

        for point in series.points() {
            assert!(point.rate > 0.9 && point.rate < 1.1);
        }
    }

    #[test]
    fn test_all_windows_produce_expected_counts() {
        let provider = SyntheticProvider::new();
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD);

        for window in ChartWindow::all() {
            let series = provider.series(pair, window, fixed_as_of()).unwrap();
            assert_eq!(series.len(), window.point_count(), "window {}", window);
            assert_eq!(series.last().timestamp, fixed_as_of());
        }
    }
}
