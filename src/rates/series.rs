//! Historical rate series
//!
//! A validated, ascending sequence of (timestamp, rate) points carrying its
//! provenance, plus the summary statistics the chart layer reads off it.

use crate::error::{RateEngineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single observation: the pair's rate at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub timestamp: DateTime<Utc>,
    pub rate: f64,
}

impl RatePoint {
    pub fn new(timestamp: DateTime<Utc>, rate: f64) -> Self {
        Self { timestamp, rate }
    }
}

/// Provenance of a series
///
/// Synthetic data is fabricated for charting while the live source is down
/// and must never be presented as authoritative; the tag travels with the
/// series so the presentation layer can show a degraded-mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrigin {
    Live,
    Synthetic,
}

impl DataOrigin {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, DataOrigin::Synthetic)
    }
}

/// Historical rate series, oldest point first
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalSeries {
    origin: DataOrigin,
    points: Vec<RatePoint>,
}

impl HistoricalSeries {
    /// Create a series, validating ordering and rate values
    ///
    /// Timestamps must be strictly ascending; rates must be finite and
    /// non-negative.
    pub fn new(points: Vec<RatePoint>, origin: DataOrigin) -> Result<Self> {
        if points.is_empty() {
            return Err(RateEngineError::InvalidSeries(
                "series must contain at least one point".to_string(),
            ));
        }

        for point in &points {
            if !point.rate.is_finite() || point.rate < 0.0 {
                return Err(RateEngineError::InvalidSeries(format!(
                    "rate at {} must be finite and non-negative, got {}",
                    point.timestamp, point.rate
                )));
            }
        }

        for window in points.windows(2) {
            if window[1].timestamp <= window[0].timestamp {
                return Err(RateEngineError::InvalidSeries(format!(
                    "timestamps must be strictly ascending: {} followed by {}",
                    window[0].timestamp, window[1].timestamp
                )));
            }
        }

        Ok(Self { origin, points })
    }

    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    /// Oldest point
    pub fn first(&self) -> &RatePoint {
        &self.points[0]
    }

    /// Most recent point
    pub fn last(&self) -> &RatePoint {
        &self.points[self.points.len() - 1]
    }

    /// Mean rate over the series
    pub fn average(&self) -> f64 {
        let sum: f64 = self.points.iter().map(|p| p.rate).sum();
        sum / self.points.len() as f64
    }

    /// Rate volatility (population standard deviation)
    pub fn volatility(&self) -> f64 {
        let mean = self.average();
        let variance: f64 = self
            .points
            .iter()
            .map(|p| (p.rate - mean).powi(2))
            .sum::<f64>()
            / self.points.len() as f64;
        variance.sqrt()
    }

    /// Percent change from the oldest to the most recent point
    pub fn change_percent(&self) -> f64 {
        let first = self.first().rate;
        if first == 0.0 {
            return 0.0;
        }
        (self.last().rate - first) / first * 100.0
    }

    pub fn min_rate(&self) -> f64 {
        self.points.iter().map(|p| p.rate).fold(f64::INFINITY, f64::min)
    }

    pub fn max_rate(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.rate)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
