//! In-memory series provider
//!
//! Stores per-pair rate observations keyed by timestamp and serves chart
//! windows by slicing the stored range. Useful for tests and for replaying
//! rates already fetched from the live source through the same
//! [`SeriesProvider`] seam.

use super::SeriesProvider;
use crate::currency::{Currency, CurrencyPair};
use crate::error::{RateEngineError, Result};
use crate::rates::{ChartWindow, DataOrigin, HistoricalSeries, RatePoint};
use chrono::{DateTime, Utc};
use log::warn;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// In-memory rate observation store
///
/// Observations live in a BTreeMap per pair, so window queries are range
/// scans. A pair stored in one direction also serves the inverse direction
/// (rates are inverted point by point).
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    /// (base, quote) -> (timestamp -> rate)
    observations: Arc<RwLock<HashMap<(Currency, Currency), BTreeMap<DateTime<Utc>, f64>>>>,
    origin: DataOrigin,
}

impl InMemoryProvider {
    /// Create an empty provider serving live-tagged data
    pub fn new() -> Self {
        Self::with_origin(DataOrigin::Live)
    }

    /// Create an empty provider with an explicit origin tag
    pub fn with_origin(origin: DataOrigin) -> Self {
        Self {
            observations: Arc::new(RwLock::new(HashMap::new())),
            origin,
        }
    }

    /// Add a single observation
    pub fn add_point(
        &mut self,
        pair: CurrencyPair,
        dt: DateTime<Utc>,
        rate: f64,
    ) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateEngineError::InvalidSeries(format!(
                "observed rate must be positive and finite, got {}",
                rate
            )));
        }

        let mut observations = self.observations.write().unwrap();
        observations
            .entry((pair.base, pair.quote))
            .or_default()
            .insert(dt, rate);

        Ok(())
    }

    /// Add multiple observations efficiently (batch insert)
    pub fn add_points(
        &mut self,
        pair: CurrencyPair,
        entries: Vec<(DateTime<Utc>, f64)>,
    ) -> Result<()> {
        let mut observations = self.observations.write().unwrap();
        let tree = observations.entry((pair.base, pair.quote)).or_default();

        for (dt, rate) in entries {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateEngineError::InvalidSeries(format!(
                    "observed rate must be positive and finite, got {}",
                    rate
                )));
            }
            tree.insert(dt, rate);
        }

        Ok(())
    }

    /// Number of stored pairs
    pub fn num_pairs(&self) -> usize {
        self.observations.read().unwrap().len()
    }

    /// Total number of observations across all pairs
    pub fn num_points(&self) -> usize {
        let observations = self.observations.read().unwrap();
        observations.values().map(|tree| tree.len()).sum()
    }

    /// Clear all observations
    pub fn clear(&mut self) {
        self.observations.write().unwrap().clear();
    }

    /// Points within the window, trying the stored direction first and the
    /// inverse direction second
    fn window_points(
        &self,
        pair: CurrencyPair,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<Vec<RatePoint>> {
        let observations = self.observations.read().unwrap();

        if let Some(tree) = observations.get(&(pair.base, pair.quote)) {
            let points: Vec<RatePoint> = tree
                .range(start..=end)
                .map(|(dt, rate)| RatePoint::new(*dt, *rate))
                .collect();
            if !points.is_empty() {
                return Some(points);
            }
        }

        // Inverse direction serves just as well, inverted point by point
        if let Some(tree) = observations.get(&(pair.quote, pair.base)) {
            let points: Vec<RatePoint> = tree
                .range(start..=end)
                .map(|(dt, rate)| RatePoint::new(*dt, 1.0 / rate))
                .collect();
            if !points.is_empty() {
                return Some(points);
            }
        }

        None
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesProvider for InMemoryProvider {
    fn series(
        &self,
        pair: CurrencyPair,
        window: ChartWindow,
        as_of: DateTime<Utc>,
    ) -> Result<HistoricalSeries> {
        let start = as_of - window.span();

        let points = self.window_points(pair, start, as_of).ok_or_else(|| {
            RateEngineError::SourceFailure(format!(
                "no stored rates for {} in the requested window",
                pair
            ))
        })?;

        if points.len() < window.point_count() / 2 {
            warn!(
                "sparse data for {}: {} of ~{} expected points",
                pair,
                points.len(),
                window.point_count()
            );
        }

        HistoricalSeries::new(points, self.origin)
    }

    fn origin(&self) -> DataOrigin {
        self.origin
    }
}
