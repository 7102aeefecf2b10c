//! Live exchange-rate HTTP source
//!
//! Narrow adapter over an exchangeratesapi.io-style API. Each call is a
//! single attempt: on transport failure, a non-success payload, or a payload
//! missing the expected fields, the error is returned to the caller, who
//! decides whether to substitute the synthetic provider and flag degraded
//! mode to the user. No retries happen here.

use crate::config::EngineConfig;
use crate::currency::{Currency, CurrencyPair};
use crate::error::{RateEngineError, Result};
use crate::rates::{ChartWindow, DataOrigin, HistoricalSeries, RatePoint, RateTable};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Live HTTP rate source
pub struct LiveRateSource {
    config: EngineConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesResponse {
    #[serde(default)]
    success: bool,
    /// date -> (currency code -> rate)
    #[serde(default)]
    rates: HashMap<String, HashMap<String, f64>>,
}

impl LiveRateSource {
    /// Create a new live source from injected configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RateEngineError::SourceFailure(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Fetch the current rate table quoted against `base`
    pub async fn latest(&self, base: Currency) -> Result<RateTable> {
        let url = format!(
            "{}/latest?access_key={}&base={}",
            self.config.base_url, self.config.api_key, base
        );
        debug!("fetching latest rates, base {}", base);

        let response = self.client.get(&url).send().await.map_err(|e| {
            RateEngineError::SourceFailure(format!("HTTP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(RateEngineError::SourceFailure(format!(
                "rate API returned {}",
                response.status()
            )));
        }

        let payload: LatestResponse = response.json().await.map_err(|e| {
            RateEngineError::MalformedPayload(format!("JSON parse error: {}", e))
        })?;

        if !payload.success || payload.rates.is_empty() {
            warn!("latest-rates payload rejected for base {}", base);
            return Err(RateEngineError::MalformedPayload(
                "missing rates in latest payload".to_string(),
            ));
        }

        let mut rates = HashMap::new();
        for (code, rate) in payload.rates {
            // Codes outside the supported set are skipped, not an error
            if let Ok(currency) = Currency::from_code(&code) {
                rates.insert(currency, rate);
            }
        }
        // The base itself is implied at 1.0 when the payload omits it
        rates.entry(base).or_insert(1.0);

        RateTable::new(base, rates)
    }

    /// Fetch a historical series for a pair over the window ending at `as_of`
    pub async fn timeseries(
        &self,
        pair: CurrencyPair,
        window: ChartWindow,
        as_of: DateTime<Utc>,
    ) -> Result<HistoricalSeries> {
        let start = (as_of - window.span()).date_naive();
        let end = as_of.date_naive();
        let url = format!(
            "{}/timeseries?access_key={}&start_date={}&end_date={}&base={}&symbols={}",
            self.config.base_url, self.config.api_key, start, end, pair.base, pair.quote
        );
        debug!("fetching timeseries for {} ({})", pair, window);

        let response = self.client.get(&url).send().await.map_err(|e| {
            RateEngineError::SourceFailure(format!("HTTP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(RateEngineError::SourceFailure(format!(
                "rate API returned {}",
                response.status()
            )));
        }

        let payload: TimeseriesResponse = response.json().await.map_err(|e| {
            RateEngineError::MalformedPayload(format!("JSON parse error: {}", e))
        })?;

        if !payload.success || payload.rates.is_empty() {
            warn!("timeseries payload rejected for {}", pair);
            return Err(RateEngineError::MalformedPayload(
                "missing rates in timeseries payload".to_string(),
            ));
        }

        parse_timeseries(payload, pair)
    }
}

fn parse_timeseries(payload: TimeseriesResponse, pair: CurrencyPair) -> Result<HistoricalSeries> {
    let mut points = Vec::new();

    for (date_str, day_rates) in payload.rates {
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            RateEngineError::MalformedPayload(format!("date parse error: {}", e))
        })?;
        let timestamp = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| RateEngineError::MalformedPayload("invalid time".to_string()))?;
        let timestamp = DateTime::from_naive_utc_and_offset(timestamp, Utc);

        let Some(rate) = day_rates.get(pair.quote.as_str()) else {
            continue;
        };
        points.push(RatePoint::new(timestamp, *rate));
    }

    if points.is_empty() {
        return Err(RateEngineError::MalformedPayload(format!(
            "no usable points for {} in timeseries payload",
            pair
        )));
    }

    // Payload maps are unordered; the chart wants oldest first
    points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    HistoricalSeries::new(points, DataOrigin::Live)
}
