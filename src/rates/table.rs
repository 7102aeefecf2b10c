//! Pivot-relative rate tables and pairwise conversion
//!
//! A `RateTable` maps each currency to "units of that currency per one unit
//! of the pivot currency". Any-to-any conversion goes through the pivot:
//! an amount is divided by the source rate and multiplied by the target rate.

use crate::currency::Currency;
use crate::error::{RateEngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tolerance for the pivot currency's own entry, which must equal 1.0
const PIVOT_TOLERANCE: f64 = 1e-9;

/// Immutable pivot-relative rate table
///
/// Invariants, enforced at construction:
/// - the pivot currency has an entry equal to 1.0 (within tolerance);
/// - every rate is positive and finite.
///
/// Tables without a pivot entry are rejected outright rather than being
/// served through an approximate direct-multiplier path.
///
/// # Example
/// ```
/// use rate_engine::currency::Currency;
/// use rate_engine::rates::RateTable;
///
/// let table = RateTable::from_entries(
///     Currency::EUR,
///     &[(Currency::EUR, 1.0), (Currency::USD, 1.08)],
/// )
/// .unwrap();
///
/// assert_eq!(table.convert(100.0, Currency::EUR, Currency::EUR), 100.0);
/// assert!((table.convert(1.0, Currency::EUR, Currency::USD) - 1.08).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RateTable {
    pivot: Currency,
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// Create a rate table, validating the pivot invariant
    pub fn new(pivot: Currency, rates: HashMap<Currency, f64>) -> Result<Self> {
        for (currency, rate) in &rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(RateEngineError::InvalidRateTable(format!(
                    "rate for {} must be positive and finite, got {}",
                    currency, rate
                )));
            }
        }

        match rates.get(&pivot) {
            Some(rate) if (rate - 1.0).abs() <= PIVOT_TOLERANCE => {}
            Some(rate) => {
                return Err(RateEngineError::InvalidRateTable(format!(
                    "pivot {} must carry rate 1.0, got {}",
                    pivot, rate
                )))
            }
            None => {
                return Err(RateEngineError::InvalidRateTable(format!(
                    "table is not pivot-relative: no entry for pivot {}",
                    pivot
                )))
            }
        }

        Ok(Self { pivot, rates })
    }

    /// Create from a slice of (currency, rate) entries
    pub fn from_entries(pivot: Currency, entries: &[(Currency, f64)]) -> Result<Self> {
        Self::new(pivot, entries.iter().copied().collect())
    }

    /// Parse a table from CSV data
    ///
    /// Expected format: one `code,rate` pair per line. Blank lines and
    /// lines starting with `#` are skipped.
    pub fn load_from_csv(pivot: Currency, csv_data: &str) -> Result<Self> {
        let mut rates = HashMap::new();

        for (line_num, line) in csv_data.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
            if parts.len() != 2 {
                return Err(RateEngineError::InvalidRateTable(format!(
                    "invalid CSV format at line {}: expected 2 columns, got {}",
                    line_num + 1,
                    parts.len()
                )));
            }

            let currency = Currency::from_code(parts[0])?;
            let rate: f64 = parts[1].parse().map_err(|e| {
                RateEngineError::InvalidRateTable(format!(
                    "invalid rate at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            rates.insert(currency, rate);
        }

        Self::new(pivot, rates)
    }

    /// The pivot currency this table is quoted against
    pub fn pivot(&self) -> Currency {
        self.pivot
    }

    /// Rate for a single currency (units per one unit of pivot)
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Whether the table carries an entry for the currency
    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Number of currencies in the table
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currencies present in the table, sorted by code
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.rates.keys().copied().collect();
        currencies.sort_by_key(|c| c.as_str());
        currencies
    }

    /// Pairwise conversion factor, such that `to_amount = from_amount * rate`
    ///
    /// Returns `None` when either currency is absent from the table.
    pub fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        let from_rate = self.get(from)?;
        let to_rate = self.get(to)?;
        if from == to {
            return Some(1.0);
        }
        Some(to_rate / from_rate)
    }

    /// Convert an amount between two currencies
    ///
    /// Total function: a missing currency yields the 0.0 sentinel rather
    /// than an error. Callers must treat a zero result under a non-zero
    /// input amount as "pair not convertible with this table", not as a
    /// real conversion.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        match (self.get(from), self.get(to)) {
            (Some(_), Some(_)) if from == to => amount,
            (Some(from_rate), Some(to_rate)) => amount / from_rate * to_rate,
            _ => 0.0,
        }
    }

    /// Re-express the table against a new pivot currency
    ///
    /// Every rate is divided by the new pivot's current rate, so the new
    /// pivot entry lands at exactly 1.0.
    pub fn rebase(&self, new_pivot: Currency) -> Result<Self> {
        let base_rate = self.get(new_pivot).ok_or_else(|| {
            RateEngineError::InvalidRateTable(format!(
                "cannot rebase: no entry for {}",
                new_pivot
            ))
        })?;

        let rates = self
            .rates
            .iter()
            .map(|(currency, rate)| (*currency, rate / base_rate))
            .collect();

        Self::new(new_pivot, rates)
    }
}

/// One user-initiated conversion
///
/// Constructed per request (e.g. deserialized straight off a form submit),
/// applied against a table once, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: Currency, to: Currency) -> Self {
        Self { amount, from, to }
    }

    /// Apply the request against a table
    pub fn apply(&self, table: &RateTable) -> f64 {
        table.convert(self.amount, self.from, self.to)
    }
}

/// Convert an amount using the given table
///
/// Thin free-function wrapper over [`RateTable::convert`] for callers that
/// hold tables behind references or trait objects.
pub fn convert_amount(table: &RateTable, amount: f64, from: Currency, to: Currency) -> f64 {
    table.convert(amount, from, to)
}

/// Batch convert multiple amounts into a single target currency
pub fn convert_amounts(
    table: &RateTable,
    amounts: &[(f64, Currency)],
    to: Currency,
) -> Vec<f64> {
    amounts
        .iter()
        .map(|(amount, from)| table.convert(*amount, *from, to))
        .collect()
}
