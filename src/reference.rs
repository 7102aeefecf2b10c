//! Built-in reference rate data
//!
//! Approximate market rates (roughly accurate as of spring 2025) serving two
//! degraded-mode jobs: a canned current-rates table for when the live source
//! is unreachable, and anchor values the synthetic series generator
//! oscillates around. Neither is authoritative market data.

use crate::currency::{Currency, CurrencyPair};
use crate::rates::RateTable;

/// EUR-pivot reference rates for every supported currency
const REFERENCE_RATES: [(Currency, f64); 15] = [
    (Currency::USD, 1.08),
    (Currency::EUR, 1.00),
    (Currency::GBP, 0.85),
    (Currency::JPY, 162.5),
    (Currency::AUD, 1.63),
    (Currency::CAD, 1.47),
    (Currency::CHF, 0.98),
    (Currency::CNY, 7.82),
    (Currency::INR, 86.04),
    (Currency::MXN, 18.23),
    (Currency::BRL, 5.38),
    (Currency::RUB, 98.65),
    (Currency::KRW, 1450.25),
    (Currency::SGD, 1.44),
    (Currency::NZD, 1.77),
];

/// Known approximate anchors for commonly charted pairs.
/// Pairs not listed (in either direction) anchor at 1.0.
const ANCHOR_RATES: [(Currency, Currency, f64); 6] = [
    (Currency::USD, Currency::INR, 86.04),
    (Currency::EUR, Currency::USD, 1.08),
    (Currency::GBP, Currency::USD, 1.27),
    (Currency::USD, Currency::JPY, 150.5),
    (Currency::EUR, Currency::GBP, 0.79),
    (Currency::USD, Currency::CAD, 1.36),
];

/// The built-in EUR-pivot rate table
pub fn reference_table() -> RateTable {
    RateTable::from_entries(Currency::EUR, &REFERENCE_RATES)
        .expect("reference rates are pivot-relative and positive")
}

/// Anchor rate for a pair, for the synthetic series generator
///
/// Looks the pair up in both directions (an inverse quote anchors just as
/// well) and falls back to 1.0 for unknown pairs.
pub fn anchor_rate(pair: CurrencyPair) -> f64 {
    if pair.base == pair.quote {
        return 1.0;
    }
    for (base, quote, rate) in ANCHOR_RATES {
        if base == pair.base && quote == pair.quote {
            return rate;
        }
        if base == pair.quote && quote == pair.base {
            return 1.0 / rate;
        }
    }
    1.0
}
