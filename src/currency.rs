//! Currency reference data and pair types

use crate::error::{RateEngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD, // US Dollar
    EUR, // Euro
    GBP, // British Pound
    JPY, // Japanese Yen
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    INR, // Indian Rupee
    MXN, // Mexican Peso
    BRL, // Brazilian Real
    RUB, // Russian Ruble
    KRW, // South Korean Won
    SGD, // Singapore Dollar
    NZD, // New Zealand Dollar
}

impl Currency {
    /// Parse currency from its ISO code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            "CHF" => Ok(Currency::CHF),
            "CNY" => Ok(Currency::CNY),
            "INR" => Ok(Currency::INR),
            "MXN" => Ok(Currency::MXN),
            "BRL" => Ok(Currency::BRL),
            "RUB" => Ok(Currency::RUB),
            "KRW" => Ok(Currency::KRW),
            "SGD" => Ok(Currency::SGD),
            "NZD" => Ok(Currency::NZD),
            _ => Err(RateEngineError::InvalidCurrency(code.to_string())),
        }
    }

    /// Get currency code as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
            Currency::BRL => "BRL",
            Currency::RUB => "RUB",
            Currency::KRW => "KRW",
            Currency::SGD => "SGD",
            Currency::NZD => "NZD",
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::JPY => "Japanese Yen",
            Currency::AUD => "Australian Dollar",
            Currency::CAD => "Canadian Dollar",
            Currency::CHF => "Swiss Franc",
            Currency::CNY => "Chinese Yuan",
            Currency::INR => "Indian Rupee",
            Currency::MXN => "Mexican Peso",
            Currency::BRL => "Brazilian Real",
            Currency::RUB => "Russian Ruble",
            Currency::KRW => "South Korean Won",
            Currency::SGD => "Singapore Dollar",
            Currency::NZD => "New Zealand Dollar",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::CHF => "Fr",
            Currency::CNY => "¥",
            Currency::INR => "₹",
            Currency::MXN => "Mex$",
            Currency::BRL => "R$",
            Currency::RUB => "₽",
            Currency::KRW => "₩",
            Currency::SGD => "S$",
            Currency::NZD => "NZ$",
        }
    }

    /// Get flag emoji for selection controls
    pub fn flag(&self) -> &'static str {
        match self {
            Currency::USD => "🇺🇸",
            Currency::EUR => "🇪🇺",
            Currency::GBP => "🇬🇧",
            Currency::JPY => "🇯🇵",
            Currency::AUD => "🇦🇺",
            Currency::CAD => "🇨🇦",
            Currency::CHF => "🇨🇭",
            Currency::CNY => "🇨🇳",
            Currency::INR => "🇮🇳",
            Currency::MXN => "🇲🇽",
            Currency::BRL => "🇧🇷",
            Currency::RUB => "🇷🇺",
            Currency::KRW => "🇰🇷",
            Currency::SGD => "🇸🇬",
            Currency::NZD => "🇳🇿",
        }
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::AUD,
            Currency::CAD,
            Currency::CHF,
            Currency::CNY,
            Currency::INR,
            Currency::MXN,
            Currency::BRL,
            Currency::RUB,
            Currency::KRW,
            Currency::SGD,
            Currency::NZD,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Currency pair for rate queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// Parse from string (e.g., "EUR/USD" or "EURUSD")
    pub fn parse(s: &str) -> Result<Self> {
        if let Some((base, quote)) = s.split_once('/') {
            Ok(Self {
                base: Currency::from_code(base)?,
                quote: Currency::from_code(quote)?,
            })
        } else if s.len() == 6 {
            Ok(Self {
                base: Currency::from_code(&s[0..3])?,
                quote: Currency::from_code(&s[3..6])?,
            })
        } else {
            Err(RateEngineError::InvalidCurrency(format!(
                "invalid currency pair: {}",
                s
            )))
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
