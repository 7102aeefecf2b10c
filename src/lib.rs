//! # rate-engine
//!
//! Currency conversion and historical exchange-rate series engine.
//!
//! The crate turns a pivot-relative rate table into any-to-any conversion
//! factors, and produces historical rate series for charting: live from an
//! upstream HTTP API when reachable (feature `async`), synthetic — and
//! tagged as such — when it is not.
//!
//! ## Example
//!
//! ```rust
//! use rate_engine::prelude::*;
//!
//! let table = reference_table();
//!
//! // 10 USD in rupees, through the EUR pivot
//! let rupees = table.convert(10.0, Currency::USD, Currency::INR);
//! assert!((rupees - 796.67).abs() < 0.01);
//!
//! // A missing pair yields the 0.0 sentinel, never an error
//! let partial = RateTable::from_entries(
//!     Currency::EUR,
//!     &[(Currency::EUR, 1.0), (Currency::USD, 1.08)],
//! )
//! .unwrap();
//! assert_eq!(partial.convert(50.0, Currency::USD, Currency::GBP), 0.0);
//! ```

pub mod config;
pub mod currency;
pub mod error;
pub mod providers;
pub mod rates;
pub mod reference;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::EngineConfig;
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::error::{RateEngineError, Result};
    #[cfg(feature = "async")]
    pub use crate::providers::LiveRateSource;
    pub use crate::providers::{
        InMemoryProvider, ProviderRegistry, SeriesProvider, SyntheticProvider,
    };
    pub use crate::rates::{
        convert_amount, convert_amounts, ChartWindow, ConversionRequest, DataOrigin,
        HistoricalSeries, RatePoint, RateTable,
    };
    pub use crate::reference::{anchor_rate, reference_table};
}
