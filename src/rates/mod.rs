//! Rate tables, chart windows and historical series
//!
//! # Components
//!
//! - **table**: pivot-relative rate tables and pairwise conversion
//! - **window**: chart time windows and their sampling resolution
//! - **series**: validated historical rate series with summary statistics
//!
//! # Example
//!
//! ```rust
//! use rate_engine::currency::Currency;
//! use rate_engine::rates::RateTable;
//!
//! let table = RateTable::from_entries(
//!     Currency::EUR,
//!     &[(Currency::EUR, 1.0), (Currency::USD, 1.08), (Currency::INR, 86.04)],
//! )
//! .unwrap();
//!
//! // 10 USD in INR, through the EUR pivot
//! let rupees = table.convert(10.0, Currency::USD, Currency::INR);
//! assert!((rupees - 796.67).abs() < 0.01);
//! ```

pub mod series;
pub mod table;
pub mod window;

pub use series::{DataOrigin, HistoricalSeries, RatePoint};
pub use table::{convert_amount, convert_amounts, ConversionRequest, RateTable};
pub use window::ChartWindow;
