//! Error types for rate-engine

use thiserror::Error;

/// Main error type for rate-engine
#[derive(Error, Debug)]
pub enum RateEngineError {
    #[error("Unknown currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid rate table: {0}")]
    InvalidRateTable(String),

    #[error("Invalid rate series: {0}")]
    InvalidSeries(String),

    #[error("Invalid chart window: {0}")]
    InvalidWindow(String),

    #[error("Rate source failure: {0}")]
    SourceFailure(String),

    #[error("Malformed rate payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for rate-engine operations
pub type Result<T> = std::result::Result<T, RateEngineError>;
