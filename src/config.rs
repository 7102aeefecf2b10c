//! Engine configuration

use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// Upstream API coordinates default (exchangeratesapi.io-compatible)
pub const DEFAULT_BASE_URL: &str = "https://api.exchangeratesapi.io/v1";

/// Immutable engine configuration, injected at construction time.
///
/// Holds the upstream API coordinates and the pivot currency that rate
/// tables are quoted against. There is no process-wide configuration
/// state; callers build one of these and pass it where needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Access key for the upstream exchange-rate API
    pub api_key: String,
    /// Base URL of the upstream exchange-rate API
    pub base_url: String,
    /// Pivot currency rate tables are quoted against.
    /// The upstream free tier quotes everything against EUR.
    pub pivot: Currency,
    /// HTTP timeout in seconds for live requests
    pub timeout_secs: u64,
}

impl EngineConfig {
    /// Create a configuration with the given API key and defaults elsewhere
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            pivot: Currency::EUR,
            timeout_secs: 30,
        }
    }
}
