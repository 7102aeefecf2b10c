//! Historical series providers
//!
//! One capability, two explicit variants: the live HTTP adapter
//! (`live::LiveRateSource`, feature `async`) fetches real data, and
//! [`SyntheticProvider`] fabricates a plausible series when the live source
//! is down. The caller picks which to invoke after a fetch attempt fails;
//! every series carries a [`DataOrigin`] tag so fabricated data stays
//! visibly fabricated.
//!
//! [`DataOrigin`]: crate::rates::DataOrigin

pub mod in_memory;
#[cfg(feature = "async")]
pub mod live;
pub mod synthetic;

pub use in_memory::InMemoryProvider;
#[cfg(feature = "async")]
pub use live::LiveRateSource;
pub use synthetic::SyntheticProvider;

use crate::currency::CurrencyPair;
use crate::error::Result;
use crate::rates::{ChartWindow, DataOrigin, HistoricalSeries};
use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use log::debug;
use std::sync::Arc;

/// Trait for historical rate series providers
pub trait SeriesProvider: Send + Sync {
    /// Produce the series for a pair over the window ending at `as_of`
    fn series(
        &self,
        pair: CurrencyPair,
        window: ChartWindow,
        as_of: DateTime<Utc>,
    ) -> Result<HistoricalSeries>;

    /// Provenance of the data this provider serves
    fn origin(&self) -> DataOrigin;
}

/// Registry for managing named series providers
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SeriesProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under a name
    pub fn register<P: SeriesProvider + 'static>(&mut self, name: String, provider: P) {
        debug!("registering series provider '{}'", name);
        self.providers.insert(name, Arc::new(provider));
    }

    /// Get a registered provider
    pub fn get(&self, name: &str) -> Option<Arc<dyn SeriesProvider>> {
        self.providers.get(name).cloned()
    }

    /// List all registered provider names
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new();
        assert_eq!(registry.list_providers().len(), 0);
        assert!(registry.get("synthetic").is_none());
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ProviderRegistry::new();
        registry.register("synthetic".to_string(), SyntheticProvider::new());

        let provider = registry.get("synthetic").unwrap();
        assert_eq!(provider.origin(), DataOrigin::Synthetic);
        assert_eq!(registry.list_providers(), vec!["synthetic".to_string()]);
    }
}
