//! Provider registry for lookup by id.
//!
//! An explicit value owned by whatever composes providers and the resolver
//! at startup; there is deliberately no process-wide singleton.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{ContentProvider, ProviderError};

/// Registry of content providers, keyed by their declared `provider_id`.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ContentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        ProviderRegistry {
            providers: HashMap::new(),
        }
    }

    /// Registers a provider under its own `provider_id`.
    ///
    /// A provider registered under an already-used id replaces the old one.
    pub fn register(&mut self, provider: Arc<dyn ContentProvider>) {
        self.providers
            .insert(provider.metadata().provider_id, provider);
    }

    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn ContentProvider>> {
        self.providers.get(provider_id).cloned()
    }

    /// Like [`get`](Self::get), but with an error for CLI/API surfaces.
    pub fn require(&self, provider_id: &str) -> Result<Arc<dyn ContentProvider>, ProviderError> {
        self.get(provider_id)
            .ok_or_else(|| ProviderError::UnknownProvider(provider_id.to_string()))
    }

    pub fn contains(&self, provider_id: &str) -> bool {
        self.providers.contains_key(provider_id)
    }

    /// All registered ids, sorted.
    pub fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }
}
