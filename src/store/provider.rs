//! List store provider with enum dispatch
//!
//! Consumers hold a `StoreProvider` and never name the concrete backend.

use super::errors::StoreResult;
use super::providers::{InMemoryListStore, RedisListStore};
use super::traits::ListStore;
use crate::config::{StoreBackend, StoreConfig};
use tracing::info;

/// Internal backend enum for zero-cost dispatch
#[derive(Debug, Clone)]
enum Backend {
    /// Redis provider (boxed to reduce enum size)
    Redis(Box<RedisListStore>),

    /// Process-local provider
    Memory(InMemoryListStore),
}

/// The list store used by the task service
#[derive(Debug, Clone)]
pub struct StoreProvider {
    backend: Backend,
}

impl StoreProvider {
    /// Create a provider from configuration
    ///
    /// Does not contact Redis; connection errors surface on first use.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let provider = match config.backend {
            StoreBackend::Redis => Self::redis(RedisListStore::from_config(config)?),
            StoreBackend::Memory => Self::in_memory(InMemoryListStore::new()),
        };

        info!(
            provider = provider.provider_name(),
            "List store provider configured"
        );

        Ok(provider)
    }

    pub fn redis(store: RedisListStore) -> Self {
        Self {
            backend: Backend::Redis(Box::new(store)),
        }
    }

    pub fn in_memory(store: InMemoryListStore) -> Self {
        Self {
            backend: Backend::Memory(store),
        }
    }
}

impl ListStore for StoreProvider {
    async fn range_all(&self, key: &str) -> StoreResult<Vec<String>> {
        match &self.backend {
            Backend::Redis(s) => s.range_all(key).await,
            Backend::Memory(s) => s.range_all(key).await,
        }
    }

    async fn push(&self, key: &str, values: &[String]) -> StoreResult<()> {
        match &self.backend {
            Backend::Redis(s) => s.push(key, values).await,
            Backend::Memory(s) => s.push(key, values).await,
        }
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        match &self.backend {
            Backend::Redis(s) => s.delete(key).await,
            Backend::Memory(s) => s.delete(key).await,
        }
    }

    async fn ping(&self) -> StoreResult<bool> {
        match &self.backend {
            Backend::Redis(s) => s.ping().await,
            Backend::Memory(s) => s.ping().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match &self.backend {
            Backend::Redis(s) => s.provider_name(),
            Backend::Memory(s) => s.provider_name(),
        }
    }
}
