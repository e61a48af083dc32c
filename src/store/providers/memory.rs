//! In-memory list store provider
//!
//! Keeps lists in a process-local map. Used when `STORE_BACKEND=memory` and
//! by the test suite.
//!
//! **Important**: state is NOT shared between processes. Two task-service
//! replicas on the memory backend each see their own list.

use crate::store::errors::{StoreError, StoreResult};
use crate::store::traits::ListStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Process-local list store
///
/// Clones share the same underlying lists. The store can be marked
/// unreachable to exercise outage handling without a real backend.
#[derive(Debug, Clone)]
pub struct InMemoryListStore {
    lists: Arc<RwLock<HashMap<String, Vec<String>>>>,
    reachable: Arc<AtomicBool>,
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
            reachable: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulate the backend going away (`false`) or coming back (`true`)
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
        debug!(reachable = reachable, "In-memory store reachability changed");
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::SeqCst)
    }

    fn ensure_reachable(&self) -> StoreResult<()> {
        if self.is_reachable() {
            Ok(())
        } else {
            Err(StoreError::ConnectionError(
                "in-memory store is marked unreachable".to_string(),
            ))
        }
    }
}

impl ListStore for InMemoryListStore {
    async fn range_all(&self, key: &str) -> StoreResult<Vec<String>> {
        self.ensure_reachable()?;
        Ok(self.lists.read().get(key).cloned().unwrap_or_default())
    }

    async fn push(&self, key: &str, values: &[String]) -> StoreResult<()> {
        self.ensure_reachable()?;
        if values.is_empty() {
            return Ok(());
        }

        let mut lists = self.lists.write();
        lists
            .entry(key.to_string())
            .or_default()
            .extend(values.iter().cloned());

        debug!(key = key, pushed = values.len(), "Store RPUSH (memory)");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.ensure_reachable()?;
        self.lists.write().remove(key);
        debug!(key = key, "Store DEL (memory)");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<bool> {
        self.ensure_reachable()?;
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_empty() {
        let store = InMemoryListStore::new();
        assert!(store.range_all("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_push_appends_in_order() {
        let store = InMemoryListStore::new();
        store.push("list", &values(&["a", "b"])).await.unwrap();
        store.push("list", &values(&["c"])).await.unwrap();

        assert_eq!(store.range_all("list").await.unwrap(), values(&["a", "b", "c"]));
    }

    #[tokio::test]
    async fn test_empty_push_does_not_create_key() {
        let store = InMemoryListStore::new();
        store.push("list", &[]).await.unwrap();
        assert!(!store.lists.read().contains_key("list"));
    }

    #[tokio::test]
    async fn test_delete_removes_key() {
        let store = InMemoryListStore::new();
        store.push("list", &values(&["a"])).await.unwrap();
        store.delete("list").await.unwrap();
        assert!(store.range_all("list").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryListStore::new();
        let other = store.clone();
        store.push("list", &values(&["shared"])).await.unwrap();
        assert_eq!(other.range_all("list").await.unwrap(), values(&["shared"]));
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_every_operation() {
        let store = InMemoryListStore::new();
        store.set_reachable(false);

        assert!(store.ping().await.unwrap_err().is_connection_error());
        assert!(store.range_all("list").await.is_err());
        assert!(store.push("list", &values(&["a"])).await.is_err());
        assert!(store.delete("list").await.is_err());

        store.set_reachable(true);
        assert!(store.ping().await.unwrap());
    }
}
