//! In-process store backed by a `HashMap`.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::KvStore;
use crate::error::StoreResult;

/// Map-backed [`KvStore`], used in tests and for `STORE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        debug!(key = key, "Memory SET");
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self.entries.read().await.get(key).cloned();
        debug!(key = key, found = value.is_some(), "Memory GET");
        Ok(value)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
