//! In-memory key-value store - the session tier and the test fake.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use muse_core::error::KeyValueError;
use muse_core::ports::KeyValueStore;

/// In-memory store using a HashMap behind an async RwLock.
///
/// Data is lost when the process exits, which is exactly what the
/// short-lived session tier wants.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await, Some("v".to_string()));
    }

    #[tokio::test]
    async fn set_replaces_existing_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await, Some("v2".to_string()));
    }

    #[tokio::test]
    async fn remove_is_a_noop_for_absent_keys() {
        let store = InMemoryKeyValueStore::new();
        store.remove("missing").await.unwrap();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await, None);
    }
}
