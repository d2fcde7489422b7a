use async_trait::async_trait;

use crate::error::KeyValueError;

/// Key-value storage port - the persistence seam behind every store.
///
/// Each store keeps its whole collection JSON-serialized under one
/// well-known key and writes the full value back on every mutation.
/// An in-memory fake stands in for the real medium in tests.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key, if present.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set the value for a key, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}
