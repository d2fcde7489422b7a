//! File-backed key-value store - the persistent tier.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use muse_core::error::KeyValueError;
use muse_core::ports::KeyValueStore;

/// Stores each key as one JSON file under a data directory.
///
/// Values are small JSON-serialized collections, so plain synchronous file
/// IO is used inside the async methods.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, KeyValueError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| KeyValueError::Write(format!("failed to create {}: {e}", root.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Sanitize the key for the filesystem; keys are fixed identifiers,
        // this just keeps a stray separator from escaping the root.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| KeyValueError::Write(format!("failed to write {}: {e}", path.display())))
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueError::Write(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.set("content_calendar", "[]").await.unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("content_calendar").await, Some("[]".to_string()));
    }

    #[tokio::test]
    async fn remove_is_a_noop_for_absent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.remove("missing").await.unwrap();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await, None);
    }

    #[tokio::test]
    async fn keys_are_sanitized_to_stay_under_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.set("../escape", "v").await.unwrap();
        assert_eq!(store.get("../escape").await, Some("v".to_string()));
        assert!(dir.path().join("___escape.json").exists());
    }
}
