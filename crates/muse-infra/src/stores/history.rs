//! The generation history store.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use muse_core::domain::{HistoryItem, NewHistoryItem};
use muse_core::error::KeyValueError;
use muse_core::ports::KeyValueStore;

const HISTORY_KEY: &str = "generation_history";

/// Append-only log of successful generations, newest first.
/// Items are never updated; the only destructive operation is a full clear.
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStore>,
    /// Last issued id. Ids are millisecond timestamps, bumped when two
    /// generations complete within the same tick.
    last_id: Mutex<i64>,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            last_id: Mutex::new(0),
        }
    }

    /// Record one generation, prepending it to the stored list. Returns
    /// the recorded item and the persist result.
    pub async fn record(&self, new: NewHistoryItem) -> (HistoryItem, Result<(), KeyValueError>) {
        let now = Utc::now();
        let id = {
            let mut last = self.last_id.lock().await;
            let candidate = now.timestamp_millis();
            *last = if candidate > *last { candidate } else { *last + 1 };
            *last
        };

        let item = HistoryItem {
            id,
            platform: new.platform,
            icon: new.icon,
            user_input: new.user_input,
            results: new.results,
            timestamp: now,
            language: new.language,
        };

        let mut items = self.list().await;
        items.insert(0, item.clone());
        let persisted = self.persist(&items).await;
        (item, persisted)
    }

    /// The recorded history, newest first. Corrupt persisted data is
    /// discarded and treated as empty.
    pub async fn list(&self) -> Vec<HistoryItem> {
        match self.storage.get(HISTORY_KEY).await {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("discarding corrupt history data: {e}");
                    let _ = self.storage.remove(HISTORY_KEY).await;
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    /// Remove the entire history.
    pub async fn clear(&self) -> Result<(), KeyValueError> {
        self.storage.remove(HISTORY_KEY).await
    }

    async fn persist(&self, items: &[HistoryItem]) -> Result<(), KeyValueError> {
        let raw =
            serde_json::to_string(items).map_err(|e| KeyValueError::Write(e.to_string()))?;
        self.storage.set(HISTORY_KEY, &raw).await
    }
}
