//! The content calendar store.

use std::sync::Arc;

use tokio::sync::RwLock;

use muse_core::domain::{NewScheduledPost, ScheduledPost, ScheduledPostPatch};
use muse_core::error::KeyValueError;
use muse_core::ports::KeyValueStore;

const CALENDAR_KEY: &str = "content_calendar";

/// CRUD over scheduled posts, persisted as one JSON array and always kept
/// sorted ascending by scheduled time.
pub struct CalendarStore {
    storage: Arc<dyn KeyValueStore>,
    posts: RwLock<Vec<ScheduledPost>>,
}

impl CalendarStore {
    /// Load the store from storage. Corrupt persisted data is discarded
    /// and the calendar starts empty.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let posts = match storage.get(CALENDAR_KEY).await {
            Some(raw) => match serde_json::from_str::<Vec<ScheduledPost>>(&raw) {
                Ok(mut posts) => {
                    sort(&mut posts);
                    posts
                }
                Err(e) => {
                    tracing::warn!("discarding corrupt calendar data: {e}");
                    let _ = storage.remove(CALENDAR_KEY).await;
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            storage,
            posts: RwLock::new(posts),
        }
    }

    /// Add a post under a fresh id. Returns the created post and the
    /// persist result; the in-memory collection reflects the change
    /// either way.
    pub async fn add(&self, new: NewScheduledPost) -> (ScheduledPost, Result<(), KeyValueError>) {
        let post = new.into_post();
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        sort(&mut posts);
        let persisted = self.persist(&posts).await;
        (post, persisted)
    }

    /// Merge fields into the matching post, re-sorting afterwards.
    /// Returns `None` for unknown ids (a no-op, nothing persisted).
    pub async fn update(
        &self,
        id: &str,
        patch: ScheduledPostPatch,
    ) -> (Option<ScheduledPost>, Result<(), KeyValueError>) {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return (None, Ok(()));
        };
        post.apply(patch);
        let updated = post.clone();
        sort(&mut posts);
        let persisted = self.persist(&posts).await;
        (Some(updated), persisted)
    }

    /// Delete the matching post. Returns whether anything was removed;
    /// unknown ids are a no-op, nothing persisted.
    pub async fn delete(&self, id: &str) -> (bool, Result<(), KeyValueError>) {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return (false, Ok(()));
        }
        let persisted = self.persist(&posts).await;
        (true, persisted)
    }

    /// The current collection, sorted ascending by scheduled time.
    pub async fn list(&self) -> Vec<ScheduledPost> {
        self.posts.read().await.clone()
    }

    /// Remove every post.
    pub async fn clear(&self) -> Result<(), KeyValueError> {
        let mut posts = self.posts.write().await;
        posts.clear();
        self.storage.remove(CALENDAR_KEY).await
    }

    async fn persist(&self, posts: &[ScheduledPost]) -> Result<(), KeyValueError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| KeyValueError::Write(e.to_string()))?;
        self.storage.set(CALENDAR_KEY, &raw).await
    }
}

fn sort(posts: &mut [ScheduledPost]) {
    posts.sort_by_key(|p| p.scheduled_at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use chrono::{DateTime, Duration, Utc};

    fn new_post(scheduled_at: DateTime<Utc>, label: &str) -> NewScheduledPost {
        NewScheduledPost {
            platform: "Instagram".to_string(),
            icon: "📸".to_string(),
            user_input: label.to_string(),
            results: serde_json::json!({}),
            scheduled_at,
            language: None,
        }
    }

    async fn store() -> CalendarStore {
        CalendarStore::load(Arc::new(InMemoryKeyValueStore::new())).await
    }

    #[tokio::test]
    async fn list_is_sorted_ascending_by_scheduled_time() {
        let store = store().await;
        let base = Utc::now();
        let (t1, t2, t3) = (base, base + Duration::hours(1), base + Duration::hours(2));

        store.add(new_post(t2, "second")).await.0;
        store.add(new_post(t1, "first")).await.0;
        store.add(new_post(t3, "third")).await.0;

        let inputs: Vec<_> = store.list().await.into_iter().map(|p| p.user_input).collect();
        assert_eq!(inputs, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_reflects_the_new_sort_position() {
        let store = store().await;
        let base = Utc::now();

        let (early, _) = store.add(new_post(base, "early")).await;
        store.add(new_post(base + Duration::hours(1), "late")).await.0;

        let (updated, persisted) = store
            .update(
                &early.id,
                ScheduledPostPatch {
                    scheduled_at: Some(base + Duration::hours(2)),
                    ..Default::default()
                },
            )
            .await;
        assert!(updated.is_some());
        persisted.unwrap();

        let inputs: Vec<_> = store.list().await.into_iter().map(|p| p.user_input).collect();
        assert_eq!(inputs, vec!["late", "early"]);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_a_noop() {
        let store = store().await;
        store.add(new_post(Utc::now(), "only")).await.0;

        let (updated, persisted) = store
            .update("missing", ScheduledPostPatch::default())
            .await;
        assert!(updated.is_none());
        persisted.unwrap();
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_post() {
        let store = store().await;
        let (post, _) = store.add(new_post(Utc::now(), "gone")).await;
        store.add(new_post(Utc::now(), "kept")).await.0;

        let (removed, _) = store.delete(&post.id).await;
        assert!(removed);
        let (removed, _) = store.delete(&post.id).await;
        assert!(!removed);

        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn collection_survives_reload_through_storage() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let store = CalendarStore::load(storage.clone()).await;
        store.add(new_post(Utc::now(), "persisted")).await.1.unwrap();

        let reloaded = CalendarStore::load(storage).await;
        assert_eq!(reloaded.list().await[0].user_input, "persisted");
    }

    #[tokio::test]
    async fn clear_empties_the_calendar_and_the_storage_key() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let store = CalendarStore::load(storage.clone()).await;
        store.add(new_post(Utc::now(), "doomed")).await.1.unwrap();

        store.clear().await.unwrap();
        assert!(store.list().await.is_empty());
        assert_eq!(storage.get("content_calendar").await, None);
    }

    #[tokio::test]
    async fn corrupt_persisted_data_is_discarded() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        storage.set("content_calendar", "not json").await.unwrap();

        let store = CalendarStore::load(storage.clone()).await;
        assert!(store.list().await.is_empty());
        assert_eq!(storage.get("content_calendar").await, None);
    }
}
