use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A generation result scheduled onto the content calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// Opaque unique id, assigned at creation and never changed.
    pub id: String,
    pub platform: String,
    pub icon: String,
    pub user_input: String,
    pub results: Value,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Fields for creating a scheduled post; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledPost {
    pub platform: String,
    pub icon: String,
    pub user_input: String,
    pub results: Value,
    pub scheduled_at: DateTime<Utc>,
    pub language: Option<String>,
}

impl NewScheduledPost {
    /// Promote to a full post with a fresh id.
    pub fn into_post(self) -> ScheduledPost {
        ScheduledPost {
            id: Uuid::new_v4().to_string(),
            platform: self.platform,
            icon: self.icon,
            user_input: self.user_input,
            results: self.results,
            scheduled_at: self.scheduled_at,
            language: self.language,
        }
    }
}

/// Partial update for a scheduled post. Every field is optional; the id
/// itself can never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPostPatch {
    pub platform: Option<String>,
    pub icon: Option<String>,
    pub user_input: Option<String>,
    pub results: Option<Value>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
}

impl ScheduledPost {
    /// Merge the supplied fields into this post.
    pub fn apply(&mut self, patch: ScheduledPostPatch) {
        if let Some(platform) = patch.platform {
            self.platform = platform;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(user_input) = patch.user_input {
            self.user_input = user_input;
        }
        if let Some(results) = patch.results {
            self.results = results;
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        if let Some(language) = patch.language {
            self.language = Some(language);
        }
    }
}
