use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One successful generation, as recorded in the history log.
/// Items are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Millisecond timestamp at creation, bumped when needed so ids stay
    /// strictly increasing across rapid successive writes.
    pub id: i64,
    pub platform: String,
    pub icon: String,
    pub user_input: String,
    pub results: Value,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Fields for recording a generation; the store assigns id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryItem {
    pub platform: String,
    pub icon: String,
    pub user_input: String,
    pub results: Value,
    pub language: Option<String>,
}
