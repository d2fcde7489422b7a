use serde::{Deserialize, Serialize};

/// Estimated search volume bucket reported by the generation service.
///
/// The service is asked for High/Medium/Low but is not trusted to stay
/// within that set; unrecognized values are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchVolume {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for SearchVolume {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other(raw),
        }
    }
}

impl From<SearchVolume> for String {
    fn from(volume: SearchVolume) -> Self {
        match volume {
            SearchVolume::High => "High".to_string(),
            SearchVolume::Medium => "Medium".to_string(),
            SearchVolume::Low => "Low".to_string(),
            SearchVolume::Other(raw) => raw,
        }
    }
}

/// A suggested keyword, tag, or hashtag with its search metadata.
///
/// Field names stay camelCase on the wire so the declared output shape,
/// the decoded value, and the API response all line up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordWithMetadata {
    pub keyword: String,
    pub search_volume: SearchVolume,
    /// 1 = most actively trending, 10 = least.
    pub trending_rank: u8,
    pub user_intent: String,
    pub competition: String,
    pub cpc: String,
    /// Percentage frequency in user-supplied analysis text. Computed
    /// locally, never by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_insight: Option<String>,
}
