//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use muse_core::domain::{KeywordWithMetadata, SchemaMarkup};
use muse_core::ports::GroundingCitation;
use muse_core::prompt::SeoInputMode;

/// Request to generate website SEO assets (keywords, meta descriptions,
/// schema markup). In description mode the input may hold several
/// newline-separated businesses; each line is generated independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoGenerateRequest {
    pub input: String,
    #[serde(default)]
    pub mode: SeoInputMode,
    pub language: String,
    pub competitors: Option<String>,
}

/// Combined SEO results for one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoResultBlock {
    pub input: String,
    pub keywords: Vec<KeywordWithMetadata>,
    pub meta_descriptions: Vec<String>,
    pub schema_markup: SchemaMarkup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoGenerateResponse {
    pub results: Vec<SeoResultBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBriefRequest {
    pub target_keyword: String,
    pub language: String,
    pub competitors: Option<String>,
}

/// Request for location-grounded local-search keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalKeywordsRequest {
    pub input: String,
    pub language: String,
    pub latitude: f64,
    pub longitude: f64,
    pub competitors: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalKeywordsResponse {
    pub keywords: Vec<KeywordWithMetadata>,
    pub citations: Vec<GroundingCitation>,
}

/// Request to annotate keywords with their density in analysis text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityRequest {
    pub analysis_text: String,
    pub keywords: Vec<KeywordWithMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityResponse {
    pub keywords: Vec<KeywordWithMetadata>,
}

/// A file attached to a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentPayload {
    pub mime_type: String,
    /// Base64-encoded file contents.
    pub data: String,
}

/// Request to generate social content. `input` may be empty for file-only
/// submissions as long as an attachment is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialGenerateRequest {
    #[serde(default)]
    pub input: String,
    pub language: String,
    pub attachment: Option<AttachmentPayload>,
    /// YouTube only: optional category hint.
    pub category: Option<String>,
}

/// Request to put a generation result on the content calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePostRequest {
    pub platform: String,
    pub icon: String,
    pub user_input: String,
    pub results: Value,
    pub scheduled_at: DateTime<Utc>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueKeyRequest {
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedKeyResponse {
    pub device_id: String,
    pub access_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomKeyRequest {
    pub device_id: String,
    pub access_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccessRequest {
    pub device_id: String,
    pub access_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAccessResponse {
    pub authorized: bool,
}
