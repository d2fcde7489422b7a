//! Typed generation results, one per platform.
//!
//! The gateway returns loosely-parsed JSON; these are the tagged decode
//! targets callers validate it against. Wire names match the declared
//! output shapes, including the display-oriented keys the social surfaces
//! use.

use serde::{Deserialize, Serialize};

use super::keyword::KeywordWithMetadata;

/// Website SEO keyword research.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoKeywordSet {
    pub keywords: Vec<KeywordWithMetadata>,
}

/// Meta description suggestions (3 per request, each under 160 characters).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDescriptionSet {
    pub meta_descriptions: Vec<String>,
}

/// Structured-data markup for a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMarkup {
    /// The identified schema.org type, e.g. "LocalBusiness".
    pub schema_type: String,
    /// The complete JSON-LD markup, as a JSON string.
    pub json_ld: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineHeading {
    pub heading: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineSection {
    pub heading: String,
    pub children: Vec<OutlineHeading>,
}

/// SERP-analysis content brief for a target keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBrief {
    pub search_intent: String,
    pub suggested_title: String,
    pub meta_description: String,
    pub serp_analysis: String,
    pub key_topics: Vec<String>,
    pub questions_to_answer: Vec<String>,
    pub suggested_outline: Vec<OutlineSection>,
    pub target_word_count: String,
    pub linking_suggestions: String,
}

/// Local-search keywords from the grounded variant. Citations travel
/// separately on the generation reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalKeywordSet {
    pub keywords: Vec<KeywordWithMetadata>,
}

/// YouTube video optimization package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeContent {
    #[serde(rename = "Video Tags")]
    pub video_tags: Vec<KeywordWithMetadata>,
    #[serde(rename = "Description Keywords")]
    pub description_keywords: Vec<KeywordWithMetadata>,
    #[serde(rename = "Video Description")]
    pub video_description: Vec<String>,
    #[serde(rename = "Title Suggestions")]
    pub title_suggestions: Vec<String>,
    #[serde(rename = "Suggested Categories")]
    pub suggested_categories: Vec<String>,
}

/// Hashtag suggestions (LinkedIn).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagSet {
    pub hashtags: Vec<KeywordWithMetadata>,
}

/// Instagram caption and hashtags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramContent {
    #[serde(rename = "Post Caption")]
    pub post_caption: Vec<String>,
    pub hashtags: Vec<KeywordWithMetadata>,
}

/// Facebook post text, hashtags, and calls to action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookContent {
    #[serde(rename = "Post Text")]
    pub post_text: Vec<String>,
    pub hashtags: Vec<KeywordWithMetadata>,
    #[serde(rename = "Call to Action Suggestions")]
    pub call_to_action_suggestions: Vec<String>,
}
