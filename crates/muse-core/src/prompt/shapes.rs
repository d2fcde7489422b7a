//! Output-shape declarations sent alongside each request.
//!
//! Shapes use the service's schema vocabulary (OBJECT / ARRAY / STRING /
//! INTEGER). Each platform's shape is declared once and cloned for every
//! request of that kind. The grounded local-search variant has no shape:
//! grounding and response schemas are mutually exclusive on the service.

use std::sync::LazyLock;

use serde_json::{Value, json};

static KEYWORD: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "keyword": {
                "type": "STRING",
                "description": "The suggested keyword, tag, or hashtag."
            },
            "searchVolume": {
                "type": "STRING",
                "description": "Estimated search volume: High, Medium, or Low."
            },
            "trendingRank": {
                "type": "INTEGER",
                "description": "Recent-trendiness rank from 1 (most actively trending) to 10."
            },
            "userIntent": {
                "type": "STRING",
                "description": "Informational, Navigational, Commercial, or Transactional. Local variants allowed for local search."
            },
            "competition": {
                "type": "STRING",
                "description": "Estimated competition to rank: High, Medium, or Low."
            },
            "cpc": {
                "type": "STRING",
                "description": "Estimated cost-per-click range, e.g. \"$0.50 - $2.00\"."
            },
            "strategicInsight": {
                "type": "STRING",
                "description": "Brief, actionable insight on why this keyword is valuable."
            }
        },
        "required": ["keyword", "searchVolume", "trendingRank", "userIntent", "competition", "cpc"]
    })
});

static SEO_KEYWORDS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "keywords": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "20-30 SEO keywords including head, body, and long-tail terms."
            }
        },
        "required": ["keywords"]
    })
});

static META_DESCRIPTIONS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "metaDescriptions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 unique, compelling meta descriptions, each under 160 characters."
            }
        },
        "required": ["metaDescriptions"]
    })
});

static SCHEMA_MARKUP: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "schemaType": {
                "type": "STRING",
                "description": "The identified schema.org type, e.g. 'LocalBusiness', 'Article', 'Product'."
            },
            "jsonLd": {
                "type": "STRING",
                "description": "The complete and valid JSON-LD markup, as a JSON string."
            }
        },
        "required": ["schemaType", "jsonLd"]
    })
});

static CONTENT_BRIEF: LazyLock<Value> = LazyLock::new(|| {
    let outline_item = json!({
        "type": "OBJECT",
        "properties": {
            "heading": { "type": "STRING" },
            "children": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": { "heading": { "type": "STRING" } },
                    "required": ["heading"]
                }
            }
        },
        "required": ["heading", "children"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "searchIntent": { "type": "STRING", "description": "The likely user intent, e.g. 'Informational'." },
            "suggestedTitle": { "type": "STRING", "description": "An SEO-optimized title under 60 characters." },
            "metaDescription": { "type": "STRING", "description": "A compelling meta description under 160 characters." },
            "serpAnalysis": { "type": "STRING", "description": "A brief summary of the current top-ranking content." },
            "keyTopics": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Essential semantic keywords and sub-topics to cover." },
            "questionsToAnswer": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Common user questions the content must answer." },
            "suggestedOutline": { "type": "ARRAY", "items": outline_item, "description": "A hierarchical outline with H2 and H3 headings." },
            "targetWordCount": { "type": "STRING", "description": "Estimated word count to be competitive, e.g. '1500-2000 words'." },
            "linkingSuggestions": { "type": "STRING", "description": "Internal and external linking advice." }
        },
        "required": [
            "searchIntent", "suggestedTitle", "metaDescription", "serpAnalysis",
            "keyTopics", "questionsToAnswer", "suggestedOutline",
            "targetWordCount", "linkingSuggestions"
        ]
    })
});

static YOUTUBE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "Video Tags": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "15-20 relevant, trending video tags with metadata."
            },
            "Description Keywords": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "Keywords to weave naturally into the video description."
            },
            "Video Description": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A single-element array holding an SEO-optimized video description (3-4 sentences)."
            },
            "Title Suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 creative, SEO-friendly title suggestions."
            },
            "Suggested Categories": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-5 relevant category suggestions."
            }
        },
        "propertyOrdering": [
            "Video Tags", "Description Keywords", "Video Description",
            "Title Suggestions", "Suggested Categories"
        ]
    })
});

static HASHTAGS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "hashtags": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "Relevant, effective hashtags with search volume and trending rank."
            }
        },
        "required": ["hashtags"]
    })
});

static INSTAGRAM: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "Post Caption": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A single-element array holding an engaging caption (2-3 sentences) in the platform's tone."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "A mix of popular and niche hashtags with metadata."
            }
        },
        "propertyOrdering": ["Post Caption", "hashtags"]
    })
});

static FACEBOOK: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "Post Text": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A single-element array holding a conversational post text (3-5 sentences) that invites interaction."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": KEYWORD.clone(),
                "description": "3-7 relevant, effective hashtags with metadata."
            },
            "Call to Action Suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 distinct, practical call-to-action suggestions."
            }
        },
        "propertyOrdering": ["Post Text", "hashtags", "Call to Action Suggestions"]
    })
});

pub(crate) fn seo_keywords() -> Value {
    SEO_KEYWORDS.clone()
}

pub(crate) fn meta_descriptions() -> Value {
    META_DESCRIPTIONS.clone()
}

pub(crate) fn schema_markup() -> Value {
    SCHEMA_MARKUP.clone()
}

pub(crate) fn content_brief() -> Value {
    CONTENT_BRIEF.clone()
}

pub(crate) fn youtube() -> Value {
    YOUTUBE.clone()
}

pub(crate) fn hashtags() -> Value {
    HASHTAGS.clone()
}

pub(crate) fn instagram() -> Value {
    INSTAGRAM.clone()
}

pub(crate) fn facebook() -> Value {
    FACEBOOK.clone()
}
