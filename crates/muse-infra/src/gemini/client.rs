//! Client for the generateContent endpoint.

use std::sync::LazyLock;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;

use muse_core::error::GenerationError;
use muse_core::ports::{GenerationReply, GenerationRequest, TextGenerator};

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, LatLng, Part,
    RetrievalConfig, Tool, ToolConfig,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const TEMPERATURE: f32 = 0.7;

/// Gemini-backed implementation of the text-generation port.
///
/// No retries: a failed call surfaces immediately and the user resubmits.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let mut parts = vec![Part::text(&request.prompt)];
        if let Some(attachment) = &request.attachment {
            parts.push(Part::inline_data(
                &attachment.mime_type,
                BASE64.encode(&attachment.data),
            ));
        }

        // The request builder never produces both a shape and a location;
        // the service rejects a response schema combined with grounding.
        let generation_config = request.shape.as_ref().map(|shape| GenerationConfig {
            response_mime_type: "application/json",
            response_schema: shape.clone(),
            temperature: TEMPERATURE,
        });

        let (tools, tool_config) = match request.location {
            Some(location) => (
                Some(vec![Tool {
                    google_maps: serde_json::json!({}),
                }]),
                Some(ToolConfig {
                    retrieval_config: RetrievalConfig {
                        lat_lng: LatLng {
                            latitude: location.latitude,
                            longitude: location.longitude,
                        },
                    },
                }),
            ),
            None => (None, None),
        };

        GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config,
            tools,
            tool_config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_body(&request);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(strip_vendor_prefix(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(strip_vendor_prefix(&format!(
                "service returned {status}: {detail}"
            ))));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(strip_vendor_prefix(&e.to_string())))?;

        reply_from_response(payload)
    }
}

/// Steps shared by every response: decide blocked/empty, then clean and
/// parse the text and collect grounding citations.
fn reply_from_response(
    response: GenerateContentResponse,
) -> Result<GenerationReply, GenerationError> {
    let Some(text) = response.text() else {
        if let Some(feedback) = response.prompt_feedback {
            if let Some(reason) = feedback.block_reason {
                return Err(GenerationError::Blocked {
                    reason,
                    message: feedback.block_reason_message,
                });
            }
        }
        return Err(GenerationError::Empty);
    };

    let parsed = clean_and_parse(&text)?;
    Ok(GenerationReply {
        payload: parsed,
        citations: response.citations(),
    })
}

/// Trim the text, remove one leading ```json (or bare ```) fence and one
/// trailing closing fence, then parse as JSON. Empty-after-cleaning is an
/// empty response; a parse failure keeps the raw text for diagnostics.
fn clean_and_parse(text: &str) -> Result<serde_json::Value, GenerationError> {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest.trim_start();
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest.trim_start();
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest.trim_end();
    }

    if cleaned.is_empty() {
        return Err(GenerationError::Empty);
    }

    serde_json::from_str(cleaned).map_err(|_| GenerationError::Malformed {
        raw: text.to_string(),
    })
}

static VENDOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]:\s*").expect("vendor prefix pattern compiles"));

/// Strip a service-specific bracketed prefix like "[Vendor Error]: " from
/// a transport message before anyone sees it.
fn strip_vendor_prefix(message: &str) -> String {
    VENDOR_PREFIX.replace(message, "").into_owned()
}
