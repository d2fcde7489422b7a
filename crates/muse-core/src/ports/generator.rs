use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerationError;

/// An uploaded file forwarded to the generation service as inline data.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Largest accepted attachment, measured after base64 decoding.
    pub const MAX_BYTES: usize = 499 * 1024 * 1024;
}

/// Geographic point used to ground local-search requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A source the service consulted when grounding a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingCitation {
    pub uri: String,
    pub title: String,
}

/// One request to the remote text-generation service.
///
/// `shape` and `location` are mutually exclusive: the service cannot apply
/// a response schema and grounding tools on the same call, so grounded
/// requests are parsed from free-form text instead.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub shape: Option<Value>,
    pub attachment: Option<Attachment>,
    pub location: Option<GeoPoint>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            shape: None,
            attachment: None,
            location: None,
        }
    }

    pub fn with_shape(mut self, shape: Value) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }
}

/// The parsed outcome of a generation call.
#[derive(Debug, Clone)]
pub struct GenerationReply {
    /// The response text parsed as JSON.
    pub payload: Value,
    /// Grounding citations, when the service reported any. Absence is
    /// normal for non-grounded requests.
    pub citations: Vec<GroundingCitation>,
}

impl GenerationReply {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            citations: Vec::new(),
        }
    }

    /// Decode the payload into the platform's typed result.
    ///
    /// The service is not trusted to honor the declared shape; a mismatch
    /// surfaces as [`GenerationError::UnexpectedShape`] with the payload
    /// preserved for diagnostics.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, GenerationError> {
        serde_json::from_value(self.payload.clone()).map_err(|e| {
            GenerationError::UnexpectedShape {
                detail: e.to_string(),
                raw: self.payload.to_string(),
            }
        })
    }
}

/// Text-generation port - the seam to the remote service.
///
/// No retries happen at this layer; a failed call surfaces immediately and
/// the caller decides whether to resubmit.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError>;
}
