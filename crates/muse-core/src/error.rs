//! Domain-level error types.

use thiserror::Error;

/// Failures on the generation path - one call to the remote
/// text-generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service refused the prompt (safety filter or policy block).
    #[error("the request was blocked (reason: {reason}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Blocked {
        reason: String,
        message: Option<String>,
    },

    /// The service returned no usable text and reported no block reason.
    #[error("the service returned an empty response")]
    Empty,

    /// Text came back but did not parse as JSON after fence stripping.
    /// The raw text is kept for diagnostics and never shown to end users.
    #[error("the service returned a response that was not valid JSON")]
    Malformed { raw: String },

    /// The JSON parsed but did not match the declared output shape.
    #[error("the service response did not match the expected shape: {detail}")]
    UnexpectedShape { detail: String, raw: String },

    /// Any lower-level failure talking to the service (network, auth, quota).
    #[error("{0}")]
    Transport(String),
}

/// Key-value storage failures.
#[derive(Debug, Error)]
pub enum KeyValueError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}
