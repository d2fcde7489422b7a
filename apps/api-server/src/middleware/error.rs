//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use muse_core::error::{GenerationError, KeyValueError};
use muse_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(String),
    NotFound(String),
    Unauthorized(String),
    Generation(GenerationError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Generation(err) => write!(f, "Generation failed: {}", err),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.clone()),
            AppError::Validation(detail) => ErrorResponse::unprocessable(detail.clone()),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail.clone()),
            AppError::Generation(err) => ErrorResponse::bad_gateway(user_message(err)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

impl From<KeyValueError> for AppError {
    fn from(err: KeyValueError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// The single user-facing string shown for any failed generation.
pub fn user_message(err: &GenerationError) -> String {
    format!("Failed to generate content. {err}. Please try again in a moment.")
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
