//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use muse_core::domain::SUPPORTED_LANGUAGES;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(_state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// Output languages the generators accept.
///
/// GET /api/languages
pub async fn languages() -> HttpResponse {
    HttpResponse::Ok().json(SUPPORTED_LANGUAGES)
}
