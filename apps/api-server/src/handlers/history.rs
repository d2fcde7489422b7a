//! Generation history handlers.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/history
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.history.list().await))
}

/// DELETE /api/history
pub async fn clear(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.history.clear().await?;
    Ok(HttpResponse::NoContent().finish())
}
