//! HTTP handlers and route configuration.

mod admin;
mod calendar;
mod health;
mod history;
mod seo;
mod social;

use actix_web::web;

use muse_core::domain::{NewHistoryItem, Platform};
use muse_core::error::KeyValueError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/languages", web::get().to(health::languages))
            .route("/access/verify", web::post().to(admin::verify_access))
            // Generators
            .service(
                web::scope("/seo")
                    .route("/keywords", web::post().to(seo::keywords))
                    .route("/brief", web::post().to(seo::brief))
                    .route("/local", web::post().to(seo::local))
                    .route("/density", web::post().to(seo::density)),
            )
            .service(
                web::scope("/social")
                    .route("/youtube", web::post().to(social::youtube))
                    .route("/linkedin", web::post().to(social::linkedin))
                    .route("/instagram", web::post().to(social::instagram))
                    .route("/facebook", web::post().to(social::facebook)),
            )
            // Local persistence
            .service(
                web::scope("/calendar")
                    .route("", web::get().to(calendar::list))
                    .route("", web::post().to(calendar::add))
                    .route("", web::delete().to(calendar::clear))
                    .route("/{id}", web::patch().to(calendar::update))
                    .route("/{id}", web::delete().to(calendar::delete)),
            )
            .service(
                web::scope("/history")
                    .route("", web::get().to(history::list))
                    .route("", web::delete().to(history::clear)),
            )
            // Admin dashboard
            .service(
                web::scope("/admin")
                    .route("/login", web::post().to(admin::login))
                    .route("/logout", web::post().to(admin::logout))
                    .route("/session", web::get().to(admin::session))
                    .route("/users", web::get().to(admin::list_users))
                    .route("/keys", web::post().to(admin::issue_key))
                    .route("/keys/custom", web::post().to(admin::issue_custom_key))
                    .route("/keys/{device_id}", web::delete().to(admin::revoke_key))
                    .route("/secret/cycle", web::post().to(admin::cycle_secret)),
            ),
    );
}

/// Record a successful generation. Persistence is best-effort: a failed
/// write is logged, never surfaced as a request failure.
pub(crate) async fn record_history(
    state: &AppState,
    platform: Platform,
    user_input: String,
    results: serde_json::Value,
    language: &str,
) {
    let (_, persisted) = state
        .history
        .record(NewHistoryItem {
            platform: platform.name().to_string(),
            icon: platform.icon().to_string(),
            user_input,
            results,
            language: Some(language.to_string()),
        })
        .await;

    warn_on_persist_failure("history", persisted);
}

pub(crate) fn warn_on_persist_failure(store: &str, result: Result<(), KeyValueError>) {
    if let Err(e) = result {
        tracing::warn!("failed to persist {store}: {e}");
    }
}

/// Reject input longer than the surface's limit before any network call.
pub(crate) fn check_len(value: &str, max: usize, what: &str) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{what} cannot exceed {max} characters."
        )));
    }
    Ok(())
}
