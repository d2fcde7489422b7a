//! Content calendar handlers.

use actix_web::{HttpResponse, web};

use muse_core::domain::{NewScheduledPost, ScheduledPostPatch};
use muse_shared::dto::SchedulePostRequest;

use crate::handlers::warn_on_persist_failure;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/calendar
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.calendar.list().await))
}

/// POST /api/calendar
pub async fn add(
    state: web::Data<AppState>,
    body: web::Json<SchedulePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (post, persisted) = state
        .calendar
        .add(NewScheduledPost {
            platform: req.platform,
            icon: req.icon,
            user_input: req.user_input,
            results: req.results,
            scheduled_at: req.scheduled_at,
            language: req.language,
        })
        .await;
    warn_on_persist_failure("calendar", persisted);

    Ok(HttpResponse::Created().json(post))
}

/// PATCH /api/calendar/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ScheduledPostPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let (updated, persisted) = state.calendar.update(&id, body.into_inner()).await;
    warn_on_persist_failure("calendar", persisted);

    match updated {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("no scheduled post with id {id}"))),
    }
}

/// DELETE /api/calendar/{id}
///
/// Deleting an unknown id is a no-op, not an error.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let (_, persisted) = state.calendar.delete(&path.into_inner()).await;
    warn_on_persist_failure("calendar", persisted);

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/calendar
pub async fn clear(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.calendar.clear().await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use muse_core::error::GenerationError;
    use muse_core::ports::{GenerationReply, GenerationRequest, TextGenerator};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    struct NeverCalledGenerator;

    #[async_trait]
    impl TextGenerator for NeverCalledGenerator {
        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> Result<GenerationReply, GenerationError> {
            panic!("calendar endpoints must not call the generator");
        }
    }

    fn schedule_body(label: &str, offset_hours: i64) -> serde_json::Value {
        serde_json::json!({
            "platform": "Instagram",
            "icon": "📸",
            "userInput": label,
            "results": { "hashtags": [] },
            "scheduledAt": (Utc::now() + Duration::hours(offset_hours)).to_rfc3339(),
            "language": "English"
        })
    }

    #[actix_web::test]
    async fn scheduling_and_listing_keeps_posts_in_time_order() {
        let state = AppState::for_tests(Arc::new(NeverCalledGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        for (label, offset) in [("second", 2), ("first", 1), ("third", 3)] {
            let req = test::TestRequest::post()
                .uri("/api/calendar")
                .set_json(schedule_body(label, offset))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/calendar").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let labels: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["userInput"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[actix_web::test]
    async fn rescheduling_moves_a_post_and_unknown_ids_are_not_found() {
        let state = AppState::for_tests(Arc::new(NeverCalledGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/calendar")
            .set_json(schedule_body("movable", 1))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/calendar/{id}"))
            .set_json(serde_json::json!({
                "scheduledAt": (Utc::now() + Duration::hours(9)).to_rfc3339()
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::patch()
            .uri("/api/calendar/unknown-id")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_is_idempotent() {
        let state = AppState::for_tests(Arc::new(NeverCalledGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/calendar")
            .set_json(schedule_body("ephemeral", 1))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/calendar/{id}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::NO_CONTENT);
        }

        assert!(state.calendar.list().await.is_empty());
    }
}
