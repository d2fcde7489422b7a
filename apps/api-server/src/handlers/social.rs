//! Social content handlers: YouTube, LinkedIn, Instagram, Facebook.

use actix_web::{HttpResponse, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use muse_core::domain::{FacebookContent, HashtagSet, InstagramContent, Platform, YouTubeContent};
use muse_core::ports::Attachment;
use muse_core::prompt::{self, SocialInput};
use muse_shared::dto::{AttachmentPayload, SocialGenerateRequest};

use crate::handlers::{check_len, record_history};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_INPUT_LENGTH: usize = 5_000;

/// POST /api/social/youtube
pub async fn youtube(
    state: web::Data<AppState>,
    body: web::Json<SocialGenerateRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let attachment = decode_attachment(req.attachment.take())?;
    validate(&req, &attachment)?;

    let request = prompt::youtube(
        SocialInput {
            text: req.input.trim(),
            language: &req.language,
            attachment,
        },
        req.category.as_deref(),
    );
    let content: YouTubeContent = state.generator.generate(request).await?.decode()?;

    let results = serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;
    record_history(&state, Platform::YouTube, req.input.clone(), results, &req.language).await;

    Ok(HttpResponse::Ok().json(content))
}

/// POST /api/social/linkedin
pub async fn linkedin(
    state: web::Data<AppState>,
    body: web::Json<SocialGenerateRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let attachment = decode_attachment(req.attachment.take())?;
    validate(&req, &attachment)?;

    let request = prompt::linkedin(SocialInput {
        text: req.input.trim(),
        language: &req.language,
        attachment,
    });
    let content: HashtagSet = state.generator.generate(request).await?.decode()?;

    let results = serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;
    record_history(&state, Platform::LinkedIn, req.input.clone(), results, &req.language).await;

    Ok(HttpResponse::Ok().json(content))
}

/// POST /api/social/instagram
pub async fn instagram(
    state: web::Data<AppState>,
    body: web::Json<SocialGenerateRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let attachment = decode_attachment(req.attachment.take())?;
    validate(&req, &attachment)?;

    let request = prompt::instagram(SocialInput {
        text: req.input.trim(),
        language: &req.language,
        attachment,
    });
    let content: InstagramContent = state.generator.generate(request).await?.decode()?;

    let results = serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;
    record_history(&state, Platform::Instagram, req.input.clone(), results, &req.language).await;

    Ok(HttpResponse::Ok().json(content))
}

/// POST /api/social/facebook
pub async fn facebook(
    state: web::Data<AppState>,
    body: web::Json<SocialGenerateRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let attachment = decode_attachment(req.attachment.take())?;
    validate(&req, &attachment)?;

    let request = prompt::facebook(SocialInput {
        text: req.input.trim(),
        language: &req.language,
        attachment,
    });
    let content: FacebookContent = state.generator.generate(request).await?.decode()?;

    let results = serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;
    record_history(&state, Platform::Facebook, req.input.clone(), results, &req.language).await;

    Ok(HttpResponse::Ok().json(content))
}

/// Decode and size-check the optional attachment before anything reaches
/// the network.
fn decode_attachment(
    payload: Option<AttachmentPayload>,
) -> Result<Option<Attachment>, AppError> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    if payload.mime_type.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Attachment mime type is required.".to_string(),
        ));
    }

    let data = BASE64
        .decode(payload.data.as_bytes())
        .map_err(|_| AppError::BadRequest("Attachment is not valid base64 data.".to_string()))?;
    if data.len() > Attachment::MAX_BYTES {
        return Err(AppError::Validation(
            "Attachment exceeds the 499 MB size limit.".to_string(),
        ));
    }

    Ok(Some(Attachment {
        mime_type: payload.mime_type,
        data,
    }))
}

/// A submission needs text or a file; text length is capped.
fn validate(
    req: &SocialGenerateRequest,
    attachment: &Option<Attachment>,
) -> Result<(), AppError> {
    check_len(&req.input, MAX_INPUT_LENGTH, "Input")?;
    if req.input.trim().is_empty() && attachment.is_none() {
        return Err(AppError::BadRequest(
            "Provide a description or attach a file.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use async_trait::async_trait;

    use muse_core::error::GenerationError;
    use muse_core::ports::{GenerationReply, GenerationRequest, TextGenerator};

    use super::*;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    /// Echoes whether an attachment reached the generator.
    struct HashtagGenerator;

    #[async_trait]
    impl TextGenerator for HashtagGenerator {
        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> Result<GenerationReply, GenerationError> {
            assert!(request.shape.is_some());
            Ok(GenerationReply::new(serde_json::json!({
                "hashtags": [{
                    "keyword": "#coffee",
                    "searchVolume": "High",
                    "trendingRank": 1,
                    "userIntent": "Informational",
                    "competition": "Low",
                    "cpc": "$0.10 - $0.30"
                }]
            })))
        }
    }

    #[actix_web::test]
    async fn linkedin_generation_records_history_with_platform_metadata() {
        let state = AppState::for_tests(Arc::new(HashtagGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/social/linkedin")
            .set_json(serde_json::json!({
                "input": "We just shipped our new roastery dashboard",
                "language": "English"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let history = state.history.list().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].platform, "LinkedIn");
        assert_eq!(history[0].icon, "💼");
    }

    #[actix_web::test]
    async fn file_only_submissions_are_accepted() {
        let state = AppState::for_tests(Arc::new(HashtagGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/social/linkedin")
            .set_json(serde_json::json!({
                "input": "",
                "language": "English",
                "attachment": { "mimeType": "image/png", "data": BASE64.encode([1u8, 2, 3]) }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn empty_submissions_are_rejected() {
        let state = AppState::for_tests(Arc::new(HashtagGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/social/instagram")
            .set_json(serde_json::json!({
                "input": "   ",
                "language": "English"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(state.history.list().await.is_empty());
    }

    #[::std::prelude::v1::test]
    fn invalid_base64_attachments_are_rejected() {
        let err = decode_attachment(Some(AttachmentPayload {
            mime_type: "image/png".to_string(),
            data: "not base64!!!".to_string(),
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
