//! Website SEO handlers: keyword research, content briefs, grounded
//! local-search keywords, and keyword-density annotation.

use actix_web::{HttpResponse, web};
use futures::future::try_join_all;

use muse_core::density;
use muse_core::domain::{
    ContentBrief, LocalKeywordSet, MetaDescriptionSet, Platform, SchemaMarkup, SeoKeywordSet,
};
use muse_core::ports::GeoPoint;
use muse_core::prompt::{self, SeoInput, SeoInputMode};
use muse_shared::dto::{
    ContentBriefRequest, DensityRequest, DensityResponse, LocalKeywordsRequest,
    LocalKeywordsResponse, SeoGenerateRequest, SeoGenerateResponse, SeoResultBlock,
};

use crate::handlers::{check_len, record_history};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_DESCRIPTION_LENGTH: usize = 5_000;
const MAX_CONTENT_LENGTH: usize = 20_000;
const MAX_COMPETITORS_LENGTH: usize = 2_000;
const MAX_ANALYSIS_LENGTH: usize = 20_000;
const MAX_TARGET_KEYWORD_LENGTH: usize = 200;

/// POST /api/seo/keywords
///
/// Description mode treats each non-empty input line as its own business;
/// every line fans out into three concurrent requests (keywords, meta
/// descriptions, schema markup) and all of them are awaited jointly,
/// fail-fast. One history item is recorded for the whole submission, and
/// only when every request succeeded.
pub async fn keywords(
    state: web::Data<AppState>,
    body: web::Json<SeoGenerateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let max = match req.mode {
        SeoInputMode::Description => MAX_DESCRIPTION_LENGTH,
        SeoInputMode::Content => MAX_CONTENT_LENGTH,
    };
    check_len(&req.input, max, "Input")?;
    if let Some(competitors) = &req.competitors {
        check_len(competitors, MAX_COMPETITORS_LENGTH, "Competitors list")?;
    }

    let inputs: Vec<&str> = match req.mode {
        SeoInputMode::Description => req
            .input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
        SeoInputMode::Content => {
            if req.input.trim().is_empty() {
                Vec::new()
            } else {
                vec![req.input.as_str()]
            }
        }
    };
    if inputs.is_empty() {
        return Err(AppError::BadRequest(
            "Provide at least one non-empty input.".to_string(),
        ));
    }

    let blocks = try_join_all(inputs.iter().map(|input| {
        let seo_input = SeoInput {
            text: input,
            mode: req.mode,
            language: &req.language,
            competitors: req.competitors.as_deref(),
        };
        generate_block(&state, seo_input, input)
    }))
    .await?;

    let user_input = match req.mode {
        SeoInputMode::Description => req.input.clone(),
        SeoInputMode::Content => format!("[Content Analysis]\n{}...", truncate(&req.input, 500)),
    };
    let results = serde_json::to_value(&blocks).map_err(|e| AppError::Internal(e.to_string()))?;
    record_history(&state, Platform::WebsiteSeo, user_input, results, &req.language).await;

    Ok(HttpResponse::Ok().json(SeoGenerateResponse { results: blocks }))
}

async fn generate_block(
    state: &AppState,
    input: SeoInput<'_>,
    label: &str,
) -> Result<SeoResultBlock, AppError> {
    let (keywords, meta, markup) = tokio::try_join!(
        async {
            state
                .generator
                .generate(prompt::seo_keywords(input))
                .await?
                .decode::<SeoKeywordSet>()
        },
        async {
            state
                .generator
                .generate(prompt::meta_descriptions(input))
                .await?
                .decode::<MetaDescriptionSet>()
        },
        async {
            state
                .generator
                .generate(prompt::schema_markup(input))
                .await?
                .decode::<SchemaMarkup>()
        },
    )?;

    Ok(SeoResultBlock {
        input: label.to_string(),
        keywords: keywords.keywords,
        meta_descriptions: meta.meta_descriptions,
        schema_markup: markup,
    })
}

/// POST /api/seo/brief
pub async fn brief(
    state: web::Data<AppState>,
    body: web::Json<ContentBriefRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let target_keyword = req.target_keyword.trim();
    if target_keyword.is_empty() {
        return Err(AppError::BadRequest("Provide a target keyword.".to_string()));
    }
    check_len(target_keyword, MAX_TARGET_KEYWORD_LENGTH, "Target keyword")?;
    if let Some(competitors) = &req.competitors {
        check_len(competitors, MAX_COMPETITORS_LENGTH, "Competitors list")?;
    }

    let request = prompt::content_brief(target_keyword, &req.language, req.competitors.as_deref());
    let brief: ContentBrief = state.generator.generate(request).await?.decode()?;

    let mut user_input = format!("Target Keyword: {target_keyword}");
    if let Some(competitors) = req
        .competitors
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        user_input.push_str(&format!("\nCompetitors: {competitors}"));
    }
    let results = serde_json::json!({ "contentBrief": &brief });
    record_history(&state, Platform::ContentBrief, user_input, results, &req.language).await;

    Ok(HttpResponse::Ok().json(brief))
}

/// POST /api/seo/local
///
/// The grounded variant: carries the caller's coordinates and returns the
/// keyword list together with any location-grounding citations.
pub async fn local(
    state: web::Data<AppState>,
    body: web::Json<LocalKeywordsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = req.input.trim();
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "Provide a business name or description.".to_string(),
        ));
    }
    check_len(input, MAX_DESCRIPTION_LENGTH, "Input")?;
    if let Some(competitors) = &req.competitors {
        check_len(competitors, MAX_COMPETITORS_LENGTH, "Competitors list")?;
    }
    if !(-90.0..=90.0).contains(&req.latitude) || !(-180.0..=180.0).contains(&req.longitude) {
        return Err(AppError::Validation(
            "Location must be a valid latitude/longitude pair.".to_string(),
        ));
    }

    let location = GeoPoint {
        latitude: req.latitude,
        longitude: req.longitude,
    };
    let request = prompt::local_keywords(input, &req.language, location, req.competitors.as_deref());
    let reply = state.generator.generate(request).await?;
    let set: LocalKeywordSet = reply.decode()?;

    let user_input = format!(
        "Business: {input}\nLocation: {:.4}, {:.4}",
        req.latitude, req.longitude
    );
    let results = serde_json::json!({ "Google Maps Keywords": &set.keywords });
    record_history(&state, Platform::LocalSeo, user_input, results, &req.language).await;

    Ok(HttpResponse::Ok().json(LocalKeywordsResponse {
        keywords: set.keywords,
        citations: reply.citations,
    }))
}

/// POST /api/seo/density
///
/// Purely local: annotates the supplied keywords with their density in the
/// analysis text. No generation call is made.
pub async fn density(body: web::Json<DensityRequest>) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    check_len(&req.analysis_text, MAX_ANALYSIS_LENGTH, "Analysis text")?;

    let mut keywords = req.keywords;
    if !req.analysis_text.trim().is_empty() {
        density::annotate(&mut keywords, &req.analysis_text);
    }

    Ok(HttpResponse::Ok().json(DensityResponse { keywords }))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use async_trait::async_trait;

    use muse_core::error::GenerationError;
    use muse_core::ports::{GenerationReply, GenerationRequest, TextGenerator};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    /// Answers each request based on the shape it declares.
    struct CannedGenerator;

    fn canned_payload(request: &GenerationRequest) -> Option<serde_json::Value> {
        let properties = request.shape.as_ref()?.get("properties")?.clone();
        if properties.get("keywords").is_some() {
            Some(serde_json::json!({
                "keywords": [{
                    "keyword": "coffee shop brooklyn",
                    "searchVolume": "High",
                    "trendingRank": 2,
                    "userIntent": "Local Transactional",
                    "competition": "Medium",
                    "cpc": "$1.00 - $3.00"
                }]
            }))
        } else if properties.get("metaDescriptions").is_some() {
            Some(serde_json::json!({
                "metaDescriptions": ["Brooklyn's coziest coffee shop. Visit us today."]
            }))
        } else if properties.get("schemaType").is_some() {
            Some(serde_json::json!({
                "schemaType": "LocalBusiness",
                "jsonLd": "{\"@context\":\"https://schema.org\"}"
            }))
        } else {
            None
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> Result<GenerationReply, GenerationError> {
            match canned_payload(&request) {
                Some(payload) => Ok(GenerationReply::new(payload)),
                None => Err(GenerationError::Empty),
            }
        }
    }

    /// Succeeds for keywords and meta descriptions, fails for schema markup.
    struct PartialFailureGenerator;

    #[async_trait]
    impl TextGenerator for PartialFailureGenerator {
        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> Result<GenerationReply, GenerationError> {
            let is_schema_markup = request
                .shape
                .as_ref()
                .and_then(|s| s.get("properties"))
                .and_then(|p| p.get("schemaType"))
                .is_some();
            if is_schema_markup {
                return Err(GenerationError::Blocked {
                    reason: "SAFETY".to_string(),
                    message: None,
                });
            }
            canned_payload(&request)
                .map(GenerationReply::new)
                .ok_or(GenerationError::Empty)
        }
    }

    #[actix_web::test]
    async fn successful_generation_records_one_history_item() {
        let state = AppState::for_tests(Arc::new(CannedGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/seo/keywords")
            .set_json(serde_json::json!({
                "input": "A local coffee shop in Brooklyn",
                "language": "English"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let history = state.history.list().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].platform, "Website SEO");
        assert_eq!(history[0].icon, "🌐");
        assert_eq!(history[0].user_input, "A local coffee shop in Brooklyn");
    }

    #[actix_web::test]
    async fn one_failed_request_aborts_the_whole_submission() {
        let state = AppState::for_tests(Arc::new(PartialFailureGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/seo/keywords")
            .set_json(serde_json::json!({
                "input": "A local coffee shop in Brooklyn",
                "language": "English"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);

        assert!(state.history.list().await.is_empty());
    }

    #[actix_web::test]
    async fn each_description_line_gets_its_own_result_block() {
        let state = AppState::for_tests(Arc::new(CannedGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/seo/keywords")
            .set_json(serde_json::json!({
                "input": "my-store.com\n\nA local coffee shop in Brooklyn",
                "language": "English"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["input"], "my-store.com");
        assert_eq!(results[1]["input"], "A local coffee shop in Brooklyn");

        // The whole submission is still one history item.
        assert_eq!(state.history.list().await.len(), 1);
    }

    #[actix_web::test]
    async fn oversized_input_is_rejected_before_any_generation() {
        let state = AppState::for_tests(Arc::new(CannedGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/seo/keywords")
            .set_json(serde_json::json!({
                "input": "x".repeat(5_001),
                "language": "English"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
        assert!(state.history.list().await.is_empty());
    }

    #[actix_web::test]
    async fn density_endpoint_annotates_without_generating() {
        let state = AppState::for_tests(Arc::new(CannedGenerator)).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/seo/density")
            .set_json(serde_json::json!({
                "analysisText": "fresh bread fresh bread daily",
                "keywords": [{
                    "keyword": "bread",
                    "searchVolume": "High",
                    "trendingRank": 1,
                    "userIntent": "Commercial",
                    "competition": "Low",
                    "cpc": "$0.10 - $0.40"
                }]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["keywords"][0]["density"], 40.0);
    }
}
