//! Admin dashboard and access-control handlers.

use actix_web::{HttpResponse, web};

use muse_core::domain::is_valid_device_id;
use muse_infra::stores::CredentialStore;
use muse_shared::ApiResponse;
use muse_shared::dto::{
    AdminLoginRequest, CustomKeyRequest, IssueKeyRequest, IssuedKeyResponse, SessionResponse,
    VerifyAccessRequest, VerifyAccessResponse,
};

use crate::middleware::auth::AdminSession;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<AdminLoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if !CredentialStore::validate_credentials(&req.username, &req.password) {
        return Err(AppError::Unauthorized(
            "Invalid credentials. Please try again.".to_string(),
        ));
    }

    state.credentials.login(req.remember_me).await?;
    Ok(HttpResponse::Ok().json(SessionResponse { active: true }))
}

/// POST /api/admin/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.credentials.logout().await?;
    Ok(HttpResponse::Ok().json(SessionResponse { active: false }))
}

/// GET /api/admin/session
pub async fn session(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SessionResponse {
        active: state.credentials.check_session().await,
    }))
}

/// GET /api/admin/users
pub async fn list_users(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.credentials.managed_users().await))
}

/// POST /api/admin/keys
pub async fn issue_key(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<IssueKeyRequest>,
) -> AppResult<HttpResponse> {
    let device_id = body.into_inner().device_id.trim().to_string();
    if !is_valid_device_id(&device_id) {
        return Err(AppError::Validation(
            "Device ID must be a valid UUID.".to_string(),
        ));
    }

    let access_key = state.credentials.issue_key(&device_id).await?;
    Ok(HttpResponse::Created().json(IssuedKeyResponse {
        device_id,
        access_key,
    }))
}

/// POST /api/admin/keys/custom
///
/// Stores the supplied key verbatim; the lower-security escape hatch.
pub async fn issue_custom_key(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<CustomKeyRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let device_id = req.device_id.trim().to_string();
    if !is_valid_device_id(&device_id) {
        return Err(AppError::Validation(
            "Device ID must be a valid UUID.".to_string(),
        ));
    }
    let access_key = req.access_key.trim().to_string();
    if access_key.is_empty() {
        return Err(AppError::BadRequest(
            "Access key must not be empty.".to_string(),
        ));
    }

    state
        .credentials
        .issue_custom_key(&device_id, &access_key)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        IssuedKeyResponse {
            device_id,
            access_key,
        },
        "Caller-supplied keys skip every strength check; prefer generated keys.",
    )))
}

/// DELETE /api/admin/keys/{device_id}
pub async fn revoke_key(
    _session: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.credentials.revoke(path.into_inner().trim()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/admin/secret/cycle
///
/// Invalidates every issued access key. Irreversible.
pub async fn cycle_secret(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    state.credentials.cycle_master_secret().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        serde_json::json!({}),
        "All issued access keys are now invalid.",
    )))
}

/// POST /api/access/verify
///
/// Public check used by the optimizer gate: true only for an exact
/// registered (device id, access key) pair.
pub async fn verify_access(
    state: web::Data<AppState>,
    body: web::Json<VerifyAccessRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let authorized = state
        .credentials
        .verify_access(req.device_id.trim(), req.access_key.trim())
        .await;

    Ok(HttpResponse::Ok().json(VerifyAccessResponse { authorized }))
}
