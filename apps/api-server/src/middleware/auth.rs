//! Admin-session middleware and extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use muse_shared::ErrorResponse;

use crate::state::AppState;

/// Extractor that requires an active admin session.
///
/// Use this in handlers to gate admin routes:
/// ```ignore
/// async fn admin_route(_session: AdminSession) -> impl Responder {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

/// Error type for admin-session failures.
#[derive(Debug)]
pub enum AdminAuthError {
    NotSignedIn,
    Misconfigured,
}

impl std::fmt::Display for AdminAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminAuthError::NotSignedIn => write!(f, "admin session required"),
            AdminAuthError::Misconfigured => write!(f, "application state missing"),
        }
    }
}

impl actix_web::ResponseError for AdminAuthError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AdminAuthError::NotSignedIn => actix_web::http::StatusCode::UNAUTHORIZED,
            AdminAuthError::Misconfigured => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match self {
            AdminAuthError::NotSignedIn => {
                ErrorResponse::unauthorized("Please sign in as an admin to continue.")
            }
            AdminAuthError::Misconfigured => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for AdminSession {
    type Error = AdminAuthError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(AdminAuthError::Misconfigured);
            };

            if state.credentials.check_session().await {
                Ok(AdminSession)
            } else {
                Err(AdminAuthError::NotSignedIn)
            }
        })
    }
}
