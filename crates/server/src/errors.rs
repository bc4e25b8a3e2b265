use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    /// Failed login; body is exactly `{"error": "Invalid credentials"}`.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidCredentials => ErrorBody { error: "Invalid credentials".into(), detail: None },
            ApiError::Internal(msg) => {
                // keep driver/hash details out of the response
                error!(error = %msg, "internal error");
                ErrorBody { error: "Internal Server Error".into(), detail: None }
            }
            ApiError::Validation(msg) => ErrorBody { error: "Validation Error".into(), detail: Some(msg) },
            ApiError::UnsupportedMediaType(msg) => ErrorBody { error: "Unsupported Media Type".into(), detail: Some(msg) },
            ApiError::Unauthorized(msg) => ErrorBody { error: "Unauthorized".into(), detail: Some(msg) },
            ApiError::NotFound(msg) => ErrorBody { error: "Not Found".into(), detail: Some(msg) },
            ApiError::Conflict(msg) => ErrorBody { error: "Conflict".into(), detail: Some(msg) },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ApiError::Validation(msg),
            AuthError::Conflict => ApiError::Conflict(e.to_string()),
            AuthError::Unauthorized => ApiError::InvalidCredentials,
            AuthError::TokenError(msg) => ApiError::Unauthorized(msg),
            AuthError::HashError(_) | AuthError::Repository(_) => {
                ApiError::Internal(format!("auth error {}: {}", e.code(), e))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(rejection.body_text()),
            _ => ApiError::Validation(rejection.body_text()),
        }
    }
}

// Non-numeric ids never match a record.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

/// `axum::Json` with rejections rendered as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections rendered as [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
    }

    async fn rendered(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let (status, body) = rendered(ApiError::Internal("secret driver msg".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn hash_failure_renders_as_internal() {
        let (status, body) = rendered(AuthError::HashError("argon2 params".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("detail").is_none());
        assert!(!body.to_string().contains("argon2"));
    }

    #[tokio::test]
    async fn invalid_credentials_body_is_exact() {
        let (_, body) = rendered(ApiError::InvalidCredentials).await;
        assert_eq!(body, serde_json::json!({"error": "Invalid credentials"}));
    }

    #[test]
    fn service_errors_map_by_kind() {
        assert!(matches!(ApiError::from(ServiceError::not_found("inquiry")), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from(ServiceError::Db("boom".into())), ApiError::Internal(_)));
        assert!(matches!(ApiError::from(AuthError::Unauthorized), ApiError::InvalidCredentials));
        assert!(matches!(ApiError::from(AuthError::Conflict), ApiError::Conflict(_)));
    }
}
