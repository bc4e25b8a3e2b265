use std::sync::Arc;

use axum::{extract::{Request, State}, http::{header::AUTHORIZATION, StatusCode}, middleware::Next, response::Response, Json};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};

use common::{metrics, types::Ack};
use service::auth::{
    domain::{LoginInput, RegisterInput},
    repo::seaorm::SeaOrmAuthRepository,
    service::{AuthConfig, AuthService},
    token::Claims,
};

use crate::errors::{ApiError, ApiJson};

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmAuthRepository { db: db.clone() });
        Self { db, auth: Arc::new(AuthService::new(repo, auth)) }
    }
}

#[derive(Serialize)]
pub struct LoginOutput { pub access_token: String }

#[utoipa::path(post, path = "/api/admin/register", tag = "auth", request_body = crate::openapi::CredentialsRequest, responses((status = 201, description = "Admin created"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(State(state): State<ServerState>, ApiJson(input): ApiJson<RegisterInput>) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let admin = state.auth.register(input).await?;
    info!(admin_id = admin.id, "register_admin");
    Ok((StatusCode::CREATED, Json(Ack::new("Admin created"))))
}

#[utoipa::path(post, path = "/api/admin/login", tag = "auth", request_body = crate::openapi::CredentialsRequest, responses((status = 200, description = "Logged In", body = crate::openapi::LoginResponse), (status = 401, description = "Invalid credentials")))]
pub async fn login(State(state): State<ServerState>, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<LoginOutput>, ApiError> {
    match state.auth.login(input).await {
        Ok(session) => Ok(Json(LoginOutput { access_token: session.token })),
        Err(e) => {
            metrics::LOGIN_FAILURES_TOTAL.inc();
            Err(e.into())
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Route guard for admin endpoints: requires a valid `Authorization: Bearer <token>`.
/// Missing, malformed, forged or expired tokens all yield 401. Decoded [`Claims`]
/// are placed in request extensions.
pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let Some(header) = header else {
        warn!(path = %path, "missing Authorization header");
        metrics::AUTH_REJECTED_TOTAL.inc();
        return Err(ApiError::Unauthorized("missing bearer token".into()));
    };
    let Some(token) = bearer_token(header) else {
        warn!(path = %path, "invalid Authorization format (expect Bearer)");
        metrics::AUTH_REJECTED_TOTAL.inc();
        return Err(ApiError::Unauthorized("invalid Authorization header".into()));
    };

    match state.auth.verify_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert::<Claims>(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, err = %e, "token validation failed");
            metrics::AUTH_REJECTED_TOTAL.inc();
            Err(e.into())
        }
    }
}
