use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics, types::Health};

use crate::openapi::ApiDoc;

pub mod admin;
pub mod auth;
pub mod submissions;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_text() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: public form endpoints, admin auth,
/// and the token-guarded admin endpoints.
pub fn build_router(state: auth::ServerState, cors: CorsLayer) -> Router {
    // Public routes (health, metrics, docs, form submissions, admin auth)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/api/contact", post(submissions::create_contact))
        .route("/api/service-inquiry", post(submissions::create_service_inquiry))
        .route("/api/admin/register", post(auth::register))
        .route("/api/admin/login", post(auth::login))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Protected admin routes
    let admin_routes = Router::new()
        .route("/api/admin/contacts", get(admin::list_contacts))
        .route("/api/admin/inquiries", get(admin::list_inquiries))
        .route("/api/admin/inquiry/:id", put(admin::update_inquiry).delete(admin::delete_inquiry))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token_state,
        ));

    // Compose
    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
