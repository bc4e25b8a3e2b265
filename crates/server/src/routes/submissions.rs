use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use common::{metrics, types::Ack};
use models::{contact::NewContact, service_inquiry::NewServiceInquiry};
use service::db::{contact_service, inquiry_service};

use crate::errors::{ApiError, ApiJson};
use crate::routes::auth::ServerState;

#[utoipa::path(
    post, path = "/api/contact", tag = "public",
    request_body = crate::openapi::ContactRequest,
    responses(
        (status = 201, description = "Contact submitted successfully"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_contact(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<NewContact>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let created = contact_service::create_contact(&state.db, &input).await?;
    metrics::record_submission("contact");
    info!(id = created.id, "contact created");
    Ok((StatusCode::CREATED, Json(Ack::new("Contact submitted successfully"))))
}

#[utoipa::path(
    post, path = "/api/service-inquiry", tag = "public",
    request_body = crate::openapi::ServiceInquiryRequest,
    responses(
        (status = 201, description = "Service inquiry submitted"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_service_inquiry(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<NewServiceInquiry>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let created = inquiry_service::create_inquiry(&state.db, &input).await?;
    metrics::record_submission("service_inquiry");
    info!(id = created.id, "service inquiry created");
    Ok((StatusCode::CREATED, Json(Ack::new("Service inquiry submitted"))))
}
