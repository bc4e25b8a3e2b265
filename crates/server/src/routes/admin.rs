use axum::{extract::{FromRequest, Request, State}, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::Ack;
use models::{contact, service_inquiry};
use service::{auth::token::Claims, db::{contact_service, inquiry_service}, errors::ServiceError};

use crate::errors::{ApiError, ApiJson, ApiPath};
use crate::routes::auth::ServerState;

/// Contact as listed to admins.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: String,
}

impl From<contact::Model> for ContactView {
    fn from(c: contact::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            message: c.message,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Service inquiry as listed to admins.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InquiryView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub service_type: String,
    pub requirements: String,
    pub status: String,
    pub created_at: String,
}

impl From<service_inquiry::Model> for InquiryView {
    fn from(i: service_inquiry::Model) -> Self {
        Self {
            id: i.id,
            name: i.name,
            email: i.email,
            service_type: i.service_type,
            requirements: i.requirements,
            status: i.status,
            created_at: i.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInquiryInput {
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(get, path = "/api/admin/contacts", tag = "admin", security(("bearer" = [])), responses((status = 200, description = "OK", body = [ContactView]), (status = 401, description = "Unauthorized")))]
pub async fn list_contacts(State(state): State<ServerState>) -> Result<Json<Vec<ContactView>>, ApiError> {
    let rows = contact_service::list_contacts(&state.db).await?;
    info!(count = rows.len(), "list contacts");
    Ok(Json(rows.into_iter().map(ContactView::from).collect()))
}

#[utoipa::path(get, path = "/api/admin/inquiries", tag = "admin", security(("bearer" = [])), responses((status = 200, description = "OK", body = [InquiryView]), (status = 401, description = "Unauthorized")))]
pub async fn list_inquiries(State(state): State<ServerState>) -> Result<Json<Vec<InquiryView>>, ApiError> {
    let rows = inquiry_service::list_inquiries(&state.db).await?;
    info!(count = rows.len(), "list inquiries");
    Ok(Json(rows.into_iter().map(InquiryView::from).collect()))
}

#[utoipa::path(
    put, path = "/api/admin/inquiry/{id}", tag = "admin",
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Inquiry id")),
    request_body = crate::openapi::UpdateInquiryRequest,
    responses(
        (status = 200, description = "Inquiry updated"),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_inquiry(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
    request: Request,
) -> Result<Json<Ack>, ApiError> {
    // unknown ids are 404 whatever the body looks like
    if inquiry_service::get_inquiry(&state.db, id).await?.is_none() {
        return Err(ServiceError::not_found("inquiry").into());
    }
    let ApiJson(input) = ApiJson::<UpdateInquiryInput>::from_request(request, &state).await?;
    let updated = inquiry_service::update_inquiry_status(&state.db, id, input.status.as_deref()).await?;
    info!(id = updated.id, status = %updated.status, admin = %claims.sub, "inquiry updated");
    Ok(Json(Ack::new("Inquiry updated")))
}

#[utoipa::path(
    delete, path = "/api/admin/inquiry/{id}", tag = "admin",
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_inquiry(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Ack>, ApiError> {
    if !inquiry_service::delete_inquiry(&state.db, id).await? {
        return Err(ServiceError::not_found("inquiry").into());
    }
    info!(id = id, admin = %claims.sub, "inquiry deleted");
    Ok(Json(Ack::new("Inquiry deleted")))
}
