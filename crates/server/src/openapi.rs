use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ContactRequest { pub name: String, pub email: String, pub phone: Option<String>, pub message: String }

#[derive(ToSchema)]
pub struct ServiceInquiryRequest { pub name: String, pub email: String, pub service_type: String, pub requirements: String }

#[derive(ToSchema)]
pub struct CredentialsRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginResponse { pub access_token: String }

#[derive(ToSchema)]
pub struct UpdateInquiryRequest { pub status: Option<String> }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::submissions::create_contact,
        crate::routes::submissions::create_service_inquiry,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::admin::list_contacts,
        crate::routes::admin::list_inquiries,
        crate::routes::admin::update_inquiry,
        crate::routes::admin::delete_inquiry,
    ),
    components(
        schemas(
            HealthResponse,
            ContactRequest,
            ServiceInquiryRequest,
            CredentialsRequest,
            LoginResponse,
            UpdateInquiryRequest,
            crate::routes::admin::ContactView,
            crate::routes::admin::InquiryView,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "public"),
        (name = "auth"),
        (name = "admin")
    )
)]
pub struct ApiDoc;
