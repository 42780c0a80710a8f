use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cash Manager API",
        version = "1.0.0",
        description = "Complete API documentation for Cash Manager. \n\n**Authentication:** Most endpoints require JWT Bearer token authentication.\n\n**Features:**\n- Username/password authentication\n- User profile management\n- Product lookup by QR code identifier\n- Client APK download\n- Health monitoring",
        contact(
            name = "Cash Manager Team",
            email = "support@cash-manager.app"
        )
    ),
    paths(
        // App
        crate::api::app::hello,

        // Auth endpoints
        crate::api::auth::login,
        crate::api::auth::register,
        crate::api::auth::get_profile,

        // Users
        crate::api::users::update_me,

        // Products
        crate::api::products::get_product,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginResponse,

            // Users
            crate::models::UserProfile,
            crate::models::UpdateUserRequest,

            // Products
            crate::models::Product,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "App", description = "Service banner and client package download."),
        (name = "Auth", description = "Authentication endpoints. Username/password login issuing JWT bearer tokens."),
        (name = "Users", description = "Profile management for the authenticated user."),
        (name = "Products", description = "Product lookup by the identifier encoded on shelf QR codes."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build()
                ),
            );
        }
    }
}
