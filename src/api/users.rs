use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use crate::{database::MongoDB, services::user_service};
use crate::models::{UpdateUserRequest, UserProfile};
use crate::services::auth_service::Claims;

#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_me(
    db: web::Data<MongoDB>,
    req: HttpRequest,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    log::info!("✏️  PATCH /users/me");

    let claims = match req.extensions().get::<Claims>() {
        Some(c) => c.clone(),
        None => {
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": "Missing authentication"
            }))
        }
    };

    match user_service::update_user(&db, &claims.sub, &request).await {
        Ok(profile) => {
            log::info!("✅ Profile updated: {}", claims.sub);
            HttpResponse::Ok().json(profile)
        }
        Err(e) if e.contains("not found") => {
            log::warn!("⚠️ Update for missing user {}", claims.sub);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to update user {}: {}", claims.sub, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
