use actix_web::{web, HttpResponse};
use crate::{database::MongoDB, services::product_service};
use crate::models::Product;

#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    tag = "Products",
    params(
        ("product_id" = String, Path, description = "Identifier encoded on the product QR code")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let product_id = path.into_inner();
    log::info!("🛒 GET /products/{}", product_id);

    match product_service::get_product_by_id(&db, &product_id).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => {
            log::warn!("⚠️ Product not found: {}", product_id);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": format!("Product {} not found", product_id)
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to fetch product {}: {}", product_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
