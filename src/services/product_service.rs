use crate::{database::MongoDB, models::Product};
use mongodb::bson::doc;

/// Looks a product up by the identifier printed on its QR code.
/// Produtos inativos ficam invisíveis para o app.
pub async fn get_product_by_id(
    db: &MongoDB,
    product_id: &str,
) -> Result<Option<Product>, String> {
    let collection = db.collection::<Product>("products");

    let filter = doc! {
        "product_id": product_id,
        "is_active": true,
    };

    collection
        .find_one(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))
}
