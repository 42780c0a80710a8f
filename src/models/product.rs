use serde::{Deserialize, Serialize};

/// Produto do catálogo (armazenado no MongoDB).
/// O documento Mongo carrega um `_id` próprio que nunca sai do servidor;
/// o app só conhece o `product_id` impresso no QR code.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    /// Identifier encoded on the shelf QR code
    pub product_id: String,

    pub name: String,

    /// Unit price in the store currency
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inactive products are hidden from lookups
    pub is_active: bool,

    /// Timestamp de criação
    pub created_at: i64,

    /// Timestamp de última atualização
    pub updated_at: i64,
}
