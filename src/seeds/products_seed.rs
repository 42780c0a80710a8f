use crate::database::MongoDB;
use crate::models::Product;
use mongodb::bson::doc;

/// Seed do catálogo de demonstração no MongoDB.
/// Só insere se a collection estiver vazia.
pub async fn seed_demo_products(db: &MongoDB) {
    let collection = db.collection::<Product>("products");

    let count = collection.count_documents(doc! {}).await.unwrap_or(0);

    if count > 0 {
        log::info!("📋 Products: {} already in DB — skipping seed", count);
        return;
    }

    log::info!("📋 Products: seeding demo catalog into MongoDB...");

    let now = chrono::Utc::now().timestamp();
    let products = build_demo_catalog(now);

    match collection.insert_many(&products).await {
        Ok(result) => {
            log::info!(
                "   ✅ Inserted {} demo products into products collection",
                result.inserted_ids.len()
            );
        }
        Err(e) => {
            log::error!("   ❌ Failed to seed demo products: {}", e);
        }
    }
}

/// Catálogo de demonstração. Os ids batem com os QR codes
/// impressos nas etiquetas da loja de teste.
fn build_demo_catalog(now: i64) -> Vec<Product> {
    vec![
        Product {
            product_id: "sku-1001".into(),
            name: "Still Water 50cl".into(),
            price: 0.80,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            product_id: "sku-1002".into(),
            name: "Espresso Beans 250g".into(),
            price: 6.50,
            description: Some("Torra média, origem única".into()),
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            product_id: "sku-1003".into(),
            name: "Dark Chocolate Bar".into(),
            price: 2.20,
            description: Some("70% cacau".into()),
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            product_id: "sku-1004".into(),
            name: "Croissant".into(),
            price: 1.10,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            product_id: "sku-1005".into(),
            name: "Orange Juice 1L".into(),
            price: 2.90,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            product_id: "sku-1006".into(),
            name: "Canvas Tote Bag".into(),
            price: 9.90,
            description: Some("Item de teste para produto não alimentício".into()),
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        // Produto desativado de propósito: valida que lookups o ignoram
        Product {
            product_id: "sku-1099".into(),
            name: "Discontinued Sample".into(),
            price: 0.01,
            description: None,
            is_active: false,
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_catalog_ids_are_unique() {
        let catalog = build_demo_catalog(0);
        let ids: HashSet<&str> = catalog.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_demo_catalog_has_active_and_inactive_products() {
        let catalog = build_demo_catalog(0);
        assert!(catalog.iter().any(|p| p.is_active));
        assert!(catalog.iter().any(|p| !p.is_active));
        assert!(catalog.iter().all(|p| p.price > 0.0));
    }
}
