use std::collections::HashSet;

use futures::future::try_join_all;

use super::api::ProductGateway;
use super::error::ClientError;
use super::store::Cart;

/// Marker que identifica QR codes da loja. Qualquer outro QR no campo
/// de visão da câmera (cartaz, embalagem) é ignorado.
pub const PRODUCT_CODE_PREFIX: &str = "cashmanager_product:";

/// Accumulates scanned product codes until the user confirms the batch.
/// Codes live in a set: re-scanning the same shelf label while the
/// camera is open never duplicates an item.
#[derive(Debug, Default)]
pub struct ScanSession {
    codes: HashSet<String>,
}

/// Alert shown after a batch lands in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartNotice {
    pub title: String,
    pub message: String,
}

impl CartNotice {
    fn for_count(added: usize) -> Option<CartNotice> {
        match added {
            0 => None,
            1 => Some(CartNotice {
                title: "Product added".to_string(),
                message: "The product has been added to your cart.".to_string(),
            }),
            _ => Some(CartNotice {
                title: "Products added".to_string(),
                message: "The products have been added to your cart.".to_string(),
            }),
        }
    }
}

/// Outcome of a successful batch submit.
#[derive(Debug)]
pub struct SubmitReceipt {
    pub added: usize,
    pub notice: Option<CartNotice>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one decoded QR payload. Returns true when the code
    /// entered the pending set, false for foreign QR codes and repeats.
    pub fn ingest(&mut self, payload: &str) -> bool {
        match payload.strip_prefix(PRODUCT_CODE_PREFIX) {
            Some(code) => self.codes.insert(code.to_string()),
            None => false,
        }
    }

    /// Convenience for camera frames carrying several QR codes at once.
    /// Returns how many codes were new.
    pub fn ingest_frame<I, S>(&mut self, payloads: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        payloads
            .into_iter()
            .filter(|payload| self.ingest(payload.as_ref()))
            .count()
    }

    pub fn pending(&self) -> usize {
        self.codes.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Resolves every pending code against the catalog and moves the
    /// batch into the cart. Tudo ou nada: se qualquer lookup falhar,
    /// o carrinho não muda e os códigos ficam pendentes para uma nova
    /// tentativa.
    pub async fn submit<G>(
        &mut self,
        api: &G,
        access_token: &str,
        cart: &mut Cart,
    ) -> Result<SubmitReceipt, ClientError>
    where
        G: ProductGateway + ?Sized,
    {
        if self.codes.is_empty() {
            return Ok(SubmitReceipt { added: 0, notice: None });
        }

        let ids: Vec<String> = self.codes.iter().cloned().collect();
        let lookups = ids.iter().map(|id| api.product_by_id(access_token, id));

        match try_join_all(lookups).await {
            Ok(products) => {
                let added = products.len();
                for product in products {
                    cart.add(product);
                }
                self.codes.clear();
                Ok(SubmitReceipt {
                    added,
                    notice: CartNotice::for_count(added),
                })
            }
            Err(e) => {
                log::warn!(
                    "🛒 Cart submit failed, keeping {} scanned codes: {}",
                    self.codes.len(),
                    e
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubCatalog {
        products: HashMap<String, Product>,
        missing: HashSet<String>,
        calls: AtomicUsize,
    }

    impl StubCatalog {
        fn new(ids: &[&str]) -> Self {
            let products = ids
                .iter()
                .map(|id| {
                    (
                        id.to_string(),
                        Product {
                            product_id: id.to_string(),
                            name: format!("Product {}", id),
                            price: 1.0,
                            description: None,
                            is_active: true,
                            created_at: 0,
                            updated_at: 0,
                        },
                    )
                })
                .collect();

            Self {
                products,
                missing: HashSet::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn lookups(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductGateway for StubCatalog {
        async fn product_by_id(
            &self,
            _access_token: &str,
            product_id: &str,
        ) -> Result<Product, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.missing.contains(product_id) {
                return Err(ClientError::Api {
                    status: 404,
                    message: format!("Product {} not found", product_id),
                });
            }

            self.products
                .get(product_id)
                .cloned()
                .ok_or_else(|| ClientError::Api {
                    status: 404,
                    message: format!("Product {} not found", product_id),
                })
        }
    }

    #[test]
    fn test_ingest_strips_prefix_and_deduplicates() {
        let mut session = ScanSession::new();

        assert!(session.ingest("cashmanager_product:sku-1001"));
        assert!(!session.ingest("cashmanager_product:sku-1001"));
        assert!(session.ingest("cashmanager_product:sku-1002"));

        assert_eq!(session.pending(), 2);
        assert!(session.contains("sku-1001"));
        assert!(session.contains("sku-1002"));
    }

    #[test]
    fn test_ingest_ignores_foreign_qr_codes() {
        let mut session = ScanSession::new();

        assert!(!session.ingest("https://example.com/promo"));
        assert!(!session.ingest("sku-1001"));
        assert!(!session.ingest(""));

        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn test_ingest_keeps_empty_code_after_prefix() {
        let mut session = ScanSession::new();

        // Etiqueta mal gerada: só o marker, código vazio
        assert!(session.ingest("cashmanager_product:"));
        assert_eq!(session.pending(), 1);
        assert!(session.contains(""));
    }

    #[test]
    fn test_ingest_frame_counts_only_new_codes() {
        let mut session = ScanSession::new();

        let added = session.ingest_frame([
            "cashmanager_product:sku-1001",
            "cashmanager_product:sku-1001",
            "cashmanager_product:sku-1002",
            "https://example.com",
        ]);

        assert_eq!(added, 2);
        assert_eq!(session.pending(), 2);
    }

    #[tokio::test]
    async fn test_submit_with_nothing_scanned_calls_no_lookups() {
        let catalog = StubCatalog::new(&["sku-1001"]);
        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        let receipt = session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(receipt.added, 0);
        assert!(receipt.notice.is_none());
        assert_eq!(catalog.lookups(), 0);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_submit_single_product_uses_singular_notice() {
        let catalog = StubCatalog::new(&["sku-1001"]);
        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        session.ingest("cashmanager_product:sku-1001");
        let receipt = session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(receipt.added, 1);
        let notice = receipt.notice.unwrap();
        assert_eq!(notice.title, "Product added");
        assert_eq!(notice.message, "The product has been added to your cart.");
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_batch_uses_plural_notice() {
        let catalog = StubCatalog::new(&["sku-1001", "sku-1002", "sku-1003"]);
        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        session.ingest("cashmanager_product:sku-1001");
        session.ingest("cashmanager_product:sku-1002");
        session.ingest("cashmanager_product:sku-1003");

        let receipt = session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(receipt.added, 3);
        let notice = receipt.notice.unwrap();
        assert_eq!(notice.title, "Products added");
        assert_eq!(notice.message, "The products have been added to your cart.");
        assert_eq!(cart.len(), 3);
        assert_eq!(catalog.lookups(), 3);
    }

    #[tokio::test]
    async fn test_submit_clears_codes_so_rescan_works() {
        let catalog = StubCatalog::new(&["sku-1001"]);
        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        session.ingest("cashmanager_product:sku-1001");
        session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(session.pending(), 0);

        // Depois do submit o mesmo código pode ser escaneado de novo
        assert!(session.ingest("cashmanager_product:sku-1001"));
        session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(cart.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_codes_and_cart_untouched() {
        let mut catalog = StubCatalog::new(&["sku-1001"]);
        catalog.missing.insert("sku-9999".to_string());

        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        session.ingest("cashmanager_product:sku-1001");
        session.ingest("cashmanager_product:sku-9999");

        let result = session.submit(&catalog, "token", &mut cart).await;

        assert!(result.is_err());
        assert!(cart.is_empty());
        assert_eq!(session.pending(), 2);
        assert!(session.contains("sku-1001"));
        assert!(session.contains("sku-9999"));
    }

    #[tokio::test]
    async fn test_failed_submit_can_be_retried_after_fix() {
        let mut catalog = StubCatalog::new(&["sku-1001", "sku-2002"]);
        catalog.missing.insert("sku-2002".to_string());

        let mut session = ScanSession::new();
        let mut cart = Cart::new();

        session.ingest("cashmanager_product:sku-1001");
        session.ingest("cashmanager_product:sku-2002");

        assert!(session.submit(&catalog, "token", &mut cart).await.is_err());

        // Produto volta ao catálogo: a retentativa envia o mesmo lote
        catalog.missing.clear();
        let receipt = session.submit(&catalog, "token", &mut cart).await.unwrap();

        assert_eq!(receipt.added, 2);
        assert_eq!(cart.len(), 2);
        assert_eq!(session.pending(), 0);
    }
}
