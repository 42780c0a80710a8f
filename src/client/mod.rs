//! Lógica das telas do app mobile, sem a parte de UI: fluxo de login,
//! sessão de scan com agregação de códigos e carrinho.

pub mod api;
pub mod error;
pub mod scanner;
pub mod store;
pub mod theme;

pub use api::{ApiClient, AuthGateway, ProductGateway};
pub use error::ClientError;
pub use scanner::{CartNotice, ScanSession, SubmitReceipt, PRODUCT_CODE_PREFIX};
pub use store::{Cart, Session};
pub use theme::{Theme, DEFAULT_THEME};
