pub mod auth_service;
pub mod product_service;
pub mod user_service;

pub use product_service::*;
pub use user_service::*;
