pub mod app;
pub mod auth;
pub mod health;
pub mod products;
pub mod swagger;
pub mod users;
