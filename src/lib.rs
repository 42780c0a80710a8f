pub mod api;
pub mod client;
pub mod database;
pub mod middleware;
pub mod models;
pub mod seeds;
pub mod services;
