pub mod products_seed;

pub use products_seed::seed_demo_products;
