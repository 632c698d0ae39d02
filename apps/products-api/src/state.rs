//! Application state management

use domain_products::{seed_products, InMemoryProductRepository};

use crate::config::Config;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub products: InMemoryProductRepository,
}

impl AppState {
    /// State with the catalog seeded with its starting products.
    pub fn seeded(config: Config) -> Self {
        Self {
            config,
            products: InMemoryProductRepository::with_products(seed_products()),
        }
    }
}
