//! Products API routes

use axum::Router;
use axum_helpers::ApiKeyGuard;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.products.clone());
    handlers::router(service, ApiKeyGuard::from(&state.config.api_key))
}
