//! API routes module

pub mod products;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Create all routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Top-level routes outside `/api`
pub fn root_routes(state: &AppState) -> Router {
    root::router().merge(axum_helpers::health_router(state.config.app))
}
