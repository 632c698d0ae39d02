//! Landing page

use axum::{routing::get, Router};

pub const WELCOME: &str = "Welcome to the Product API! Go to /api/products to see all products.";

async fn welcome() -> &'static str {
    WELCOME
}

pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}
