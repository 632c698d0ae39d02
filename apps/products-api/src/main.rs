//! Products API - REST server over an in-memory catalog

use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{info, warn};

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if !config.api_key.is_configured() {
        warn!("API_KEY is not set; all protected routes will reject requests");
    }

    let state = AppState::seeded(config);
    info!(
        products = state.products.len().await,
        "Seeded in-memory product catalog"
    );

    let router = app::build_router(&state);

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
