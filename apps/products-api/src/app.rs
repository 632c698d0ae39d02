//! Router assembly

use axum::Router;

use crate::api;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Full application router: `/`, `/health`, `/api/...`, OpenAPI document,
/// 404 fallback, and the shared middleware stack.
pub fn build_router(state: &AppState) -> Router {
    axum_helpers::create_router::<ApiDoc>(api::routes(state), api::root_routes(state))
}
