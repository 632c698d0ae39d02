use axum::extract::OriginalUri;

use super::{messages, AppError};

/// Fallback for unmatched routes.
///
/// Register it with both `Router::fallback` and
/// `Router::method_not_allowed_fallback` so a known path with an unsupported
/// method is reported the same way as an unknown path.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    AppError::NotFound(messages::route_not_found(target))
}
