use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Middleware that logs every request before it reaches routing.
///
/// Emits one `info` event with an RFC 3339 timestamp, the method, and the
/// request target (path plus query). The response is passed through untouched.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    tracing::info!(
        timestamp = %timestamp,
        method = %method,
        path = %target,
        "[{}] {} {}",
        timestamp,
        method,
        target
    );

    next.run(request).await
}
