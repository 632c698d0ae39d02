//! Path parameter extractor that fails with the standard error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Extractor for path parameters.
///
/// Behaves like [`Path`], but a segment that cannot be decoded (for example
/// percent-encoded bytes that are not UTF-8) is rejected as a 400
/// [`AppError`] instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_thing(PathParam(id): PathParam<String>) -> String {
///     format!("Thing: {}", id)
/// }
///
/// let app = Router::new().route("/things/{id}", get(get_thing));
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}
