//! Custom extractors for Axum handlers.
//!
//! Every extractor here rejects with [`AppError`](crate::errors::AppError),
//! so malformed input gets the same JSON error body as any other failure.

pub mod path_param;
pub mod query_pairs;
pub mod validated_json;

pub use path_param::PathParam;
pub use query_pairs::QueryPairs;
pub use validated_json::ValidatedJson;
