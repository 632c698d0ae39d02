//! HTTP middleware module.
//!
//! - Request logging (timestamp, method, path)
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{request_logger, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn(request_logger));
//! ```

pub mod logger;
pub mod security;

pub use logger::request_logger;
pub use security::security_headers;
