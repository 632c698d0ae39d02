//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`pipeline`]**: Ordered, short-circuiting guard chains
//! - **[`auth`]**: Shared-secret API key guard
//! - **[`server`]**: Router assembly, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (request logging, security headers)
//! - **[`errors`]**: Error taxonomy and the structured error responder
//! - **[`extractors`]**: Custom extractors (path, query, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new());
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod pipeline;
pub mod server;

// Re-export auth types
pub use auth::{API_KEY_HEADER, ApiKeyConfig, ApiKeyGuard};

// Re-export pipeline types
pub use pipeline::{Guard, GuardPipeline, GuardRequest, Outcome, guard_middleware};

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::{request_logger, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{PathParam, QueryPairs, ValidatedJson};
