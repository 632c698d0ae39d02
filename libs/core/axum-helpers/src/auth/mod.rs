//! Shared-secret authentication.
//!
//! Protected routes require the `x-api-key` header to match the configured
//! secret exactly. The check is a [`Guard`](crate::pipeline::Guard) so it
//! composes with other guards in a [`GuardPipeline`](crate::pipeline::GuardPipeline).
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, ApiKeyGuard};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//! let guards = GuardPipeline::new().guard(ApiKeyGuard::from(&config));
//! ```

pub mod api_key;
pub mod config;

pub use api_key::{API_KEY_HEADER, ApiKeyGuard};
pub use config::ApiKeyConfig;
