use std::fmt;
use std::sync::Arc;

use super::config::ApiKeyConfig;
use crate::errors::{AppError, messages};
use crate::pipeline::{Guard, GuardRequest, Outcome};

/// Header carrying the caller's credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Forwards only when `x-api-key` equals the configured secret byte-for-byte.
#[derive(Clone)]
pub struct ApiKeyGuard {
    secret: Option<Arc<str>>,
}

impl ApiKeyGuard {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.map(Arc::from),
        }
    }

    fn accepts(&self, provided: Option<&[u8]>) -> bool {
        match (provided, self.secret.as_deref()) {
            (Some(provided), Some(secret)) => provided == secret.as_bytes(),
            _ => false,
        }
    }
}

impl From<&ApiKeyConfig> for ApiKeyGuard {
    fn from(config: &ApiKeyConfig) -> Self {
        Self::new(config.secret.clone())
    }
}

impl Guard for ApiKeyGuard {
    fn name(&self) -> &'static str {
        "api_key"
    }

    fn attempt(&self, request: &GuardRequest<'_>) -> Outcome {
        let provided = request.header(API_KEY_HEADER).map(|value| value.as_bytes());

        if self.accepts(provided) {
            return Outcome::Forward;
        }

        tracing::debug!(
            key_present = provided.is_some(),
            path = request.path(),
            "Rejected API key"
        );
        Outcome::Fail(AppError::unauthorized(
            messages::INVALID_API_KEY,
            Some(messages::API_KEY_HINT),
        ))
    }
}

impl fmt::Debug for ApiKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGuard")
            .field("configured", &self.secret.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::Request;

    fn attempt(guard: &ApiKeyGuard, key: Option<&str>) -> Outcome {
        let mut builder = Request::builder().method("POST").uri("/api/products");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        let body = Bytes::new();
        guard.attempt(&GuardRequest::new(&parts, &body))
    }

    #[test]
    fn test_matching_key_forwards() {
        let guard = ApiKeyGuard::new(Some("s3cret".into()));
        assert!(attempt(&guard, Some("s3cret")).is_forward());
    }

    #[test]
    fn test_missing_key_fails_with_hint() {
        let guard = ApiKeyGuard::new(Some("s3cret".into()));
        match attempt(&guard, None) {
            Outcome::Fail(AppError::Unauthorized { message, hint }) => {
                assert_eq!(message, messages::INVALID_API_KEY);
                assert_eq!(hint.as_deref(), Some("Use the x-api-key header."));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_comparison_is_exact() {
        let guard = ApiKeyGuard::new(Some("s3cret".into()));
        assert!(!attempt(&guard, Some("S3CRET")).is_forward());
        assert!(!attempt(&guard, Some("s3cret ")).is_forward());
        assert!(!attempt(&guard, Some("")).is_forward());
    }

    #[test]
    fn test_unconfigured_secret_rejects_everything() {
        let guard = ApiKeyGuard::new(None);
        assert!(!attempt(&guard, Some("anything")).is_forward());
        assert!(!attempt(&guard, None).is_forward());
    }
}
