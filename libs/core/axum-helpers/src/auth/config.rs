//! Configuration for API key authentication.

use core_config::{ConfigError, FromEnv, env_optional};
use std::fmt;

/// API key configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional) - shared secret for write routes. When unset or
///   empty, every protected request is rejected.
#[derive(Clone, Default)]
pub struct ApiKeyConfig {
    pub secret: Option<String>,
}

impl ApiKeyConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env_optional("API_KEY"),
        })
    }
}

impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_env() {
        temp_env::with_var("API_KEY", Some("s3cret"), || {
            let config = ApiKeyConfig::from_env().unwrap();
            assert_eq!(config.secret.as_deref(), Some("s3cret"));
            assert!(config.is_configured());
        });
    }

    #[test]
    fn test_api_key_unset_is_not_configured() {
        temp_env::with_var_unset("API_KEY", || {
            let config = ApiKeyConfig::from_env().unwrap();
            assert!(!config.is_configured());
        });
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", ApiKeyConfig::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }
}
