//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Bearer-token settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing secret
    pub jwt_secret: SecretString,

    /// Clock skew tolerated when checking `exp`
    #[serde(default = "default_token_leeway")]
    pub token_leeway_secs: u64,
}

impl AuthConfig {
    pub fn token_leeway(&self) -> Duration {
        Duration::from_secs(self.token_leeway_secs)
    }

    /// Validate authentication configuration.
    ///
    /// Any non-empty secret is accepted outside production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("KEYAKE__AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_leeway_secs: default_token_leeway(),
        }
    }
}

fn default_token_leeway() -> u64 {
    30
}
