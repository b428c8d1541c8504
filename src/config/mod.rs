//! Application configuration.
//!
//! Values come from environment variables with the `KEYAKE` prefix; nested
//! sections are separated by a double underscore:
//!
//! - `KEYAKE__SERVER__PORT=8080` -> `server.port = 8080`
//! - `KEYAKE__DATABASE__URL=...` -> `database.url = ...`
//! - `KEYAKE__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
//!
//! ```no_run
//! use keyake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bind address, environment, logging, CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection pool
    pub database: DatabaseConfig,

    /// Bearer-token verification
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a value
    /// cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KEYAKE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
