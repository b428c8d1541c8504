//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// PostgreSQL pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (`postgres://` or `postgresql://`)
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` before serving
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("KEYAKE__DATABASE__URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_small_pool_without_migrations() {
        let config = DatabaseConfig::default();
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(10));
        assert!(!config.run_migrations);
    }

    #[test]
    fn missing_url_is_rejected() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("KEYAKE__DATABASE__URL"))
        );
    }

    #[test]
    fn non_postgres_url_is_rejected() {
        assert_eq!(
            with_url("mysql://localhost/keyake").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
    }

    #[test]
    fn both_postgres_schemes_are_accepted() {
        assert!(with_url("postgres://localhost/keyake").validate().is_ok());
        assert!(with_url("postgresql://localhost/keyake").validate().is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let inverted = DatabaseConfig {
            min_connections: 20,
            max_connections: 5,
            ..with_url("postgres://localhost/keyake")
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidPoolSize));

        let oversized = DatabaseConfig {
            max_connections: 250,
            ..with_url("postgres://localhost/keyake")
        };
        assert_eq!(oversized.validate(), Err(ValidationError::PoolSizeTooLarge));
    }
}
