use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub listing: ListingConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when the client supplies none (or garbage).
    pub default_page_size: i64,
    /// Hard cap applied to any requested page size.
    pub max_page_size: i64,
    pub debug_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("LISTING_DEFAULT_PAGE_SIZE") {
            self.listing.default_page_size = v.parse().unwrap_or(self.listing.default_page_size);
        }
        if let Ok(v) = env::var("LISTING_MAX_PAGE_SIZE") {
            self.listing.max_page_size = v.parse().unwrap_or(self.listing.max_page_size);
        }
        if let Ok(v) = env::var("LISTING_DEBUG_LOGGING") {
            self.listing.debug_logging = v.parse().unwrap_or(self.listing.debug_logging);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            listing: ListingConfig {
                default_page_size: 12,
                max_page_size: 100,
                debug_logging: true,
            },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            listing: ListingConfig {
                default_page_size: 12,
                max_page_size: 60,
                debug_logging: false,
            },
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            listing: ListingConfig {
                default_page_size: 12,
                max_page_size: 48,
                debug_logging: false,
            },
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.listing.default_page_size, 12);
        assert_eq!(config.listing.max_page_size, 100);
        assert!(config.listing.debug_logging);
    }

    #[test]
    fn production_defaults() {
        let config = AppConfig::production();
        assert_eq!(config.listing.default_page_size, 12);
        assert_eq!(config.listing.max_page_size, 48);
        assert!(!config.listing.debug_logging);
    }
}
