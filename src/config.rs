//! Service configuration
//!
//! All configuration is read from environment variables at startup. A `.env`
//! file in the working directory is honoured for local development.

use crate::catalog::client::{DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT_SECS};
use std::{net::SocketAddr, time::Duration};
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let catalog_url = lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let catalog_timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                ConfigError::InvalidValue("CATALOG_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            catalog_url,
            catalog_timeout,
            log_level,
        })
    }
}
