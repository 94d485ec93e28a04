//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file, then environment
//! variables override the connection string and listener:
//!
//! - `TODOPAD_DATABASE_URL` - SQLite path or `:memory:`
//! - `TODOPAD_HOST` - listen interface
//! - `TODOPAD_PORT` - listen port
//!
//! # Example
//!
//! ```no_run
//! use todopad::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::database::DatabaseConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`DatabaseConfig::url`].
pub const ENV_DATABASE_URL: &str = "TODOPAD_DATABASE_URL";
/// Environment variable overriding [`ServerConfig::host`].
pub const ENV_HOST: &str = "TODOPAD_HOST";
/// Environment variable overriding [`ServerConfig::port`].
pub const ENV_PORT: &str = "TODOPAD_PORT";

/// Main application configuration.
///
/// Every section is optional; a missing file section falls back to its
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// No environment overrides or validation are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Read the file at `path` when given, otherwise start from defaults.
    ///
    /// Callers layer overrides on top and validate afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
                Self::parse_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file, apply environment overrides and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an override
    /// cannot be parsed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_or_default(Some(path))
    }

    /// Same as [`Config::load`], starting from defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TODOPAD_PORT` is not a valid port number.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database.url = url;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: ENV_PORT,
                reason: format!("{e}"),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<()> {
        self.validate_database()?;
        self.validate_server()?;
        self.validate_logging()
    }

    /// Validate the `[database]` section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate_database(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database.url" }.into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Validate the `[server]` section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate_server(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "server.host" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.server.workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "server.workers",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Validate the `[logging]` section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate_logging(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {LOG_FORMATS:?}"),
            }
            .into());
        }
        self.logging
            .filter()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "logging.level",
                reason,
            })?;
        Ok(())
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
