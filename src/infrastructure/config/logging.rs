//! Logging configuration and initialization.

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Log formats understood by [`LoggingConfig::init`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Build the filter described by `level`.
    ///
    /// `level` is a bare level (`info`, `debug`, ...) or comma-separated
    /// `target=level` directives. A bare word that is not a level is rejected
    /// rather than read as a target name.
    ///
    /// # Errors
    ///
    /// Returns a description of the first unusable directive.
    pub fn filter(&self) -> Result<EnvFilter, String> {
        for directive in self.level.split(',').map(str::trim) {
            if !directive.contains('=') && directive.parse::<LevelFilter>().is_err() {
                return Err(format!(
                    "unknown level {directive:?}, expected trace, debug, info, warn, error or off"
                ));
            }
        }
        EnvFilter::try_new(&self.level).map_err(|e| e.to_string())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| self.filter())
            .unwrap_or_else(|_| EnvFilter::new(default_level()));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
