//! Database connection configuration.

use serde::Deserialize;

/// SQLite connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`.
    ///
    /// Defaults to "todo.db" in the current directory.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum pooled connections (default: 5).
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_url() -> String {
    "todo.db".to_string()
}

fn default_pool_size() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
        }
    }
}
