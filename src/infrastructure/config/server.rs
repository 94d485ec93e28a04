//! HTTP listener configuration.

use serde::Deserialize;

/// Where and how the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: 127.0.0.1).
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port (default: 8000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker thread count. Unset means one per physical core.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// `host:port` pair suitable for binding.
    #[must_use]
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}
