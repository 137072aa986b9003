//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw HTTP server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 3000
/// environment = "production"
/// ```
///
/// `PORT` and `NODE_ENV` in the environment override `port` and
/// `environment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Deployment environment name, reported by the health endpoint
    pub environment: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
        }
    }
}
