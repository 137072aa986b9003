//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has defaults.

mod rate_limit;
mod reference;
mod server;

pub use rate_limit::FileRateLimitConfig;
pub use reference::FileReferenceConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("rate_limit.window_ms cannot be 0 when rate limiting is enabled")]
    ZeroRateLimitWindow,

    #[error("rate_limit.max_requests cannot be 0 when rate limiting is enabled")]
    ZeroRateLimitMax,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Rate limiting of `/api/` routes
    pub rate_limit: FileRateLimitConfig,
    /// Reference table source
    pub reference: FileReferenceConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }

        if self.rate_limit.enabled {
            if self.rate_limit.window_ms == 0 {
                return Err(ConfigValidationError::ZeroRateLimitWindow);
            }
            if self.rate_limit.max_requests == 0 {
                return Err(ConfigValidationError::ZeroRateLimitMax);
            }
        }

        Ok(())
    }
}
