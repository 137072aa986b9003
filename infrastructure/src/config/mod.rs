//! Configuration file loading for roi-simulator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROI_*` environment variables
//! 2. `PORT`, `NODE_ENV`, `RATE_LIMIT_WINDOW_MS`, `RATE_LIMIT_MAX_REQUESTS`
//! 3. `--config <path>` specified file
//! 4. Project root: `./roi-simulator.toml` or `./.roi-simulator.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/roi-simulator/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileRateLimitConfig, FileReferenceConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
