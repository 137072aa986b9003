//! Infrastructure layer for roi-simulator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod reference;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileRateLimitConfig, FileReferenceConfig,
    FileServerConfig,
};
pub use reference::{ReferenceDataError, TomlReferenceData, reference_data_from_config};
