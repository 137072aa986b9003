//! Reference data configuration from TOML (`[reference]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw reference data configuration from TOML
///
/// # Example
///
/// ```toml
/// [reference]
/// path = "benchmarks.toml"   # omit to use the built-in catalog
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReferenceConfig {
    /// TOML file replacing the built-in reference tables
    pub path: Option<PathBuf>,
}
