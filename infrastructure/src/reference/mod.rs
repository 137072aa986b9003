//! Reference data adapters.
//!
//! Provides infrastructure implementations of [`ReferenceDataPort`] that
//! read benchmark tables from disk.

mod toml_reference;

pub use toml_reference::{ReferenceDataError, TomlReferenceData};

use crate::config::FileReferenceConfig;
use roi_application::ports::reference_data::{InMemoryReferenceData, ReferenceDataPort};
use std::sync::Arc;

/// Build the reference data source described by the `[reference]` section.
///
/// Without a path the built-in catalog is used.
pub fn reference_data_from_config(
    config: &FileReferenceConfig,
) -> Result<Arc<dyn ReferenceDataPort>, ReferenceDataError> {
    match &config.path {
        Some(path) => Ok(Arc::new(TomlReferenceData::load(path)?)),
        None => Ok(Arc::new(InMemoryReferenceData::builtin())),
    }
}
