//! Reference data port
//!
//! Supplies the [`ReferenceTables`] the ROI engine reads. Tables are built
//! once and shared read-only, so implementations hand out an [`Arc`].
//!
//! # Implementations
//!
//! - [`InMemoryReferenceData`] - wraps an already-built table set (the
//!   built-in catalog by default)
//! - `TomlReferenceData` - loads an override file, in the infrastructure layer

use roi_domain::ReferenceTables;
use std::sync::Arc;

/// Source of the benchmark, maturity and pricing tables
pub trait ReferenceDataPort: Send + Sync {
    /// The tables to compute with
    fn tables(&self) -> Arc<ReferenceTables>;

    /// Short human-readable description of where the tables come from
    fn source(&self) -> String;
}

/// Reference data held in memory
#[derive(Debug, Clone)]
pub struct InMemoryReferenceData {
    tables: Arc<ReferenceTables>,
}

impl InMemoryReferenceData {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn builtin() -> Self {
        Self::new(ReferenceTables::builtin())
    }
}

impl Default for InMemoryReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceDataPort for InMemoryReferenceData {
    fn tables(&self) -> Arc<ReferenceTables> {
        Arc::clone(&self.tables)
    }

    fn source(&self) -> String {
        "built-in catalog".to_string()
    }
}
