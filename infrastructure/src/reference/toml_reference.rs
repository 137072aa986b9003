//! Reference tables loaded from a TOML file.
//!
//! The file has the same shape as the built-in catalog serialized to TOML:
//!
//! ```toml
//! [sectors.finance]
//! name = "Finance & Comptabilité"
//! automationPotential = 0.75
//! # ...
//!
//! [maturityFactors.low]
//! # ...
//!
//! [pricing.small]
//! # ...
//!
//! [hourlyCosts]
//! finance = 65.0
//! # ...
//! ```
//!
//! Every table must be complete. The file is read once at startup.

use roi_application::ports::reference_data::ReferenceDataPort;
use roi_domain::{DomainError, ReferenceTables};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a reference file
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse reference file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid reference file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Reference data read from a TOML file
#[derive(Debug, Clone)]
pub struct TomlReferenceData {
    tables: Arc<ReferenceTables>,
    path: PathBuf,
}

impl TomlReferenceData {
    /// Read, parse and validate the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| ReferenceDataError::Io {
            path: path.clone(),
            source,
        })?;
        let tables = Self::parse(&text).map_err(|err| match err {
            ParseFailure::Toml(source) => ReferenceDataError::Parse {
                path: path.clone(),
                source,
            },
            ParseFailure::Domain(source) => ReferenceDataError::Invalid {
                path: path.clone(),
                source,
            },
        })?;

        info!("Loaded reference tables from {}", path.display());
        Ok(Self {
            tables: Arc::new(tables),
            path,
        })
    }

    fn parse(text: &str) -> Result<ReferenceTables, ParseFailure> {
        let tables: ReferenceTables = toml::from_str(text).map_err(ParseFailure::Toml)?;
        tables.validate().map_err(ParseFailure::Domain)?;
        Ok(tables)
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Domain(DomainError),
}

impl ReferenceDataPort for TomlReferenceData {
    fn tables(&self) -> Arc<ReferenceTables> {
        Arc::clone(&self.tables)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_domain::Sector;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_builtin_catalog_from_file() {
        let text = toml::to_string(&ReferenceTables::builtin()).unwrap();
        let file = write_file(&text);

        let data = TomlReferenceData::load(file.path()).unwrap();
        assert_eq!(*data.tables(), ReferenceTables::builtin());
        assert_eq!(data.source(), file.path().display().to_string());
    }

    #[test]
    fn test_load_overridden_figures() {
        let mut tables = ReferenceTables::builtin();
        tables.sectors.hr.automation_potential = 0.5;
        tables.hourly_costs.hr = 70.0;
        let file = write_file(&toml::to_string(&tables).unwrap());

        let data = TomlReferenceData::load(file.path()).unwrap();
        assert_eq!(data.tables().sector(Sector::Hr).automation_potential, 0.5);
        assert_eq!(data.tables().default_hourly_cost(Sector::Hr), 70.0);
    }

    #[test]
    fn test_incomplete_file_is_a_parse_error() {
        let file = write_file("[sectors.finance]\nname = \"Finance\"\n");
        let err = TomlReferenceData::load(file.path()).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Parse { .. }));
    }

    #[test]
    fn test_out_of_range_ratio_is_rejected() {
        let mut tables = ReferenceTables::builtin();
        tables.sectors.sales.cost_reduction = 1.5;
        let file = write_file(&toml::to_string(&tables).unwrap());

        let err = TomlReferenceData::load(file.path()).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Invalid { .. }));
        assert!(err.to_string().contains("Invalid reference file"));
    }
}
