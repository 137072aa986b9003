//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The ROI engine itself never fails for in-domain input. These errors are
/// raised by parsing and by the conversion of unchecked values into
/// [`SimulationInput`](crate::simulation::SimulationInput).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    #[error("Unknown maturity level: {0}")]
    UnknownMaturity(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidDomain { field: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid_domain(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidDomain {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this error is an out-of-range or ill-typed input value
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, DomainError::InvalidDomain { .. })
    }
}
