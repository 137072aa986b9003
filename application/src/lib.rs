//! Application layer for roi-simulator
//!
//! This crate contains use cases, port definitions, and request validation.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;
pub mod validation;

// Re-export commonly used types
pub use ports::{
    clock::{Clock, FixedClock},
    reference_data::{InMemoryReferenceData, ReferenceDataPort},
};
pub use use_cases::calculate_roi::{
    CalculateRoiError, CalculateRoiUseCase, ReportInputs, ReportMetadata, SimulationReport,
};
pub use use_cases::get_benchmarks::{BenchmarksView, GetBenchmarksUseCase};
pub use use_cases::list_sectors::{ListSectorsUseCase, SectorSummary};
pub use validation::{FieldError, SimulationRequest};
