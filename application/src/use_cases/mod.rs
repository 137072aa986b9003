//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod calculate_roi;
pub mod get_benchmarks;
pub mod list_sectors;
