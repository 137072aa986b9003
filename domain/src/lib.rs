//! Domain layer for roi-simulator
//!
//! This crate contains the reference data model and the ROI engine.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Reference tables
//!
//! Sector benchmarks, maturity factors and pricing tiers, bundled in an
//! immutable [`ReferenceTables`] value that is passed to the engine.
//!
//! ## ROI engine
//!
//! [`compute`] is a pure function from a [`SimulationInput`] and the tables
//! to a [`Simulation`]. Concurrent calls share nothing but the read-only
//! tables.

pub mod core;
pub mod reference;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use reference::{
    MaturityFactor, Maturity, PerMaturity, PerSector, PerSize, PricingTier, ReferenceTables,
    Sector, SectorBenchmark, SizeCategory,
};
pub use simulation::{
    ResolvedInput, RoiResult, Simulation, SimulationBreakdown, SimulationInput, compute, project,
};
