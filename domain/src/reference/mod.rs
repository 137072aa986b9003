//! Reference data domain
//!
//! Sector benchmarks, maturity factors and pricing tiers. The three tables
//! (plus the default hourly cost per sector) are bundled in
//! [`ReferenceTables`], an immutable value built once at start-up and handed
//! to the engine.
//!
//! Lookups by enum are total. Lookups by raw key fail soft: an unknown sector
//! resolves to `general`, an unknown maturity to `medium`.

pub mod benchmark;
pub mod maturity;
pub mod sector;
pub mod size;
pub mod tables;

pub use benchmark::{MaturityFactor, PricingTier, SectorBenchmark};
pub use maturity::{Maturity, PerMaturity};
pub use sector::{PerSector, Sector};
pub use size::{PerSize, SizeCategory};
pub use tables::{FALLBACK_HOURLY_COST, ReferenceTables};
