//! ROI simulation domain
//!
//! [`compute`] maps a [`SimulationInput`] and the [`ReferenceTables`] to a
//! [`Simulation`]: the resolved inputs, the unrounded
//! [`SimulationBreakdown`] and the rounded [`RoiResult`].
//!
//! # Pipeline
//!
//! 1. **Defaulting**: missing hourly cost, maturity and automation rates are
//!    derived from the sector and headcount ([`SimulationInput::resolve`])
//! 2. **Size category**: headcount selects the pricing tier
//! 3. **Formula**: savings, investment, ROI and payback ([`project`])
//! 4. **Rounding**: half-up integers, one-decimal daily hours, ceiling payback
//!
//! [`ReferenceTables`]: crate::reference::ReferenceTables

pub mod engine;
pub mod input;
pub mod result;
pub mod rounding;

pub use engine::{
    MONTHS_PER_YEAR, Simulation, SimulationBreakdown, WEEKS_PER_MONTH, WORKING_DAYS_PER_MONTH,
    compute, project,
};
pub use input::{DEFAULT_CURRENT_AUTOMATION, ResolvedInput, SimulationInput};
pub use result::RoiResult;
