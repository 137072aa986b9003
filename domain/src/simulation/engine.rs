//! The ROI engine
//!
//! A pure arithmetic pipeline: identical input and identical reference tables
//! always produce an identical [`Simulation`]. There is no hidden state, no
//! I/O and nothing that can fail for in-domain input; both divisions are
//! guarded against a zero denominator.
//!
//! ```text
//! automation gain ─▶ capped by sector ceiling ─▶ hours saved ─▶ savings
//!                                                                  │
//! pricing tier (by headcount) ─▶ investment ──────────────────────┴─▶ ROI, payback
//! ```

use super::input::{ResolvedInput, SimulationInput};
use super::result::RoiResult;
use crate::reference::{ReferenceTables, SizeCategory};
use serde::Serialize;

/// Business days in a month
pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
/// Average weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unrounded intermediate quantities of one simulation, in pipeline order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationBreakdown {
    /// Nominal gain in percentage points, never negative
    pub automation_gain: f64,
    /// Nominal gain capped at the sector's automation ceiling
    pub effective_gain: f64,
    pub daily_hours_saved: f64,
    pub monthly_hours_saved: f64,
    /// Savings from hours given back to staff
    pub productivity_savings: f64,
    pub monthly_process_cost: f64,
    /// Savings from lower operational cost of the automated share
    pub cost_reduction_savings: f64,
    pub total_monthly_savings: f64,
    pub yearly_savings: f64,
    pub implementation_cost: f64,
    pub yearly_maintenance: f64,
    pub total_investment: f64,
    pub net_yearly_gains: f64,
    pub roi_percentage: f64,
    /// Payback before the maturity time multiplier
    pub base_payback_weeks: f64,
    pub payback_weeks: i64,
}

/// Full outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub inputs: ResolvedInput,
    pub size_category: SizeCategory,
    pub efficiency_factor: f64,
    pub breakdown: SimulationBreakdown,
    pub results: RoiResult,
}

/// Resolve defaults, then project savings, investment, ROI and payback.
pub fn compute(input: &SimulationInput, tables: &ReferenceTables) -> Simulation {
    let inputs = input.resolve(tables);
    let breakdown = project(&inputs, tables);
    let benchmark = tables.sector(inputs.sector);
    let results = RoiResult::from_breakdown(&breakdown, benchmark);

    Simulation {
        size_category: inputs.size_category(),
        efficiency_factor: tables.maturity(inputs.maturity).efficiency_factor,
        inputs,
        breakdown,
        results,
    }
}

/// Run the formula on already-resolved inputs.
pub fn project(inputs: &ResolvedInput, tables: &ReferenceTables) -> SimulationBreakdown {
    let benchmark = tables.sector(inputs.sector);
    let maturity = tables.maturity(inputs.maturity);
    let pricing = tables.pricing_tier(inputs.size_category());

    let processes = f64::from(inputs.processes);
    let hourly_cost = inputs.hourly_cost;

    let automation_gain =
        (f64::from(inputs.target_automation) - f64::from(inputs.current_automation)).max(0.0);
    let effective_gain = automation_gain.min(benchmark.automation_ceiling_percent());
    let gain_ratio = effective_gain / 100.0;

    let daily_hours_saved =
        processes * inputs.time_per_task * gain_ratio * maturity.efficiency_factor;
    let monthly_hours_saved = daily_hours_saved * WORKING_DAYS_PER_MONTH;
    let productivity_savings = monthly_hours_saved * hourly_cost;

    let monthly_process_cost =
        processes * inputs.time_per_task * WORKING_DAYS_PER_MONTH * hourly_cost;
    let cost_reduction_savings = monthly_process_cost * benchmark.cost_reduction * gain_ratio;

    let total_monthly_savings = productivity_savings + cost_reduction_savings;
    let yearly_savings = total_monthly_savings * MONTHS_PER_YEAR;

    let implementation_cost = pricing.implementation_cost(inputs.processes);
    let yearly_maintenance = pricing.yearly_maintenance();
    let total_investment = implementation_cost + yearly_maintenance;

    let net_yearly_gains = yearly_savings - total_investment;
    let roi_percentage = if total_investment > 0.0 {
        net_yearly_gains / total_investment * 100.0
    } else {
        0.0
    };

    let base_payback_weeks = if total_monthly_savings > 0.0 {
        implementation_cost / total_monthly_savings * WEEKS_PER_MONTH
    } else {
        0.0
    };
    let payback_weeks = (base_payback_weeks * maturity.time_multiplier).ceil() as i64;

    SimulationBreakdown {
        automation_gain,
        effective_gain,
        daily_hours_saved,
        monthly_hours_saved,
        productivity_savings,
        monthly_process_cost,
        cost_reduction_savings,
        total_monthly_savings,
        yearly_savings,
        implementation_cost,
        yearly_maintenance,
        total_investment,
        net_yearly_gains,
        roi_percentage,
        base_payback_weeks,
        payback_weeks,
    }
}
