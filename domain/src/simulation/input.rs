//! Simulation inputs and their defaulting rules

use crate::reference::{Maturity, ReferenceTables, Sector, SizeCategory};
use crate::simulation::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Current automation rate assumed when none is given (percent)
pub const DEFAULT_CURRENT_AUTOMATION: u8 = 15;

/// Inputs of one ROI simulation
///
/// Numeric fields are expected to be inside their documented ranges
/// (employees 1..=10000, processes 1..=50, time per task 0.1..=24 hours,
/// hourly cost 10..=500, automation rates 0..=100). Range checks happen at
/// the boundary, before an input is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub sector: Sector,
    pub employees: u32,
    pub processes: u32,
    /// Hours spent per task, per day
    pub time_per_task: f64,
    pub hourly_cost: Option<f64>,
    /// Percent of the processes already automated
    pub current_automation: Option<u8>,
    /// Percent of the processes targeted for automation
    pub target_automation: Option<u8>,
    pub maturity: Option<Maturity>,
}

impl SimulationInput {
    pub fn new(sector: Sector, employees: u32, processes: u32, time_per_task: f64) -> Self {
        Self {
            sector,
            employees,
            processes,
            time_per_task,
            hourly_cost: None,
            current_automation: None,
            target_automation: None,
            maturity: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_hourly_cost(mut self, hourly_cost: f64) -> Self {
        self.hourly_cost = Some(hourly_cost);
        self
    }

    pub fn with_current_automation(mut self, percent: u8) -> Self {
        self.current_automation = Some(percent);
        self
    }

    pub fn with_target_automation(mut self, percent: u8) -> Self {
        self.target_automation = Some(percent);
        self
    }

    pub fn with_maturity(mut self, maturity: Maturity) -> Self {
        self.maturity = Some(maturity);
        self
    }

    // ==================== Defaulting ====================

    /// Fill every optional field.
    ///
    /// - hourly cost: the sector's default hourly cost
    /// - maturity: derived from headcount (<50 low, 50..249 medium, ≥250 high)
    /// - current automation: 15%
    /// - target automation: the sector's automation potential, in percent
    pub fn resolve(&self, tables: &ReferenceTables) -> ResolvedInput {
        let hourly_cost = self
            .hourly_cost
            .unwrap_or_else(|| tables.default_hourly_cost(self.sector));
        let maturity = self
            .maturity
            .unwrap_or_else(|| Maturity::from_employees(self.employees));
        let current_automation = self
            .current_automation
            .unwrap_or(DEFAULT_CURRENT_AUTOMATION);
        let target_automation = self.target_automation.unwrap_or_else(|| {
            let ceiling = tables.sector(self.sector).automation_ceiling_percent();
            round_half_up(ceiling).clamp(0.0, 100.0) as u8
        });

        ResolvedInput {
            sector: self.sector,
            employees: self.employees,
            processes: self.processes,
            time_per_task: self.time_per_task,
            hourly_cost,
            current_automation,
            target_automation,
            maturity,
        }
    }
}

/// Inputs with every default applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInput {
    pub sector: Sector,
    pub employees: u32,
    pub processes: u32,
    pub time_per_task: f64,
    pub hourly_cost: f64,
    pub current_automation: u8,
    pub target_automation: u8,
    pub maturity: Maturity,
}

impl ResolvedInput {
    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_employees(self.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ReferenceTables {
        ReferenceTables::builtin()
    }

    #[test]
    fn test_resolve_applies_sector_defaults() {
        let resolved = SimulationInput::new(Sector::Legal, 120, 8, 2.5).resolve(&tables());
        assert_eq!(resolved.hourly_cost, 120.0);
        assert_eq!(resolved.current_automation, 15);
        assert_eq!(resolved.target_automation, 28);
        assert_eq!(resolved.maturity, Maturity::Medium);
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let input = SimulationInput::new(Sector::It, 1500, 20, 4.0)
            .with_hourly_cost(100.0)
            .with_current_automation(10)
            .with_target_automation(60)
            .with_maturity(Maturity::Low);
        let resolved = input.resolve(&tables());
        assert_eq!(resolved.hourly_cost, 100.0);
        assert_eq!(resolved.current_automation, 10);
        assert_eq!(resolved.target_automation, 60);
        assert_eq!(resolved.maturity, Maturity::Low);
    }

    #[test]
    fn test_explicit_zero_automation_is_kept() {
        let resolved = SimulationInput::new(Sector::General, 10, 1, 1.0)
            .with_current_automation(0)
            .with_target_automation(0)
            .resolve(&tables());
        assert_eq!(resolved.current_automation, 0);
        assert_eq!(resolved.target_automation, 0);
    }

    #[test]
    fn test_target_default_per_sector() {
        let expected = [
            (Sector::Finance, 35),
            (Sector::Hr, 30),
            (Sector::Operations, 40),
            (Sector::Sales, 25),
            (Sector::Support, 45),
            (Sector::Marketing, 33),
            (Sector::It, 38),
            (Sector::Legal, 28),
            (Sector::General, 30),
        ];
        for (sector, target) in expected {
            let resolved = SimulationInput::new(sector, 10, 1, 1.0).resolve(&tables());
            assert_eq!(resolved.target_automation, target, "{sector}");
        }
    }

    #[test]
    fn test_maturity_and_size_boundary_at_50() {
        let below = SimulationInput::new(Sector::General, 49, 1, 1.0).resolve(&tables());
        assert_eq!(below.maturity, Maturity::Low);
        assert_eq!(below.size_category(), SizeCategory::Small);

        let at = SimulationInput::new(Sector::General, 50, 1, 1.0).resolve(&tables());
        assert_eq!(at.maturity, Maturity::Medium);
        assert_eq!(at.size_category(), SizeCategory::Medium);
    }

    #[test]
    fn test_resolved_input_serializes_camel_case() {
        let resolved = SimulationInput::new(Sector::Hr, 30, 2, 1.5).resolve(&tables());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["sector"], "hr");
        assert_eq!(json["timePerTask"], 1.5);
        assert_eq!(json["currentAutomation"], 15);
        assert_eq!(json["maturity"], "low");
    }
}
