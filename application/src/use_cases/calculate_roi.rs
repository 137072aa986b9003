//! Calculate ROI use case.
//!
//! Validates a [`SimulationRequest`], runs the ROI engine against the current
//! reference tables and wraps the outcome in a [`SimulationReport`].

use crate::ports::clock::Clock;
use crate::ports::reference_data::ReferenceDataPort;
use crate::validation::{FieldError, SimulationRequest};
use chrono::SecondsFormat;
use roi_domain::{
    DomainError, Maturity, RoiResult, Sector, Simulation, SimulationBreakdown, SimulationInput,
    SizeCategory, compute,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while calculating an ROI report.
#[derive(Error, Debug)]
pub enum CalculateRoiError {
    #[error("Invalid request: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolved inputs echoed back to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInputs {
    pub sector: Sector,
    pub sector_name: String,
    pub employees: u32,
    pub processes: u32,
    pub time_per_task: f64,
    pub hourly_cost: f64,
    pub current_automation: u8,
    pub target_automation: u8,
    pub maturity: Maturity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// ISO-8601 UTC timestamp with millisecond precision
    pub calculated_at: String,
    pub size_category: SizeCategory,
    pub efficiency_factor: f64,
}

/// Outcome of one calculation, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub inputs: ReportInputs,
    pub results: RoiResult,
    pub metadata: ReportMetadata,
    /// Unrounded intermediates; not part of the wire format
    #[serde(skip)]
    pub breakdown: SimulationBreakdown,
}

impl SimulationReport {
    fn new(simulation: Simulation, calculated_at: String) -> Self {
        let Simulation {
            inputs,
            size_category,
            efficiency_factor,
            breakdown,
            results,
        } = simulation;

        Self {
            inputs: ReportInputs {
                sector: inputs.sector,
                sector_name: results.sector_name.clone(),
                employees: inputs.employees,
                processes: inputs.processes,
                time_per_task: inputs.time_per_task,
                hourly_cost: inputs.hourly_cost,
                current_automation: inputs.current_automation,
                target_automation: inputs.target_automation,
                maturity: inputs.maturity,
            },
            results,
            metadata: ReportMetadata {
                calculated_at,
                size_category,
                efficiency_factor,
            },
            breakdown,
        }
    }
}

/// Use case for calculating an ROI report.
#[derive(Clone)]
pub struct CalculateRoiUseCase {
    reference_data: Arc<dyn ReferenceDataPort>,
    clock: Arc<dyn Clock>,
}

impl CalculateRoiUseCase {
    pub fn new(reference_data: Arc<dyn ReferenceDataPort>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reference_data,
            clock,
        }
    }

    /// Validate the request, then calculate.
    pub fn execute(&self, request: &SimulationRequest) -> Result<SimulationReport, CalculateRoiError> {
        if let Err(errors) = request.check() {
            debug!("Rejected calculation request: {} invalid field(s)", errors.len());
            return Err(CalculateRoiError::Validation(errors));
        }

        let input = request.to_input()?;
        Ok(self.execute_input(&input))
    }

    /// Calculate from an input that is already known to be in range.
    pub fn execute_input(&self, input: &SimulationInput) -> SimulationReport {
        let tables = self.reference_data.tables();
        let simulation = compute(input, &tables);

        info!(
            sector = %simulation.inputs.sector,
            employees = simulation.inputs.employees,
            processes = simulation.inputs.processes,
            roi = simulation.results.roi_percentage,
            payback_weeks = simulation.results.payback_weeks,
            "ROI calculated"
        );

        let calculated_at = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        SimulationReport::new(simulation, calculated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::ports::reference_data::InMemoryReferenceData;
    use chrono::{TimeZone, Utc};
    use roi_domain::ReferenceTables;
    use serde_json::json;

    fn use_case() -> CalculateRoiUseCase {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap());
        CalculateRoiUseCase::new(Arc::new(InMemoryReferenceData::builtin()), Arc::new(clock))
    }

    fn request(body: serde_json::Value) -> SimulationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_execute_builds_full_report() {
        let report = use_case()
            .execute(&request(json!({
                "sector": "general",
                "employees": 250,
                "processes": 3,
                "timePerTask": 2,
                "targetAutomation": 45
            })))
            .unwrap();

        assert_eq!(report.inputs.sector_name, "Multi-fonctions / Général");
        assert_eq!(report.inputs.maturity, Maturity::High);
        assert_eq!(report.inputs.hourly_cost, 50.0);
        assert_eq!(report.inputs.current_automation, 15);
        assert_eq!(report.results.roi_percentage, -12);
        assert_eq!(report.results.payback_weeks, 29);
        assert_eq!(report.metadata.size_category, SizeCategory::Large);
        assert_eq!(report.metadata.efficiency_factor, 0.9);
        assert_eq!(report.metadata.calculated_at, "2025-03-14T09:26:53.000Z");
        assert_eq!(report.breakdown.payback_weeks, 29);
    }

    #[test]
    fn test_report_wire_format() {
        let report = use_case()
            .execute(&request(json!({
                "sector": "support",
                "employees": 49,
                "processes": 5,
                "timePerTask": 3
            })))
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["inputs"]["sector"], "support");
        assert_eq!(value["inputs"]["sectorName"], "Support Client & Service");
        assert_eq!(value["inputs"]["targetAutomation"], 45);
        assert_eq!(value["inputs"]["maturity"], "low");
        assert_eq!(value["results"]["monthlySavings"], 3188);
        assert_eq!(value["metadata"]["sizeCategory"], "small");
        assert_eq!(value["metadata"]["efficiencyFactor"], 0.6);
        assert!(value.get("breakdown").is_none());
    }

    #[test]
    fn test_execute_rejects_invalid_request() {
        let err = use_case()
            .execute(&request(json!({ "sector": "finance", "employees": 20000 })))
            .unwrap_err();
        match err {
            CalculateRoiError::Validation(errors) => {
                let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["employees", "processes", "timePerTask"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = CalculateRoiError::Validation(vec![FieldError::new(
            "processes",
            "processes is required",
            serde_json::Value::Null,
        )]);
        assert_eq!(err.to_string(), "Invalid request: processes: processes is required");
    }

    #[test]
    fn test_uses_injected_tables() {
        let mut tables = ReferenceTables::builtin();
        tables.sectors.general.name = "Everything else".to_string();
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let use_case =
            CalculateRoiUseCase::new(Arc::new(InMemoryReferenceData::new(tables)), Arc::new(clock));

        let report = use_case.execute_input(&SimulationInput::new(Sector::General, 10, 1, 1.0));
        assert_eq!(report.results.sector_name, "Everything else");
        assert_eq!(report.inputs.sector_name, "Everything else");
    }
}
