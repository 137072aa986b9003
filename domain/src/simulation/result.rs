//! Rounded simulation results, as reported to clients

use super::engine::SimulationBreakdown;
use super::rounding::{round_to_int, to_fixed};
use crate::reference::SectorBenchmark;
use serde::{Deserialize, Serialize};

/// Financial projections of one simulation
///
/// Whole-number fields use half-up rounding; `payback_weeks` is a ceiling and
/// `daily_hours` a one-decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    /// Hours saved per month
    pub time_saved: i64,
    /// Total savings per month (productivity plus cost reduction)
    pub monthly_savings: i64,
    pub yearly_savings: i64,
    pub roi_percentage: i64,
    pub payback_weeks: i64,
    /// Effective automation gain, in percentage points
    pub automation_gain: i64,
    /// Hours saved per day
    pub daily_hours: String,
    /// First-year investment (implementation plus maintenance)
    pub investment: i64,
    pub net_gains: i64,
    pub error_reduction: i64,
    pub productivity_gain: i64,
    pub sector_name: String,
}

impl RoiResult {
    pub fn from_breakdown(breakdown: &SimulationBreakdown, benchmark: &SectorBenchmark) -> Self {
        Self {
            time_saved: round_to_int(breakdown.monthly_hours_saved),
            monthly_savings: round_to_int(breakdown.total_monthly_savings),
            yearly_savings: round_to_int(breakdown.yearly_savings),
            roi_percentage: round_to_int(breakdown.roi_percentage),
            payback_weeks: breakdown.payback_weeks,
            automation_gain: round_to_int(breakdown.effective_gain),
            daily_hours: to_fixed(breakdown.daily_hours_saved, 1),
            investment: round_to_int(breakdown.total_investment),
            net_gains: round_to_int(breakdown.net_yearly_gains),
            error_reduction: round_to_int(benchmark.error_reduction * 100.0),
            productivity_gain: round_to_int(benchmark.productivity_gain * 100.0),
            sector_name: benchmark.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{ReferenceTables, Sector};
    use crate::simulation::{SimulationInput, compute};

    #[test]
    fn test_serializes_camel_case_wire_names() {
        let tables = ReferenceTables::builtin();
        let simulation = compute(&SimulationInput::new(Sector::Legal, 120, 8, 2.5), &tables);
        let json = serde_json::to_value(&simulation.results).unwrap();

        assert_eq!(json["timeSaved"], 43);
        assert_eq!(json["monthlySavings"], 6933);
        assert_eq!(json["yearlySavings"], 83192);
        assert_eq!(json["roiPercentage"], 138);
        assert_eq!(json["paybackWeeks"], 19);
        assert_eq!(json["automationGain"], 13);
        assert_eq!(json["dailyHours"], "2.0");
        assert_eq!(json["investment"], 35000);
        assert_eq!(json["netGains"], 48192);
        assert_eq!(json["errorReduction"], 88);
        assert_eq!(json["productivityGain"], 30);
        assert_eq!(json["sectorName"], "Juridique & Compliance");
    }
}
