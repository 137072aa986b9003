//! Reference data records: sector benchmarks, maturity factors, pricing tiers

use serde::{Deserialize, Serialize};

/// Empirical automation benchmark for one sector
///
/// All ratios are fractions in `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBenchmark {
    /// Display name
    pub name: String,
    /// Share of tasks realistically automatable (caps the effective gain)
    pub automation_potential: f64,
    /// Typical reduction in processing errors
    pub error_reduction: f64,
    /// Typical reduction in operational process cost
    pub cost_reduction: f64,
    /// Typical productivity gain
    pub productivity_gain: f64,
    /// Weeks until a positive return is usually observed (informational)
    pub time_to_value: u32,
}

impl SectorBenchmark {
    /// Automation ceiling expressed in percentage points.
    pub fn automation_ceiling_percent(&self) -> f64 {
        self.automation_potential * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityFactor {
    pub name: String,
    /// Share of the nominal gain actually realized (`0..=1`)
    pub efficiency_factor: f64,
    /// Informational implementation risk (`0..=1`)
    pub implementation_risk: f64,
    /// Multiplier applied to the payback period (`> 0`)
    pub time_multiplier: f64,
}

/// Pricing for one company size category, in whole currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    pub audit_base: u32,
    pub implementation_per_process: u32,
    pub maintenance_monthly: u32,
}

impl PricingTier {
    /// One-off cost: audit plus per-process implementation.
    pub fn implementation_cost(&self, processes: u32) -> f64 {
        f64::from(self.audit_base) + f64::from(processes) * f64::from(self.implementation_per_process)
    }

    pub fn yearly_maintenance(&self) -> f64 {
        f64::from(self.maintenance_monthly) * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn large() -> PricingTier {
        PricingTier {
            name: "Large".to_string(),
            audit_base: 8000,
            implementation_per_process: 4500,
            maintenance_monthly: 800,
        }
    }

    #[test]
    fn test_implementation_cost() {
        assert_eq!(large().implementation_cost(3), 21_500.0);
        assert_eq!(large().implementation_cost(1), 12_500.0);
    }

    #[test]
    fn test_yearly_maintenance() {
        assert_eq!(large().yearly_maintenance(), 9_600.0);
    }

    #[test]
    fn test_sector_benchmark_camel_case() {
        let benchmark: SectorBenchmark = serde_json::from_str(
            r#"{"name":"X","automationPotential":0.3,"errorReduction":0.75,
                "costReduction":0.25,"productivityGain":0.35,"timeToValue":12}"#,
        )
        .unwrap();
        assert_eq!(benchmark.automation_ceiling_percent(), 30.0);
        assert_eq!(benchmark.time_to_value, 12);
    }
}
