//! The reference tables consumed by the ROI engine

use super::benchmark::{MaturityFactor, PricingTier, SectorBenchmark};
use super::maturity::{Maturity, PerMaturity};
use super::sector::{PerSector, Sector};
use super::size::{PerSize, SizeCategory};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Hourly cost used when none is given and the sector is unknown
pub const FALLBACK_HOURLY_COST: f64 = 50.0;

/// Benchmarks, maturity factors, pricing tiers and default hourly costs.
///
/// Immutable once built. The engine receives it explicitly, so tests and
/// deployments can substitute their own figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    pub sectors: PerSector<SectorBenchmark>,
    pub maturity_factors: PerMaturity<MaturityFactor>,
    pub pricing: PerSize<PricingTier>,
    pub hourly_costs: PerSector<f64>,
}

impl ReferenceTables {
    pub fn sector(&self, sector: Sector) -> &SectorBenchmark {
        self.sectors.get(sector)
    }

    pub fn maturity(&self, maturity: Maturity) -> &MaturityFactor {
        self.maturity_factors.get(maturity)
    }

    pub fn pricing_tier(&self, size: SizeCategory) -> &PricingTier {
        self.pricing.get(size)
    }

    pub fn default_hourly_cost(&self, sector: Sector) -> f64 {
        *self.hourly_costs.get(sector)
    }

    /// Check that every figure is usable by the engine.
    ///
    /// Ratios must lie in `0..=1`, time multipliers must be positive and
    /// hourly costs must be positive and finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (sector, benchmark) in self.sectors.iter() {
            let ratios = [
                ("automationPotential", benchmark.automation_potential),
                ("errorReduction", benchmark.error_reduction),
                ("costReduction", benchmark.cost_reduction),
                ("productivityGain", benchmark.productivity_gain),
            ];
            for (name, value) in ratios {
                check_ratio("sectors", &format!("{sector}.{name}"), value)?;
            }
        }

        for maturity in Maturity::ALL {
            let factor = self.maturity(maturity);
            check_ratio(
                "maturityFactors",
                &format!("{maturity}.efficiencyFactor"),
                factor.efficiency_factor,
            )?;
            check_ratio(
                "maturityFactors",
                &format!("{maturity}.implementationRisk"),
                factor.implementation_risk,
            )?;
            if !(factor.time_multiplier.is_finite() && factor.time_multiplier > 0.0) {
                return Err(DomainError::invalid_domain(
                    "maturityFactors",
                    format!("{maturity}.timeMultiplier must be positive"),
                ));
            }
        }

        for (sector, cost) in self.hourly_costs.iter() {
            if !(cost.is_finite() && *cost > 0.0) {
                return Err(DomainError::invalid_domain(
                    "hourlyCosts",
                    format!("{sector} must be positive"),
                ));
            }
        }

        Ok(())
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            sectors: PerSector {
                finance: benchmark("Finance & Comptabilité", 0.35, 0.85, 0.28, 0.32, 12),
                hr: benchmark("Ressources Humaines", 0.30, 0.75, 0.25, 0.28, 10),
                operations: benchmark("Opérations & Logistique", 0.40, 0.90, 0.35, 0.38, 14),
                sales: benchmark("Commercial & Ventes", 0.25, 0.65, 0.20, 0.35, 8),
                support: benchmark("Support Client & Service", 0.45, 0.80, 0.32, 0.42, 6),
                marketing: benchmark("Marketing & Communication", 0.33, 0.70, 0.22, 0.40, 10),
                it: benchmark("IT & Développement", 0.38, 0.82, 0.30, 0.55, 4),
                legal: benchmark("Juridique & Compliance", 0.28, 0.88, 0.26, 0.30, 16),
                general: benchmark("Multi-fonctions / Général", 0.30, 0.75, 0.25, 0.35, 12),
            },
            maturity_factors: PerMaturity {
                low: maturity_factor("Faible maturité digitale", 0.60, 0.30, 1.5),
                medium: maturity_factor("Maturité digitale moyenne", 0.75, 0.15, 1.0),
                high: maturity_factor("Forte maturité digitale", 0.90, 0.05, 0.7),
            },
            pricing: PerSize {
                small: pricing_tier("PME (1-50 employés)", 3000, 2000, 300),
                medium: pricing_tier("ETI (50-250 employés)", 5000, 3000, 500),
                large: pricing_tier("Grande entreprise (250-1000 employés)", 8000, 4500, 800),
                enterprise: pricing_tier("Groupe (1000+ employés)", 15000, 7000, 1500),
            },
            hourly_costs: PerSector {
                finance: 70.0,
                hr: 55.0,
                operations: 50.0,
                sales: 60.0,
                support: 35.0,
                marketing: 55.0,
                it: 90.0,
                legal: 120.0,
                general: FALLBACK_HOURLY_COST,
            },
        }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_ratio(table: &'static str, key: &str, value: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::invalid_domain(
            table,
            format!("{key} must be between 0 and 1, got {value}"),
        ))
    }
}

fn benchmark(
    name: &str,
    automation_potential: f64,
    error_reduction: f64,
    cost_reduction: f64,
    productivity_gain: f64,
    time_to_value: u32,
) -> SectorBenchmark {
    SectorBenchmark {
        name: name.to_string(),
        automation_potential,
        error_reduction,
        cost_reduction,
        productivity_gain,
        time_to_value,
    }
}

fn maturity_factor(
    name: &str,
    efficiency_factor: f64,
    implementation_risk: f64,
    time_multiplier: f64,
) -> MaturityFactor {
    MaturityFactor {
        name: name.to_string(),
        efficiency_factor,
        implementation_risk,
        time_multiplier,
    }
}

fn pricing_tier(
    name: &str,
    audit_base: u32,
    implementation_per_process: u32,
    maintenance_monthly: u32,
) -> PricingTier {
    PricingTier {
        name: name.to_string(),
        audit_base,
        implementation_per_process,
        maintenance_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(ReferenceTables::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_lookups() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.sector(Sector::Support).automation_potential, 0.45);
        assert_eq!(tables.maturity(Maturity::High).efficiency_factor, 0.90);
        assert_eq!(tables.maturity(Maturity::Low).time_multiplier, 1.5);
        assert_eq!(tables.pricing_tier(SizeCategory::Large).audit_base, 8000);
        assert_eq!(tables.pricing_tier(SizeCategory::Enterprise).maintenance_monthly, 1500);
    }

    #[test]
    fn test_default_hourly_costs() {
        let tables = ReferenceTables::builtin();
        let expected = [
            (Sector::Finance, 70.0),
            (Sector::Support, 35.0),
            (Sector::Operations, 50.0),
            (Sector::It, 90.0),
            (Sector::Hr, 55.0),
            (Sector::Sales, 60.0),
            (Sector::Marketing, 55.0),
            (Sector::Legal, 120.0),
            (Sector::General, 50.0),
        ];
        for (sector, cost) in expected {
            assert_eq!(tables.default_hourly_cost(sector), cost, "{sector}");
        }
        assert_eq!(
            tables.default_hourly_cost(Sector::parse_or_default("unknown")),
            FALLBACK_HOURLY_COST
        );
    }

    #[test]
    fn test_validate_rejects_ratio_out_of_range() {
        let mut tables = ReferenceTables::builtin();
        tables.sectors.hr.cost_reduction = 1.2;
        let err = tables.validate().unwrap_err();
        assert!(err.is_invalid_domain());
        assert!(err.to_string().contains("hr.costReduction"));
    }

    #[test]
    fn test_validate_rejects_non_positive_time_multiplier() {
        let mut tables = ReferenceTables::builtin();
        tables.maturity_factors.high.time_multiplier = 0.0;
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_hourly_cost() {
        let mut tables = ReferenceTables::builtin();
        tables.hourly_costs.legal = -1.0;
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_shape() {
        let tables = ReferenceTables::builtin();
        let text = toml::to_string(&tables).unwrap();
        assert!(text.contains("[sectors.finance]"));
        assert!(text.contains("automationPotential"));
        let parsed: ReferenceTables = toml::from_str(&text).unwrap();
        assert_eq!(parsed, tables);
    }
}
