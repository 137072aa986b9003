//! Get benchmarks use case.
//!
//! Exposes the reference tables verbatim for client-side display. The default
//! hourly costs are an engine detail and are not part of this view.

use crate::ports::reference_data::ReferenceDataPort;
use roi_domain::{MaturityFactor, PerMaturity, PerSector, PerSize, PricingTier, SectorBenchmark};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarksView {
    pub sectors: PerSector<SectorBenchmark>,
    pub maturity_factors: PerMaturity<MaturityFactor>,
    pub pricing: PerSize<PricingTier>,
}

pub struct GetBenchmarksUseCase {
    reference_data: Arc<dyn ReferenceDataPort>,
}

impl GetBenchmarksUseCase {
    pub fn new(reference_data: Arc<dyn ReferenceDataPort>) -> Self {
        Self { reference_data }
    }

    pub fn execute(&self) -> BenchmarksView {
        let tables = self.reference_data.tables();
        BenchmarksView {
            sectors: tables.sectors.clone(),
            maturity_factors: tables.maturity_factors.clone(),
            pricing: tables.pricing.clone(),
        }
    }
}
