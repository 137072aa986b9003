//! List sectors use case.
//!
//! Summarizes the sector catalog for client-side selection lists.

use crate::ports::reference_data::ReferenceDataPort;
use roi_domain::Sector;
use serde::Serialize;
use std::sync::Arc;

/// One entry of the sector list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub id: Sector,
    pub name: String,
    pub automation_potential: f64,
    pub productivity_gain: f64,
}

pub struct ListSectorsUseCase {
    reference_data: Arc<dyn ReferenceDataPort>,
}

impl ListSectorsUseCase {
    pub fn new(reference_data: Arc<dyn ReferenceDataPort>) -> Self {
        Self { reference_data }
    }

    /// Every sector, in catalog order.
    pub fn execute(&self) -> Vec<SectorSummary> {
        let tables = self.reference_data.tables();
        tables
            .sectors
            .iter()
            .map(|(id, benchmark)| SectorSummary {
                id,
                name: benchmark.name.clone(),
                automation_potential: benchmark.automation_potential,
                productivity_gain: benchmark.productivity_gain,
            })
            .collect()
    }
}
