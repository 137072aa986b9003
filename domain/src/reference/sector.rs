//! Business sectors and per-sector tables

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Business sector a simulation is run for
///
/// Variants are declared in catalog order, which is also the order in which
/// sectors are listed to clients.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Finance,
    Hr,
    Operations,
    Sales,
    Support,
    Marketing,
    It,
    Legal,
    #[default]
    General,
}

impl Sector {
    /// All sectors, in catalog order
    pub const ALL: [Sector; 9] = [
        Sector::Finance,
        Sector::Hr,
        Sector::Operations,
        Sector::Sales,
        Sector::Support,
        Sector::Marketing,
        Sector::It,
        Sector::Legal,
        Sector::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Finance => "finance",
            Sector::Hr => "hr",
            Sector::Operations => "operations",
            Sector::Sales => "sales",
            Sector::Support => "support",
            Sector::Marketing => "marketing",
            Sector::It => "it",
            Sector::Legal => "legal",
            Sector::General => "general",
        }
    }

    /// Parse a sector key, falling back to [`Sector::General`] for unknown keys.
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSector(s.to_string()))
    }
}

/// A value for every [`Sector`]
///
/// Serializes as an object keyed by sector id, in catalog order. Every key is
/// required when deserializing, so lookups are total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerSector<T> {
    pub finance: T,
    pub hr: T,
    pub operations: T,
    pub sales: T,
    pub support: T,
    pub marketing: T,
    pub it: T,
    pub legal: T,
    pub general: T,
}

impl<T> PerSector<T> {
    pub fn get(&self, sector: Sector) -> &T {
        match sector {
            Sector::Finance => &self.finance,
            Sector::Hr => &self.hr,
            Sector::Operations => &self.operations,
            Sector::Sales => &self.sales,
            Sector::Support => &self.support,
            Sector::Marketing => &self.marketing,
            Sector::It => &self.it,
            Sector::Legal => &self.legal,
            Sector::General => &self.general,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, &T)> {
        Sector::ALL.into_iter().map(move |sector| (sector, self.get(sector)))
    }
}
