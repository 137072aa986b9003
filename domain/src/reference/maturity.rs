//! Organizational digital maturity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Digital-readiness tier of an organization
///
/// Affects how much of the nominal automation gain is realized and how long
/// it takes to reach payback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    Low,
    #[default]
    Medium,
    High,
}

impl Maturity {
    pub const ALL: [Maturity; 3] = [Maturity::Low, Maturity::Medium, Maturity::High];

    /// Headcount below which an organization is assumed to have low maturity
    pub const MEDIUM_FROM_EMPLOYEES: u32 = 50;
    /// Headcount from which an organization is assumed to have high maturity
    pub const HIGH_FROM_EMPLOYEES: u32 = 250;

    pub fn as_str(&self) -> &'static str {
        match self {
            Maturity::Low => "low",
            Maturity::Medium => "medium",
            Maturity::High => "high",
        }
    }

    /// Derive a maturity level from headcount: <50 low, 50..249 medium, ≥250 high.
    pub fn from_employees(employees: u32) -> Self {
        if employees < Self::MEDIUM_FROM_EMPLOYEES {
            Maturity::Low
        } else if employees < Self::HIGH_FROM_EMPLOYEES {
            Maturity::Medium
        } else {
            Maturity::High
        }
    }

    /// Parse a maturity key, falling back to [`Maturity::Medium`] for unknown keys.
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Maturity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Maturity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Maturity::Low),
            "medium" => Ok(Maturity::Medium),
            "high" => Ok(Maturity::High),
            _ => Err(DomainError::UnknownMaturity(s.to_string())),
        }
    }
}

/// A value for every [`Maturity`] level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerMaturity<T> {
    pub low: T,
    pub medium: T,
    pub high: T,
}

impl<T> PerMaturity<T> {
    pub fn get(&self, maturity: Maturity) -> &T {
        match maturity {
            Maturity::Low => &self.low,
            Maturity::Medium => &self.medium,
            Maturity::High => &self.high,
        }
    }
}
