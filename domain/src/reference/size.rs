//! Company size categories (drive pricing)

use serde::{Deserialize, Serialize};

/// Employee-count bracket that selects a pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    /// Fewer than 50 employees
    Small,
    /// 50 to 249 employees
    Medium,
    /// 250 to 999 employees
    Large,
    /// 1000 employees and more
    Enterprise,
}

impl SizeCategory {
    pub fn from_employees(employees: u32) -> Self {
        match employees {
            0..50 => SizeCategory::Small,
            50..250 => SizeCategory::Medium,
            250..1000 => SizeCategory::Large,
            _ => SizeCategory::Enterprise,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value for every [`SizeCategory`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerSize<T> {
    pub small: T,
    pub medium: T,
    pub large: T,
    pub enterprise: T,
}

impl<T> PerSize<T> {
    pub fn get(&self, size: SizeCategory) -> &T {
        match size {
            SizeCategory::Small => &self.small,
            SizeCategory::Medium => &self.medium,
            SizeCategory::Large => &self.large,
            SizeCategory::Enterprise => &self.enterprise,
        }
    }
}
