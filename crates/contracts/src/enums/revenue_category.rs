use serde::{Deserialize, Serialize};

/// Category scope selectable on the revenue chart.
///
/// Each category maps to a multiplier in the category weight table
/// (see `CategoryWeights` in the backend config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RevenueCategory {
    #[default]
    All,
    Electronics,
    Fashion,
    Marketplace,
    Logistics,
}

impl RevenueCategory {
    pub fn code(&self) -> &'static str {
        match self {
            RevenueCategory::All => "all",
            RevenueCategory::Electronics => "electronics",
            RevenueCategory::Fashion => "fashion",
            RevenueCategory::Marketplace => "marketplace",
            RevenueCategory::Logistics => "logistics",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RevenueCategory::All => "All categories",
            RevenueCategory::Electronics => "Electronics",
            RevenueCategory::Fashion => "Fashion",
            RevenueCategory::Marketplace => "Marketplace",
            RevenueCategory::Logistics => "Logistics",
        }
    }

    pub fn all() -> Vec<RevenueCategory> {
        vec![
            RevenueCategory::All,
            RevenueCategory::Electronics,
            RevenueCategory::Fashion,
            RevenueCategory::Marketplace,
            RevenueCategory::Logistics,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(RevenueCategory::All),
            "electronics" => Some(RevenueCategory::Electronics),
            "fashion" => Some(RevenueCategory::Fashion),
            "marketplace" => Some(RevenueCategory::Marketplace),
            "logistics" => Some(RevenueCategory::Logistics),
            _ => None,
        }
    }
}
