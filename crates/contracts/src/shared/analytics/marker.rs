use serde::{Deserialize, Serialize};

/// Discrete colour bucket of a map marker, keyed on growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Accelerating,
    Growing,
    Flat,
    Cooling,
    Declining,
}

impl ColorTier {
    pub fn code(&self) -> &'static str {
        match self {
            ColorTier::Accelerating => "accelerating",
            ColorTier::Growing => "growing",
            ColorTier::Flat => "flat",
            ColorTier::Cooling => "cooling",
            ColorTier::Declining => "declining",
        }
    }
}

/// Visualization-ready attributes of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerAttributes {
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `sales / max_sales` in `[0, 1]`
    pub intensity: f64,
    pub altitude: f64,
    pub radius: f64,
    pub color_tier: ColorTier,
}
