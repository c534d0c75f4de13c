use serde::{Deserialize, Serialize};

use super::records::RegionRecord;

/// Aggregates over the filtered region set.
///
/// When the filter matches nothing, `is_fallback` is set and every aggregate
/// (and `ranking`) is computed over the unfiltered collection instead.
/// `filtered` always holds the strict filter result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSummary {
    pub filtered: Vec<RegionRecord>,
    pub is_fallback: bool,
    pub total_sales: f64,
    pub total_orders: u64,
    pub total_sellers: u64,
    pub total_buyers: u64,
    pub total_users: u64,
    pub active_region_count: usize,
    /// Sales descending
    pub ranking: Vec<RegionRecord>,
    pub highest: Option<RegionRecord>,
    pub lowest: Option<RegionRecord>,
    pub average_growth_pct: f64,
}

/// Distinct values of every filterable dimension, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub continents: Vec<String>,
    pub countries: Vec<String>,
    pub categories: Vec<String>,
    pub seller_types: Vec<String>,
    pub shipping_modes: Vec<String>,
}
