use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::enums::granularity::Granularity;
use crate::enums::revenue_category::RevenueCategory;
use crate::enums::time_range::TimeRange;
use crate::shared::analytics::{
    AccountCounts, FilterOptions, FilterSet, GeoSummary, MarkerAttributes, PeriodWindows,
    RevenueRollup, ScaledSeries, StatusCount,
};
use crate::shared::indicators::IndicatorValue;

/// Request for the control tower overview.
///
/// Every field is optional on the wire; the defaults describe the landing view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlTowerRequest {
    /// Reference instant with the viewer's UTC offset.
    /// `None` means "server clock, server offset".
    pub now: Option<DateTime<FixedOffset>>,
    pub time_range: TimeRange,
    pub granularity: Granularity,
    pub category: RevenueCategory,
    pub filter: FilterSet,
}

/// Live run-rate of today's revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePulse {
    pub minutes_elapsed: u32,
    pub today_total: f64,
    pub per_minute: f64,
}

/// Response for the control tower overview: one full refresh of every aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlTowerResponse {
    pub windows: PeriodWindows,
    pub rollup: RevenueRollup,
    /// KPI cards in display order
    pub indicators: Vec<IndicatorValue>,
    pub status_breakdown: Vec<StatusCount>,
    pub revenue_series: ScaledSeries,
    pub geo: GeoSummary,
    pub markers: Vec<MarkerAttributes>,
    pub filter_options: FilterOptions,
    pub pulse: LivePulse,
    pub accounts: AccountCounts,
}
