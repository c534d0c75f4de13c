use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::granularity::Granularity;
use crate::enums::revenue_category::RevenueCategory;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Second historical point
    Lift,
    /// Last historical point
    PlatformChange,
}

impl AnnotationKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Lift => "Campaign lift",
            AnnotationKind::PlatformChange => "Platform change",
        }
    }
}

/// Event marker pinned to a point of the historical series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Revenue series scaled by a category weight, with its forecast continuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledSeries {
    pub granularity: Granularity,
    pub category: RevenueCategory,
    pub weight: f64,
    pub historical: Vec<SeriesPoint>,
    pub forecast: Vec<SeriesPoint>,
    pub annotations: Vec<Annotation>,
}
