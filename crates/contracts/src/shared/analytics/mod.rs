pub mod filter;
pub mod geo;
pub mod marker;
pub mod periods;
pub mod records;
pub mod rollup;
pub mod series;

pub use filter::{FilterSet, Selector};
pub use geo::{FilterOptions, GeoSummary};
pub use marker::{ColorTier, MarkerAttributes};
pub use periods::{PeriodWindows, Window};
pub use records::{AccountCounts, RegionRecord, TransactionRecord};
pub use rollup::{RevenueRollup, StatusCount};
pub use series::{Annotation, AnnotationKind, ScaledSeries, SeriesPoint};
