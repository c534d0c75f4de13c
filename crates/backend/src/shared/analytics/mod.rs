//! Analytics aggregation layer of the control tower.
//!
//! Everything here is a pure function over an in-memory snapshot: no I/O,
//! no caching, no shared state. Callers decide when to recompute.

pub mod classify;
pub mod delta;
pub mod error;
pub mod geo;
pub mod markers;
pub mod periods;
pub mod pulse;
pub mod rollup;
pub mod series;
pub mod snapshot;

pub use error::AnalyticsError;
pub use snapshot::RecordSnapshot;
