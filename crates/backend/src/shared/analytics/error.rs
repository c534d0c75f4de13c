use thiserror::Error;

/// The only failure the analytics layer can report.
///
/// Every computation has a total domain; this is raised when a collection
/// the pipeline needs was never handed over by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("data unavailable: {collection} missing from snapshot")]
    DataUnavailable { collection: &'static str },
}
