use contracts::shared::analytics::{AccountCounts, RegionRecord, SeriesPoint, TransactionRecord};

use super::AnalyticsError;

/// Stored revenue series for one granularity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSeries {
    pub historical: Vec<SeriesPoint>,
    pub forecast: Vec<SeriesPoint>,
}

impl StoredSeries {
    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecast.is_empty()
    }
}

/// Everything one aggregation cycle reads, fetched once before the pipeline runs.
///
/// `None` means the store could not provide the collection at all, which is
/// different from an empty collection.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    pub transactions: Option<Vec<TransactionRecord>>,
    pub regions: Option<Vec<RegionRecord>>,
    pub accounts: Option<AccountCounts>,
    pub series: StoredSeries,
}

impl RecordSnapshot {
    pub fn transactions(&self) -> Result<&[TransactionRecord], AnalyticsError> {
        self.transactions
            .as_deref()
            .ok_or(AnalyticsError::DataUnavailable {
                collection: "transactions",
            })
    }

    pub fn regions(&self) -> Result<&[RegionRecord], AnalyticsError> {
        self.regions
            .as_deref()
            .ok_or(AnalyticsError::DataUnavailable {
                collection: "regions",
            })
    }

    pub fn accounts(&self) -> Result<AccountCounts, AnalyticsError> {
        self.accounts.ok_or(AnalyticsError::DataUnavailable {
            collection: "accounts",
        })
    }
}
