use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use contracts::enums::granularity::Granularity;
use contracts::enums::order_status::OrderStatus;
use contracts::enums::payment_status::PaymentStatus;
use contracts::shared::analytics::{AccountCounts, RegionRecord, SeriesPoint, TransactionRecord};
use sea_orm::{DatabaseConnection, FromQueryResult, Statement};

use crate::shared::analytics::snapshot::StoredSeries;

/// Narrow read API of the record store.
///
/// Every call returns a fully materialised collection; the analytics layer
/// never pages or streams. `Ok(None)` means the store has no such dataset,
/// an `Err` is a failed read and must reach the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Transactions created at or after `since`, plus those without a timestamp
    async fn transactions_since(&self, since: DateTime<Utc>) -> Result<Vec<TransactionRecord>>;

    /// Region performance reference dataset of the reporting period
    async fn regions(&self) -> Result<Option<Vec<RegionRecord>>>;

    async fn account_counts(&self) -> Result<Option<AccountCounts>>;

    /// Prepared historical + forecast series; empty when none is stored
    async fn revenue_series(&self, granularity: Granularity) -> Result<StoredSeries>;
}

/// Date prefix the SQL prefilter compares `created_at` against.
///
/// One day before `since`: stored values keep their own offset, so a row's
/// date prefix can be a day behind its UTC date. The exact bound is applied
/// after parsing.
pub fn prefilter_day(since: DateTime<Utc>) -> String {
    let day = since.date_naive().pred_opt().unwrap_or(NaiveDate::MIN);
    day.format("%Y-%m-%d").to_string()
}

/// Parse a stored timestamp: RFC 3339, or SQLite's `YYYY-MM-DD HH:MM:SS` read as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// SQLite implementation
// ---------------------------------------------------------------------------

#[derive(Debug, FromQueryResult)]
struct TransactionRow {
    id: String,
    created_at: Option<String>,
    total: f64,
    status: String,
    payment_status: String,
}

impl TransactionRow {
    fn into_record(self) -> Option<TransactionRecord> {
        let status = OrderStatus::from_code(&self.status);
        let payment_status = PaymentStatus::from_code(&self.payment_status);
        let (Some(status), Some(payment_status)) = (status, payment_status) else {
            tracing::warn!(
                "D402: transaction {} skipped, unknown status {}/{}",
                self.id,
                self.status,
                self.payment_status
            );
            return None;
        };
        Some(TransactionRecord {
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            id: self.id,
            total: self.total,
            status,
            payment_status,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct RegionRow {
    name: String,
    country: String,
    continent: String,
    category: String,
    seller_type: String,
    shipping_mode: String,
    sales: f64,
    orders: i64,
    users: i64,
    buyers: i64,
    sellers: i64,
    growth_pct: f64,
    conversion_rate_pct: f64,
    latitude: f64,
    longitude: f64,
}

fn count(value: i64) -> u64 {
    value.max(0) as u64
}

impl From<RegionRow> for RegionRecord {
    fn from(r: RegionRow) -> Self {
        RegionRecord {
            name: r.name,
            country: r.country,
            continent: r.continent,
            category: r.category,
            seller_type: r.seller_type,
            shipping_mode: r.shipping_mode,
            sales: r.sales,
            orders: count(r.orders),
            users: count(r.users),
            buyers: count(r.buyers),
            sellers: count(r.sellers),
            growth_pct: r.growth_pct,
            conversion_rate_pct: r.conversion_rate_pct,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct AccountCountsRow {
    buyers: i64,
    sellers: i64,
    pending_kyc: i64,
    active_disputes: i64,
    pending_payouts: i64,
}

#[derive(Debug, FromQueryResult)]
struct SeriesRow {
    kind: String,
    ts: String,
    value: f64,
}

pub struct SqliteRecordStore {
    db: &'static DatabaseConnection,
}

impl SqliteRecordStore {
    pub fn new(db: &'static DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn transactions_since(&self, since: DateTime<Utc>) -> Result<Vec<TransactionRecord>> {
        let sql = r#"
            SELECT id, created_at, total, status, payment_status
            FROM d402_transactions
            WHERE created_at IS NULL
               OR created_at = ''
               OR substr(created_at, 1, 10) >= ?
            ORDER BY created_at
        "#;
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Sqlite,
            sql,
            [prefilter_day(since).into()],
        );

        let rows = TransactionRow::find_by_statement(stmt)
            .all(self.db)
            .await
            .context("reading d402_transactions")?;

        Ok(rows
            .into_iter()
            .filter_map(TransactionRow::into_record)
            .filter(|r| r.created_at.map_or(true, |ts| ts >= since))
            .collect())
    }

    async fn regions(&self) -> Result<Option<Vec<RegionRecord>>> {
        let sql = r#"
            SELECT
                name, country, continent, category, seller_type, shipping_mode,
                sales,
                CAST(orders AS INTEGER)  AS orders,
                CAST(users AS INTEGER)   AS users,
                CAST(buyers AS INTEGER)  AS buyers,
                CAST(sellers AS INTEGER) AS sellers,
                growth_pct, conversion_rate_pct, latitude, longitude
            FROM d402_regions
            ORDER BY name
        "#;
        let stmt = Statement::from_string(sea_orm::DatabaseBackend::Sqlite, sql.to_string());
        let rows = RegionRow::find_by_statement(stmt)
            .all(self.db)
            .await
            .context("reading d402_regions")?;

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.into_iter().map(Into::into).collect()))
    }

    async fn account_counts(&self) -> Result<Option<AccountCounts>> {
        let sql = r#"
            SELECT
                CAST((SELECT COUNT(*) FROM d402_accounts WHERE role = 'buyer') AS INTEGER)          AS buyers,
                CAST((SELECT COUNT(*) FROM d402_accounts WHERE role = 'seller') AS INTEGER)         AS sellers,
                CAST((SELECT COUNT(*) FROM d402_accounts WHERE kyc_status = 'pending') AS INTEGER)  AS pending_kyc,
                CAST((SELECT COUNT(*) FROM d402_disputes
                      WHERE status IN ('open', 'under_review')) AS INTEGER)                          AS active_disputes,
                CAST((SELECT COUNT(*) FROM d402_payouts WHERE status = 'pending') AS INTEGER)       AS pending_payouts
        "#;
        let stmt = Statement::from_string(sea_orm::DatabaseBackend::Sqlite, sql.to_string());
        let row = AccountCountsRow::find_by_statement(stmt)
            .one(self.db)
            .await
            .context("reading account counters")?;

        Ok(row.map(|r| AccountCounts {
            buyers: count(r.buyers),
            sellers: count(r.sellers),
            pending_kyc: count(r.pending_kyc),
            active_disputes: count(r.active_disputes),
            pending_payouts: count(r.pending_payouts),
        }))
    }

    async fn revenue_series(&self, granularity: Granularity) -> Result<StoredSeries> {
        let sql = r#"
            SELECT kind, ts, value
            FROM d402_revenue_series
            WHERE granularity = ?
            ORDER BY ts
        "#;
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Sqlite,
            sql,
            [granularity.code().into()],
        );
        let rows = SeriesRow::find_by_statement(stmt)
            .all(self.db)
            .await
            .context("reading d402_revenue_series")?;

        let mut series = StoredSeries::default();
        for row in rows {
            let Some(timestamp) = parse_timestamp(&row.ts) else {
                tracing::warn!("D402: series point with unreadable timestamp '{}' skipped", row.ts);
                continue;
            };
            let point = SeriesPoint::new(timestamp, row.value);
            match row.kind.as_str() {
                "historical" => series.historical.push(point),
                "forecast" => series.forecast.push(point),
                other => tracing::warn!("D402: unknown series kind '{}' skipped", other),
            }
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = DateTime::parse_from_rfc3339("2025-05-20T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_timestamp("2025-05-20T09:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-20T12:00:00+03:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-20 09:00:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_prefilter_day_keeps_rows_stored_with_negative_offset() {
        let since = parse_timestamp("2025-03-20T00:00:00Z").unwrap();
        let stored = "2025-03-19T20:00:00-05:00";

        let day = prefilter_day(since);
        assert_eq!(day, "2025-03-19");
        assert!(&stored[..10] >= day.as_str());
        assert!(parse_timestamp(stored).unwrap() >= since);

        let midnight_offset = parse_timestamp("2025-01-01T00:00:00Z").unwrap();
        assert_eq!(prefilter_day(midnight_offset), "2024-12-31");
    }

    #[test]
    fn test_empty_timestamp_row_is_kept_undated() {
        let row = TransactionRow {
            id: "t3".into(),
            created_at: Some(String::new()),
            total: 10.0,
            status: "pending".into(),
            payment_status: "pending".into(),
        };
        let record = row.into_record().unwrap();
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_unknown_status_row_is_skipped() {
        let row = TransactionRow {
            id: "t1".into(),
            created_at: Some("2025-05-20T09:00:00Z".into()),
            total: 10.0,
            status: "lost".into(),
            payment_status: "completed".into(),
        };
        assert!(row.into_record().is_none());
    }

    #[test]
    fn test_row_without_timestamp_is_kept_undated() {
        let row = TransactionRow {
            id: "t2".into(),
            created_at: Some("not a date".into()),
            total: 10.0,
            status: "delivered".into(),
            payment_status: "completed".into(),
        };
        let record = row.into_record().unwrap();
        assert!(record.created_at.is_none());
        assert_eq!(record.status, OrderStatus::Delivered);
    }
}
