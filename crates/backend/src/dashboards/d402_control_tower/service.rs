use anyhow::Result;
use chrono::{DateTime, Days, FixedOffset, Local, Months, NaiveDate, TimeZone, Utc};
use contracts::dashboards::d402_control_tower::{ControlTowerRequest, ControlTowerResponse};
use contracts::enums::granularity::Granularity;
use contracts::shared::analytics::{FilterOptions, RegionRecord};

use super::repository::RecordStore;
use crate::shared::analytics::classify::{count_undated, status_breakdown};
use crate::shared::analytics::geo;
use crate::shared::analytics::markers::derive_markers;
use crate::shared::analytics::periods::{local_midnight, resolve_windows};
use crate::shared::analytics::pulse::live_pulse;
use crate::shared::analytics::rollup::rollup;
use crate::shared::analytics::series::{bucket_revenue, bucket_start, weighted_series};
use crate::shared::analytics::{AnalyticsError, RecordSnapshot};
use crate::shared::config::AnalyticsConfig;
use crate::shared::indicators::compute::revenue::build_indicators;

/// Earliest instant the overview needs: the previous-month window, or the
/// series lookback when transactions have to be bucketed.
///
/// The result is the local start of a bucket, so the first bucketed point
/// covers its whole day, week or month.
pub fn history_start<Tz: TimeZone>(now: &DateTime<Tz>, granularity: Granularity) -> DateTime<Utc> {
    let today = now.date_naive();
    let lookback = match granularity {
        Granularity::Daily => today.checked_sub_days(Days::new(30)),
        Granularity::Weekly => today.checked_sub_days(Days::new(12 * 7)),
        Granularity::Monthly => today.checked_sub_months(Months::new(12)),
    }
    .unwrap_or(NaiveDate::MIN);
    let two_months_ago = today
        .checked_sub_months(Months::new(2))
        .unwrap_or(NaiveDate::MIN);

    let start = bucket_start(lookback.min(two_months_ago), granularity);
    local_midnight(&now.timezone(), start)
}

/// Fetch everything one refresh reads. Store failures propagate unchanged.
pub async fn load_snapshot(
    store: &dyn RecordStore,
    since: DateTime<Utc>,
    granularity: Granularity,
) -> Result<RecordSnapshot> {
    let transactions = store.transactions_since(since).await?;
    let regions = store.regions().await?;
    let accounts = store.account_counts().await?;
    let series = store.revenue_series(granularity).await?;

    Ok(RecordSnapshot {
        transactions: Some(transactions),
        regions,
        accounts,
        series,
    })
}

/// Run the whole aggregation pipeline over one snapshot.
///
/// Pure: the same snapshot, `now` and request always give the same response.
pub fn build_overview<Tz: TimeZone>(
    snapshot: &RecordSnapshot,
    now: &DateTime<Tz>,
    request: &ControlTowerRequest,
    config: &AnalyticsConfig,
) -> Result<ControlTowerResponse, AnalyticsError> {
    let transactions = snapshot.transactions()?;
    let regions = snapshot.regions()?;
    let accounts = snapshot.accounts()?;

    let undated = count_undated(transactions);
    if undated > 0 {
        tracing::warn!(
            "D402: {} transactions without timestamp excluded from all windows",
            undated
        );
    }

    let windows = resolve_windows(now);
    let rollup = rollup(transactions, &windows, &config.revenue);
    let indicators = build_indicators(&rollup, request.time_range, &config.revenue);
    let status_breakdown = status_breakdown(transactions, &windows.month());

    let historical = if snapshot.series.historical.is_empty() {
        tracing::warn!(
            "D402: no stored {} series, bucketing transactions instead",
            request.granularity.code()
        );
        bucket_revenue(transactions, request.granularity, &now.timezone())
    } else {
        snapshot.series.historical.clone()
    };
    let revenue_series = weighted_series(
        request.granularity,
        request.category,
        &config.category_weights,
        &historical,
        &snapshot.series.forecast,
    );

    let geo = geo::summarize(regions, &request.filter);
    let displayed: Vec<&RegionRecord> = geo.ranking.iter().collect();
    let markers = derive_markers(&displayed, &config.markers);
    let filter_options = geo::filter_options(regions);

    let pulse = live_pulse(now, rollup.today);

    Ok(ControlTowerResponse {
        windows,
        rollup,
        indicators,
        status_breakdown,
        revenue_series,
        geo,
        markers,
        filter_options,
        pulse,
        accounts,
    })
}

/// Server clock with the server's current UTC offset
fn server_now() -> DateTime<FixedOffset> {
    let local = Local::now();
    local.with_timezone(local.offset())
}

/// Get the control tower overview
pub async fn get_control_tower(
    store: &dyn RecordStore,
    request: ControlTowerRequest,
    config: &AnalyticsConfig,
) -> Result<ControlTowerResponse> {
    let now = request.now.unwrap_or_else(server_now);
    let since = history_start(&now, request.granularity);

    let snapshot = load_snapshot(store, since, request.granularity).await?;
    let response = build_overview(&snapshot, &now, &request, config)?;
    Ok(response)
}

/// Get the choices of every geographic filter dimension
pub async fn get_filter_options(store: &dyn RecordStore) -> Result<FilterOptions> {
    let regions = store
        .regions()
        .await?
        .ok_or(AnalyticsError::DataUnavailable {
            collection: "regions",
        })?;
    Ok(geo::filter_options(&regions))
}
