use axum::{http::StatusCode, Json};
use contracts::dashboards::d402_control_tower::{ControlTowerRequest, ControlTowerResponse};
use contracts::shared::analytics::FilterOptions;

use crate::dashboards::d402_control_tower::repository::SqliteRecordStore;
use crate::dashboards::d402_control_tower::service;
use crate::shared::analytics::AnalyticsError;
use crate::shared::config::get_config;
use crate::shared::data::db::get_connection;

/// Unavailable data is the store's problem (503), anything else is ours (500)
fn status_for(error: &anyhow::Error) -> StatusCode {
    match error.downcast_ref::<AnalyticsError>() {
        Some(AnalyticsError::DataUnavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn store() -> Result<SqliteRecordStore, StatusCode> {
    get_connection().map(SqliteRecordStore::new).map_err(|e| {
        tracing::error!("D402 Dashboard: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })
}

/// POST /api/d402/control_tower
pub async fn get_control_tower(
    Json(request): Json<ControlTowerRequest>,
) -> Result<Json<ControlTowerResponse>, StatusCode> {
    tracing::info!(
        "D402 Dashboard: overview for range={:?} granularity={} category={}",
        request.time_range,
        request.granularity.code(),
        request.category.code()
    );

    let store = store()?;
    match service::get_control_tower(&store, request, &get_config().analytics).await {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: month revenue {:.2}, {} regions ({}), {} markers",
                response.rollup.month,
                response.geo.active_region_count,
                if response.geo.is_fallback { "fallback" } else { "filtered" },
                response.markers.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to build overview: {:#}", e);
            Err(status_for(&e))
        }
    }
}

/// GET /api/d402/filter_options
pub async fn get_filter_options() -> Result<Json<FilterOptions>, StatusCode> {
    let store = store()?;
    match service::get_filter_options(&store).await {
        Ok(options) => {
            tracing::info!(
                "D402 Dashboard: Returning filter options for {} countries",
                options.countries.len()
            );
            Ok(Json(options))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to get filter options: {:#}", e);
            Err(status_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unavailable: anyhow::Error = AnalyticsError::DataUnavailable {
            collection: "regions",
        }
        .into();
        assert_eq!(status_for(&unavailable), StatusCode::SERVICE_UNAVAILABLE);

        let other = anyhow::anyhow!("disk I/O error");
        assert_eq!(status_for(&other), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
