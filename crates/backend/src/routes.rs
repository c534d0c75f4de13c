use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D402 CONTROL TOWER
        // ========================================
        .route(
            "/api/d402/control_tower",
            post(handlers::d402_control_tower::get_control_tower),
        )
        .route(
            "/api/d402/filter_options",
            get(handlers::d402_control_tower::get_filter_options),
        )
}
