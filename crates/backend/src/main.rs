use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use control_tower::shared::{config, data};
use control_tower::{routes, system};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Logs method, path, status and latency of every request
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} -> {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let cfg = config::load_config()?;
    let db_path = config::get_database_path(&cfg)?;

    data::migration_runner::run_migrations(&db_path).await?;
    data::db::initialize_database(&db_path).await?;

    let bind = cfg.server.bind.clone();
    config::install(cfg);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!("Control tower listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
