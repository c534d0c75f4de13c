use crate::shared::data::db::build_sqlite_url;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use std::path::{Path, PathBuf};

/// Migrations compiled into the binary, used when no directory is deployed
static EMBEDDED: Migrator = sqlx::migrate!("./migrations");

fn candidate_migrations_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.join("migrations"));
        }
    }

    dirs.push(PathBuf::from("migrations"));
    dirs.push(PathBuf::from("crates/backend/migrations"));

    dirs
}

pub async fn run_migrations(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = SqlitePool::connect(&build_sqlite_url(db_path)).await?;

    match candidate_migrations_dirs()
        .into_iter()
        .find(|p| p.exists() && p.is_dir())
    {
        Some(dir) => {
            tracing::info!("Using migrations directory: {}", dir.display());
            let migrator = Migrator::new(dir.as_path()).await?;
            migrator.run(&pool).await?;
        }
        None => {
            tracing::info!("No migrations directory found, applying embedded migrations");
            EMBEDDED.run(&pool).await?;
        }
    }

    pool.close().await;
    tracing::info!("Database migrations applied successfully");
    Ok(())
}
