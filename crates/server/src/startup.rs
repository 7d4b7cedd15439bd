use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the store and create the schema if it is missing.
pub async fn init_store(cfg: &AppConfig) -> Result<sea_orm::DatabaseConnection, StartupError> {
    common::env::ensure_sqlite_parent(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("schema bootstrap failed: {e}")))?;
    info!("schema ready");
    Ok(db)
}

/// Public entry: load config, bootstrap the store and run the HTTP server
/// until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = init_store(&cfg).await?;
    let app: Router = routes::build_router(ServerState::new(db), build_cors());

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    info!(%addr, "starting parking management server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}
