use std::sync::Arc;

use axum::Router;
use common::{
    audit::{AuditLog, FileAuditLog, NoopAuditLog, TracingAuditLog},
    utils::logging::{init_logging_default, init_logging_json},
};
use configs::{AppConfig, AuditConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json` selects JSON output
pub fn init_logging() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file when present, environment variables otherwise.
pub fn load_config() -> anyhow::Result<AppConfig> {
    configs::load_or_env()
}

/// Open the pool and bring the schema up to date when configured to.
pub async fn connect_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    if let Some(file) = common::env::sqlite_file_of(&cfg.url) {
        common::env::ensure_parent_dir(file).await?;
    }
    let db = connect_with_config(&DatabaseConfig::from(cfg))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
        info!("migrations applied");
    }
    Ok(db)
}

pub async fn build_audit_log(cfg: &AuditConfig) -> Result<Arc<dyn AuditLog>, StartupError> {
    if !cfg.enabled {
        return Ok(Arc::new(NoopAuditLog));
    }
    match cfg.file.as_deref() {
        Some(path) => {
            common::env::ensure_parent_dir(path).await?;
            let log = FileAuditLog::open(path).await.map_err(|e| StartupError::Audit(format!("{path}: {e}")))?;
            info!(path, "audit log file opened");
            Ok(Arc::new(log))
        }
        None => Ok(Arc::new(TracingAuditLog)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;
    let db = connect_database(&cfg.database).await?;
    let audit = build_audit_log(&cfg.audit).await?;
    let state = ServerState::new(db, audit);

    let app: Router = routes::build_router(state, build_cors());

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind {addr}: {e}")))?;
    info!(%addr, "starting author/book api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
