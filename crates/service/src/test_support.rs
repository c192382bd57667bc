#![cfg(test)]
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use common::audit::memory::MemoryAuditLog;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};

use crate::audit::Auditor;

/// Fresh in-memory database with migrations applied. One pooled connection so
/// every query sees the same sqlite memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(5),
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Migrated database in a temp file, opened with the default pool settings.
pub async fn file_db(name: &str) -> Result<(DatabaseConnection, PathBuf), anyhow::Error> {
    let path = std::env::temp_dir().join(format!("{name}-{}.db", std::process::id()));
    remove_db_files(&path);
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, path))
}

pub fn remove_db_files(path: &Path) {
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

/// Connection whose first queries fail with the given message.
pub fn failing_db(message: &str) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom(message.to_string()), DbErr::Custom(message.to_string())])
        .into_connection()
}

pub fn recording_auditor() -> (Auditor, Arc<MemoryAuditLog>) {
    let log = Arc::new(MemoryAuditLog::default());
    (Auditor::new(log.clone()), log)
}
