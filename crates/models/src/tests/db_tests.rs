use crate::db::{connect_with_config, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;
use migration::MigratorTrait;
use std::time::Duration;

use super::setup_test_db;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = setup_test_db().await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

#[test]
fn config_conversion_keeps_pool_settings() {
    let raw = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 7,
        connect_timeout_secs: 3,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from(&raw);
    assert_eq!(cfg.max_connections, 7);
    assert_eq!(cfg.min_connections, 1);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(3));
}

#[test]
fn sqlite_pool_is_single_connection() {
    let mut cfg = DatabaseConfig { url: "sqlite://data/app.db?mode=rwc".into(), ..DatabaseConfig::default() };
    cfg.max_connections = 10;
    assert_eq!(crate::db::pool_bounds(&cfg), (1, 1));

    cfg.url = "postgres://localhost/app".into();
    cfg.min_connections = 2;
    assert_eq!(crate::db::pool_bounds(&cfg), (10, 2));
}

/// Migrations are idempotent and reversible
#[tokio::test]
async fn test_migrations_up_down_up() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    migration::Migrator::up(&db, None).await?;
    migration::Migrator::down(&db, None).await?;
    migration::Migrator::up(&db, None).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT COUNT(*) AS n FROM book".to_string());
    let row = db.query_one(stmt).await?.expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 0);
    Ok(())
}
