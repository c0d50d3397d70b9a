use crate::connect_url;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

/// In-memory SQLite database with no tables.
pub async fn setup_empty_test_db() -> DatabaseConnection {
    connect_url("sqlite::memory:", Duration::from_secs(5))
        .await
        .expect("Failed to connect to in-memory db")
}

/// In-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = setup_empty_test_db().await;

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
