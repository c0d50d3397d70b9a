pub mod models;
pub mod test_utils;

use common::config::Config;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Opens the single connection used for a run, using the configured URL.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    connect_url(
        &config.database_url(),
        Duration::from_secs(config.connect_timeout_secs),
    )
    .await
}

/// Opens a pool capped at one connection and checks that it is usable.
///
/// Accepts `postgres://` URLs as well as `sqlite:` URLs, the latter being
/// what the tests use for throwaway databases.
pub async fn connect_url(url: &str, timeout: Duration) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    db.ping().await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_url_opens_sqlite_memory() {
        let db = connect_url("sqlite::memory:", Duration::from_secs(5))
            .await
            .expect("Failed to connect to in-memory db");
        db.close().await.expect("Failed to close connection");
    }

    #[tokio::test]
    async fn connect_url_reports_unreachable_database() {
        let result = connect_url(
            "sqlite:///nonexistent-dir/does/not/exist.db?mode=ro",
            Duration::from_secs(2),
        )
        .await;

        assert!(result.is_err());
    }
}
