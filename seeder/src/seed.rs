use async_trait::async_trait;
use common::status;
use migration::runner;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use sea_orm_migration::SchemaManager;
use std::time::Instant;

use crate::fixtures::Fixtures;
use crate::seeds::{statistics::StatisticsSeeder, user_profile::UserProfileSeeder};
use crate::verify::{self, VerificationReport};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("could not read fixtures from {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixtures in {path}: {source}")]
    FixtureParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Row counts produced by one seeder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Inserts issued.
    pub attempted: usize,
    /// Inserts that wrote a row; the rest hit an existing key and were skipped.
    pub inserted: usize,
}

impl SeedReport {
    pub fn skipped(&self) -> usize {
        self.attempted - self.inserted
    }
}

/// A batch of inserts that runs inside a single transaction.
#[async_trait]
pub trait Seeder: Send + Sync {
    async fn seed(&self, txn: &DatabaseTransaction) -> Result<SeedReport, SeedError>;
}

/// Commits on success; rolls back and hands the error back otherwise.
async fn finish<T>(txn: DatabaseTransaction, result: Result<T, SeedError>) -> Result<T, SeedError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                log::error!("Rollback failed: {rollback_err}");
            }
            Err(err)
        }
    }
}

/// Creates the three tables if they are missing, in one transaction.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), SeedError> {
    println!("Creating tables...");
    let txn = db.begin().await?;

    let result = {
        let manager = SchemaManager::new(&txn);
        runner::apply_all(&manager).await.map_err(SeedError::from)
    };

    finish(txn, result).await
}

/// Runs one seeder in its own transaction and prints a status line for it.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<SeedReport, SeedError> {
    status::begin(&format!("Seeding {name}"));
    let start = Instant::now();

    let txn = db.begin().await?;
    let result = seeder.seed(&txn).await;

    match finish(txn, result).await {
        Ok(report) => {
            status::done(start.elapsed());
            log::info!(
                "Seeded {}: {} attempted, {} inserted, {} already present",
                name,
                report.attempted,
                report.inserted,
                report.skipped()
            );
            Ok(report)
        }
        Err(err) => {
            status::failed();
            log::error!("Seeding {name} failed: {err}");
            Err(err)
        }
    }
}

/// Schema, profiles, statistics, then the read-only verification queries.
pub async fn run_all(
    db: &DatabaseConnection,
    fixtures: &Fixtures,
) -> Result<VerificationReport, SeedError> {
    init_schema(db).await?;

    let profiles = run_seeder(&UserProfileSeeder::new(&fixtures.profiles), "profiles", db).await?;
    println!("Inserted {} profiles ({} new)", profiles.attempted, profiles.inserted);

    let statistics =
        run_seeder(&StatisticsSeeder::new(&fixtures.statistics), "statistics", db).await?;
    println!(
        "Inserted {} statistics ({} new)",
        fixtures.statistics.len(),
        statistics.inserted
    );

    println!("Verifying data...");
    Ok(verify::verify(db).await?)
}
