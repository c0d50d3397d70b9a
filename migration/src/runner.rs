use common::status;
use sea_orm_migration::prelude::*;
use std::future::Future;
use std::time::Instant;

/// Runs every migration's `up` against `manager`, in order.
///
/// The table migrations all use `IF NOT EXISTS`, so this is safe to call
/// against a database that already has the schema. No history rows are
/// written to `seaql_migrations`.
pub async fn apply_all(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for migration in <crate::Migrator as MigratorTrait>::migrations() {
        let label = format!("Applying {}", migration.name());
        run_step(&label, migration.up(manager)).await?;
    }
    Ok(())
}

/// Runs every migration's `down` in reverse order.
pub async fn revert_all(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for migration in <crate::Migrator as MigratorTrait>::migrations().into_iter().rev() {
        let label = format!("Reverting {}", migration.name());
        run_step(&label, migration.down(manager)).await?;
    }
    Ok(())
}

async fn run_step<F>(label: &str, step: F) -> Result<(), DbErr>
where
    F: Future<Output = Result<(), DbErr>>,
{
    status::begin(label);
    let start = Instant::now();

    match step.await {
        Ok(()) => {
            status::done(start.elapsed());
            Ok(())
        }
        Err(err) => {
            status::failed();
            log::error!("{label} failed: {err}");
            Err(err)
        }
    }
}
