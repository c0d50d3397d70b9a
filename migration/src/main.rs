use colored::Colorize;
use common::config::Config;
use common::logger::init_logger;
use migration::runner;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::SchemaManager;
use std::{env, process, time::Duration};

enum Command {
    Up,
    Down,
    Fresh,
}

/// `migration [up|down|fresh]`
///
/// `up` (the default) creates any missing tables, `down` drops them and
/// `fresh` does both.
#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    if let Err(err) = init_logger(&config.log_level, &config.log_file) {
        eprintln!("{} could not initialise logging: {}", "warning:".yellow(), err);
    }

    let command = match env::args().nth(1).as_deref() {
        None | Some("up") => Command::Up,
        Some("down") => Command::Down,
        Some("fresh") => Command::Fresh,
        Some(other) => {
            eprintln!(
                "{} unknown command `{}` (expected up, down or fresh)",
                "error:".red(),
                other
            );
            process::exit(2);
        }
    };

    log::info!("{} migration starting", config.project_name);

    let mut options = ConnectOptions::new(config.database_url());
    options
        .max_connections(1)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(false);

    let db = match Database::connect(options).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!(
                "{} could not connect to {}: {}",
                "error:".red(),
                config.redacted_database_url(),
                err
            );
            process::exit(1);
        }
    };

    let result = {
        let manager = SchemaManager::new(&db);
        match command {
            Command::Up => runner::apply_all(&manager).await,
            Command::Down => runner::revert_all(&manager).await,
            Command::Fresh => match runner::revert_all(&manager).await {
                Ok(()) => runner::apply_all(&manager).await,
                Err(err) => Err(err),
            },
        }
    };

    db.close().await.ok();

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red(), err);
        process::exit(1);
    }
}
