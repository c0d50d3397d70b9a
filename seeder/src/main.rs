use colored::Colorize;
use common::config::Config;
use common::logger::init_logger;
use std::{env, process};

use crate::fixtures::Fixtures;

mod fixtures;
mod format;
mod seed;
mod seeds;
mod verify;

/// `seeder [FIXTURES_JSON]`
///
/// Seeds the profile database with the built-in sample data, or with the
/// profiles and statistics from the given JSON file.
#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    if let Err(err) = init_logger(&config.log_level, &config.log_file) {
        eprintln!("{} could not initialise logging: {}", "warning:".yellow(), err);
    }
    log::info!("{} seeder starting", config.project_name);

    let fixtures = match env::args().nth(1) {
        Some(path) => match Fixtures::from_json_file(&path) {
            Ok(fixtures) => fixtures,
            Err(err) => {
                eprintln!("{} {}", "error:".red(), err);
                process::exit(1);
            }
        },
        None => Fixtures::builtin(),
    };

    println!("Connecting to {}...", config.redacted_database_url());
    let db = match db::connect(config).await {
        Ok(db) => db,
        Err(err) => {
            log::error!("Database connection failed: {err}");
            eprintln!(
                "{} could not connect to {}. Check that the database is running.",
                "error:".red(),
                config.redacted_database_url()
            );
            process::exit(1);
        }
    };

    let outcome = seed::run_all(&db, &fixtures).await;

    let exit_code = match outcome {
        Ok(report) => {
            println!();
            print!("{report}");
            println!();
            println!("{}", "Sample data seeded successfully.".green());
            0
        }
        Err(err) => {
            eprintln!("{} {}", "Seeding failed:".red(), err);
            1
        }
    };

    if let Err(err) = db.close().await {
        log::warn!("Failed to close database connection: {err}");
    }

    process::exit(exit_code);
}
