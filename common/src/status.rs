//! Console status lines of the form `Seeding profiles ........ done (12.3ms)`.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

const STATUS_COLUMN: usize = 80;

/// Prints the label padded with dots, leaving the cursor on the same line.
pub fn begin(label: &str) {
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{} {} ", label.bold(), dots);
    io::stdout().flush().ok();
}

pub fn done(elapsed: Duration) {
    let time_str = format!("({:.2?})", elapsed).dimmed();
    println!("{} {}", "done".green(), time_str);
}

pub fn failed() {
    println!("{}", "failed".red());
}
