//! # Dated Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `dated` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Reading today's date from the system clock, once
//! - Routing execution to the command handler and reporting errors
//!
//! ## Examples
//!
//! ```bash
//! # Copy a file under today's date
//! dated report.txt
//!
//! # Same, with diagnostic logging
//! dated -vv ~/Documents/2024-11-30_budget
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers
mod common; // Filesystem utilities
mod core; // Errors and the naming core

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "dated",
    about = "Create a new copy of a file or directory with today's date as a prefix",
    long_about = "Create a new copy of a file or directory with today's date as a prefix.\n\n\
                  report.txt            -> 2025-01-01_a_report.txt + 2025-01-01_b_report.txt\n\
                  2024-06-01_report.txt -> kept + 2025-01-01_report.txt\n\
                  2025-01-01_b_report   -> kept + 2025-01-01_c_report",
    version
)]
struct Cli {
    #[command(flatten)]
    args: commands::dated::DatedArgs,
    /// Increase diagnostic log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // The only clock read; everything below works from this date.
    let today = chrono::Local::now().date_naive();
    tracing::debug!("Today is {}", core::filename::stamp(today));

    if let Err(e) = commands::dated::handle_dated(cli.args, today) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_verbosity() {
        let cli = Cli::try_parse_from(["dated", "-vv", "notes.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.args.path, std::path::PathBuf::from("notes.txt"));
    }
}
