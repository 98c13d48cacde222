//! Taskcal CLI - Command Line Operations for the Scheduling Engine
//!
//! This is the operational entry point for the taskcal scheduling engine.
//!
//! # Commands
//!
//! - `taskcal generate --calendar <file> --start <date> --frequency <freq>` -
//!   Generate the occurrence schedule for a task
//! - `taskcal check --calendar <file>` - Inspect a working-day calendar file
//!
//! # Architecture
//!
//! As part of the service layer, this crate orchestrates the adapter and
//! kernel layers to provide a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod calendar;
mod commands;
mod error;

pub use error::{CliError, Result};

/// Taskcal Scheduling Engine CLI
#[derive(Parser)]
#[command(name = "taskcal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the occurrence schedule for a task
    Generate {
        /// Path to the working-day calendar file (CSV/JSON/saved sheet response)
        #[arg(short, long)]
        calendar: String,

        /// Start date (DD/MM/YYYY or YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Recurrence frequency (e.g. daily, weekly, end-of-last-week)
        #[arg(short, long)]
        frequency: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Department the task belongs to
        #[arg(long, default_value = "")]
        department: String,

        /// Who assigned the task
        #[arg(long, default_value = "")]
        given_by: String,

        /// Who performs the task
        #[arg(long, default_value = "")]
        doer: String,

        /// Request reminder notifications
        #[arg(long)]
        enable_reminders: bool,

        /// Require an attachment on completion
        #[arg(long)]
        require_attachment: bool,

        /// Output format (json, csv, table)
        #[arg(long, default_value = "table")]
        format: String,

        /// Cap the number of printed occurrences
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect a working-day calendar file
    Check {
        /// Path to the working-day calendar file
        #[arg(short, long)]
        calendar: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            calendar,
            start,
            frequency,
            description,
            department,
            given_by,
            doer,
            enable_reminders,
            require_attachment,
            format,
            limit,
        } => commands::generate::run(commands::generate::GenerateArgs {
            calendar,
            start,
            frequency,
            description,
            department,
            given_by,
            doer,
            enable_reminders,
            require_attachment,
            format,
            limit,
        }),
        Commands::Check { calendar } => commands::check::run(&calendar),
    }
}
