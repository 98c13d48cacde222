//! CLI error types.

use adapter_sheets::SheetsError;
use scheduler_models::schedules::ScheduleError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file argument does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value is outside the supported vocabulary.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Calendar file could not be parsed.
    #[error("Calendar error: {0}")]
    Calendar(#[from] SheetsError),

    /// Occurrence generation failed.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
