//! Schedule generation error types.

use scheduler_core::types::time::Date;
use thiserror::Error;

/// Errors that can occur during occurrence generation.
///
/// Structural problems with the inputs are surfaced as typed variants; a
/// recurrence that simply runs out of calendar is not an error (the partial
/// sequence is returned successfully).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The working-day calendar is empty after filtering.
    #[error("No working days available in the calendar")]
    NoWorkingDaysAvailable,

    /// Every known working day lies strictly before the requested start.
    #[error("No working day found on or after {start}")]
    NoFutureWorkingDay {
        /// The requested start date.
        start: Date,
    },

    /// The frequency value is not part of the supported vocabulary.
    #[error("Unsupported frequency: {name}")]
    UnsupportedFrequency {
        /// The raw frequency value as supplied by the caller.
        name: String,
    },
}
