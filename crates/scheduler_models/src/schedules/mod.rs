//! Occurrence generation for recurring tasks.
//!
//! This module provides:
//! - [`Frequency`]: Recurrence frequency vocabulary (daily, weekly, ...)
//! - [`ScheduleRequest`]: One generation request with opaque metadata
//! - [`generate`]: The pure occurrence generator
//! - [`ScheduleOutcome`] / [`Occurrence`]: The generated sequence
//! - [`ScheduleError`]: Typed structural failures
//!
//! # Examples
//!
//! ```
//! use scheduler_core::calendar::WorkingDaySet;
//! use scheduler_core::types::Date;
//! use scheduler_models::schedules::{generate, Frequency, ScheduleRequest};
//!
//! let calendar = WorkingDaySet::from_dates(vec![
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 1, 8).unwrap(),
//!     Date::from_ymd(2024, 1, 15).unwrap(),
//! ]);
//! let request = ScheduleRequest::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Frequency::Weekly,
//!     (),
//! );
//!
//! let outcome = generate(&request, &calendar).unwrap();
//! assert_eq!(outcome.len(), 3); // three Mondays, a week apart
//! ```

mod error;
mod frequency;
mod generator;
mod request;

pub use error::ScheduleError;
pub use frequency::{Frequency, WeekOfMonth};
pub use generator::generate;
pub use request::{Anchor, Occurrence, ScheduleOutcome, ScheduleRequest};
