//! # scheduler_core: Foundation Layer for the Taskcal Scheduler
//!
//! ## Layer Role
//!
//! scheduler_core is the bottom layer of the workspace, providing:
//! - Calendar date type: `Date` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//! - Working-day calendar snapshot: `WorkingDaySet` (`calendar`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other workspace crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use scheduler_core::types::Date;
//! use scheduler_core::calendar::WorkingDaySet;
//!
//! let days = vec![
//!     Date::from_ymd(2024, 1, 2).unwrap(),
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 1, 2).unwrap(),
//! ];
//! let calendar = WorkingDaySet::from_dates(days);
//!
//! // Sorted and deduplicated
//! assert_eq!(calendar.len(), 2);
//! assert_eq!(calendar.first(), Some(Date::from_ymd(2024, 1, 1).unwrap()));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod types;
