//! # Scheduler Models (Kernel Layer)
//!
//! Recurrence rules and the occurrence generator.
//!
//! This crate provides:
//! - Recurrence frequency vocabulary ([`schedules::Frequency`])
//! - The pure occurrence generator ([`schedules::generate`])
//! - Task template records carried onto generated occurrences ([`tasks::TaskTemplate`])
//!
//! ## Design Principles
//!
//! - **Pure kernel**: the generator performs no I/O and owns no state; each
//!   call is a function of its inputs alone
//! - **Typed outcomes**: structural failures are enum variants, never panics
//! - **Normal termination**: a recurrence that cannot advance ends the
//!   sequence instead of erroring

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
pub mod tasks;
