//! # adapter_sheets: Spreadsheet Calendar Feed Adapter
//!
//! Parses the working-day calendar as exported by the upstream spreadsheet
//! backend, isolating the rest of the workspace from its mixed and
//! occasionally malformed date representations.
//!
//! The scheduling kernel only ever sees clean [`scheduler_core::types::Date`]
//! values; everything format-shaped lives here:
//! - `DD/MM/YYYY` and ISO `YYYY-MM-DD` date strings
//! - the legacy `Date(YYYY,M,D)` cell encoding with zero-indexed months
//! - the JSONP-style envelope wrapped around the sheet query response

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;
mod parser;

pub use error::SheetsError;
pub use parser::{
    parse_date_like, parse_gviz_document, parse_working_days, working_days_from_gviz,
};
