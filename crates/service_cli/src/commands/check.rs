//! Check command implementation
//!
//! Inspects a working-day calendar file and reports what the scheduler
//! would see.

use std::path::Path;

use tracing::info;

use scheduler_core::calendar::WorkingDaySet;

use crate::calendar::load_calendar;
use crate::Result;

/// Run the check command
pub fn run(calendar_path: &str) -> Result<()> {
    let loaded = load_calendar(Path::new(calendar_path))?;
    let dropped = loaded.dropped();
    let parsed = loaded.days.len();
    let calendar = WorkingDaySet::from_dates(loaded.days);
    let duplicates = parsed - calendar.len();

    info!(path = calendar_path, "calendar loaded");

    println!("Calendar: {}", calendar_path);
    println!("  values seen:   {}", loaded.total_values);
    println!("  working days:  {}", calendar.len());
    println!("  dropped:       {}", dropped);
    println!("  duplicates:    {}", duplicates);
    match (calendar.first(), calendar.last()) {
        (Some(first), Some(last)) => {
            println!("  span:          {} .. {}", first, last);
        }
        _ => {
            println!("  span:          (empty)");
        }
    }

    Ok(())
}
