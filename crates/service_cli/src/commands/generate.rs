//! Generate command implementation
//!
//! Loads a working-day calendar file, runs the occurrence generator, and
//! prints the resulting schedule.

use std::path::Path;

use tracing::{info, warn};

use adapter_sheets::parse_date_like;
use scheduler_core::calendar::WorkingDaySet;
use scheduler_models::schedules::{generate, Frequency, Occurrence, ScheduleRequest};
use scheduler_models::tasks::TaskTemplate;

use crate::calendar::load_calendar;
use crate::{CliError, Result};

/// Arguments for the generate command.
pub struct GenerateArgs {
    /// Calendar file path.
    pub calendar: String,
    /// Start date string.
    pub start: String,
    /// Frequency wire spelling.
    pub frequency: String,
    /// Task description.
    pub description: String,
    /// Department the task belongs to.
    pub department: String,
    /// Who assigned the task.
    pub given_by: String,
    /// Who performs the task.
    pub doer: String,
    /// Request reminder notifications.
    pub enable_reminders: bool,
    /// Require an attachment on completion.
    pub require_attachment: bool,
    /// Output format.
    pub format: String,
    /// Cap on printed occurrences.
    pub limit: Option<usize>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let start = parse_date_like(&args.start)
        .map_err(|_| CliError::InvalidArgument(format!("Unrecognised start date: {}", args.start)))?;

    let frequency: Frequency = args.frequency.parse().map_err(|_| {
        CliError::InvalidArgument(format!(
            "Unknown frequency: {}. Supported: {}",
            args.frequency,
            Frequency::all().map(|f| f.name()).join(", ")
        ))
    })?;

    let loaded = load_calendar(Path::new(&args.calendar))?;
    if loaded.dropped() > 0 {
        warn!(
            dropped = loaded.dropped(),
            "calendar entries could not be parsed and were ignored"
        );
    }
    let calendar = WorkingDaySet::from_dates(loaded.days);
    info!(
        working_days = calendar.len(),
        start = %start,
        frequency = %frequency,
        "generating schedule"
    );

    let task = TaskTemplate {
        description: args.description,
        department: args.department,
        given_by: args.given_by,
        doer: args.doer,
        enable_reminders: args.enable_reminders,
        require_attachment: args.require_attachment,
    };

    let outcome = generate(&ScheduleRequest::new(start, frequency, task), &calendar)?;

    let anchor = outcome.anchor();
    if anchor.is_substituted() {
        warn!(
            requested = %start,
            used = %anchor.date(),
            "start date is not a working day; the next working day was used"
        );
    }

    let total = outcome.len();
    let occurrences: Vec<Occurrence<TaskTemplate>> = match args.limit {
        Some(limit) => outcome.into_occurrences().into_iter().take(limit).collect(),
        None => outcome.into_occurrences(),
    };
    if occurrences.len() < total {
        info!(
            shown = occurrences.len(),
            generated = total,
            "output capped by --limit"
        );
    }

    match args.format.as_str() {
        "json" => print_json(&occurrences, frequency),
        "csv" => print_csv(&occurrences, frequency)?,
        "table" => print_table(&occurrences),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    Ok(())
}

fn print_json(occurrences: &[Occurrence<TaskTemplate>], frequency: Frequency) {
    let rows: Vec<serde_json::Value> = occurrences
        .iter()
        .map(|occurrence| {
            serde_json::json!({
                "dueDate": occurrence.due_date().to_string(),
                "status": "pending",
                "frequency": frequency.name(),
                "description": occurrence.metadata().description,
                "department": occurrence.metadata().department,
                "givenBy": occurrence.metadata().given_by,
                "doer": occurrence.metadata().doer,
                "enableReminders": occurrence.metadata().enable_reminders,
                "requireAttachment": occurrence.metadata().require_attachment,
            })
        })
        .collect();

    println!("{}", serde_json::Value::Array(rows));
}

fn print_csv(occurrences: &[Occurrence<TaskTemplate>], frequency: Frequency) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["due_date", "status", "frequency", "description", "doer"])?;
    for occurrence in occurrences {
        writer.write_record([
            occurrence.due_date().to_string().as_str(),
            "pending",
            frequency.name(),
            occurrence.metadata().description.as_str(),
            occurrence.metadata().doer.as_str(),
        ])?;
    }
    writer.flush().map_err(CliError::Io)?;
    Ok(())
}

fn print_table(occurrences: &[Occurrence<TaskTemplate>]) {
    println!("\n┌──────┬────────────┬──────────────┬──────────────────────────────┐");
    println!("│ #    │ Due date   │ Doer         │ Description                  │");
    println!("├──────┼────────────┼──────────────┼──────────────────────────────┤");
    if occurrences.is_empty() {
        println!("│ (no occurrences)                                               │");
    }
    for (index, occurrence) in occurrences.iter().enumerate() {
        println!(
            "│ {:<4} │ {} │ {:<12.12} │ {:<28.28} │",
            index + 1,
            occurrence.due_date(),
            occurrence.metadata().doer,
            occurrence.metadata().description,
        );
    }
    println!("└──────┴────────────┴──────────────┴──────────────────────────────┘");
}
