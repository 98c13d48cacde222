//! Calendar file loading.
//!
//! The working-day calendar reaches the CLI as whatever the operator had to
//! hand: a CSV export of the sheet column, a JSON array of date strings, a
//! saved raw sheet query response, or plain one-date-per-line text. The
//! format is sniffed, and individual bad values are dropped the same way the
//! adapter drops them.

use std::path::Path;

use adapter_sheets::{parse_gviz_document, parse_working_days};
use scheduler_core::types::time::Date;

use crate::error::{CliError, Result};

/// Detected calendar file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarFormat {
    /// CSV export; dates are taken from the first column.
    Csv,
    /// JSON array of date strings.
    Json,
    /// Raw sheet query response (JSONP envelope).
    Gviz,
    /// One date per line.
    Lines,
}

/// A loaded calendar with drop accounting.
#[derive(Debug, Clone)]
pub struct LoadedCalendar {
    /// The dates that parsed successfully.
    pub days: Vec<Date>,
    /// The number of candidate values seen in the file.
    pub total_values: usize,
}

impl LoadedCalendar {
    /// Returns the number of values dropped as unparseable.
    pub fn dropped(&self) -> usize {
        self.total_values - self.days.len()
    }
}

/// Detects the calendar format from the file extension and content.
pub fn sniff_format(path: &Path, content: &str) -> CalendarFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => return CalendarFormat::Csv,
        Some("json") => return CalendarFormat::Json,
        _ => {}
    }

    let trimmed = content.trim_start();
    if content.contains("setResponse") || trimmed.starts_with("/*") || trimmed.starts_with('{') {
        CalendarFormat::Gviz
    } else if trimmed.starts_with('[') {
        CalendarFormat::Json
    } else {
        CalendarFormat::Lines
    }
}

/// Parses calendar content in the given format.
pub fn parse_calendar_content(content: &str, format: CalendarFormat) -> Result<LoadedCalendar> {
    let values: Vec<String> = match format {
        CalendarFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(content.as_bytes());
            let mut values = Vec::new();
            for record in reader.records() {
                let record = record?;
                if let Some(first) = record.get(0) {
                    if !first.trim().is_empty() {
                        values.push(first.to_string());
                    }
                }
            }
            values
        }
        CalendarFormat::Json => {
            let parsed: Vec<String> = serde_json::from_str(content)
                .map_err(adapter_sheets::SheetsError::from)?;
            parsed
        }
        CalendarFormat::Gviz => parse_gviz_document(content)?,
        CalendarFormat::Lines => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    };

    let total_values = values.len();
    let days = parse_working_days(values);

    Ok(LoadedCalendar { days, total_values })
}

/// Loads a calendar file, sniffing its format.
pub fn load_calendar(path: &Path) -> Result<LoadedCalendar> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let format = sniff_format(path, &content);
    tracing::debug!(path = %path.display(), ?format, "loading calendar");

    parse_calendar_content(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_sniff_by_extension() {
        assert_eq!(
            sniff_format(&PathBuf::from("days.csv"), "anything"),
            CalendarFormat::Csv
        );
        assert_eq!(
            sniff_format(&PathBuf::from("days.json"), "anything"),
            CalendarFormat::Json
        );
    }

    #[test]
    fn test_sniff_by_content() {
        let path = PathBuf::from("days.txt");
        assert_eq!(
            sniff_format(&path, "/*O_o*/\ngoogle.visualization.Query.setResponse({})"),
            CalendarFormat::Gviz
        );
        assert_eq!(
            sniff_format(&path, "{\"table\":{}}"),
            CalendarFormat::Gviz
        );
        assert_eq!(
            sniff_format(&path, "[\"01/01/2024\"]"),
            CalendarFormat::Json
        );
        assert_eq!(
            sniff_format(&path, "01/01/2024\n02/01/2024\n"),
            CalendarFormat::Lines
        );
    }

    #[test]
    fn test_parse_csv_first_column() {
        let content = "01/01/2024,January\n02/01/2024,January\nnot a date,oops\n";
        let loaded = parse_calendar_content(content, CalendarFormat::Csv).unwrap();
        assert_eq!(loaded.days, vec![d(2024, 1, 1), d(2024, 1, 2)]);
        assert_eq!(loaded.total_values, 3);
        assert_eq!(loaded.dropped(), 1);
    }

    #[test]
    fn test_parse_json_array() {
        let content = r#"["2024-01-01", "08/01/2024", "garbage"]"#;
        let loaded = parse_calendar_content(content, CalendarFormat::Json).unwrap();
        assert_eq!(loaded.days, vec![d(2024, 1, 1), d(2024, 1, 8)]);
        assert_eq!(loaded.dropped(), 1);
    }

    #[test]
    fn test_parse_json_invalid_is_error() {
        let result = parse_calendar_content("{\"not\":\"an array\"}", CalendarFormat::Json);
        assert!(matches!(result, Err(CliError::Calendar(_))));
    }

    #[test]
    fn test_parse_lines_skips_blanks() {
        let content = "01/01/2024\n\n  \n02/01/2024\n";
        let loaded = parse_calendar_content(content, CalendarFormat::Lines).unwrap();
        assert_eq!(loaded.days.len(), 2);
        assert_eq!(loaded.total_values, 2);
    }

    #[test]
    fn test_parse_gviz_envelope() {
        let content = concat!(
            "google.visualization.Query.setResponse({\"table\":{\"rows\":[",
            "{\"c\":[{\"v\":\"Date(2024,0,1)\"}]},",
            "{\"c\":[{\"v\":\"02/01/2024\"}]}",
            "]}});"
        );
        let loaded = parse_calendar_content(content, CalendarFormat::Gviz).unwrap();
        assert_eq!(loaded.days, vec![d(2024, 1, 1), d(2024, 1, 2)]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_calendar(&PathBuf::from("/no/such/calendar.csv"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
