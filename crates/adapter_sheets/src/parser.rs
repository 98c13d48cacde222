//! Tolerant parsing of calendar cell values and the sheet query envelope.

use chrono::NaiveDate;
use scheduler_core::types::time::Date;
use serde::Deserialize;

use crate::error::SheetsError;

/// Fallback formats tried after the two canonical spellings.
const FALLBACK_FORMATS: &[&str] = &["%d-%m-%Y", "%Y/%m/%d"];

/// Parses one raw calendar cell value into a [`Date`].
///
/// Accepted forms, in order:
/// 1. `DD/MM/YYYY` (the sheet's display format)
/// 2. ISO `YYYY-MM-DD`
/// 3. The legacy `Date(YYYY,M,D)` cell encoding, where the month is
///    zero-indexed
/// 4. Generic fallbacks (`DD-MM-YYYY`, `YYYY/MM/DD`)
///
/// # Examples
///
/// ```
/// use adapter_sheets::parse_date_like;
/// use scheduler_core::types::Date;
///
/// let expected = Date::from_ymd(2024, 1, 15).unwrap();
/// assert_eq!(parse_date_like("15/01/2024").unwrap(), expected);
/// assert_eq!(parse_date_like("2024-01-15").unwrap(), expected);
/// assert_eq!(parse_date_like("Date(2024,0,15)").unwrap(), expected);
/// assert!(parse_date_like("next tuesday").is_err());
/// ```
pub fn parse_date_like(raw: &str) -> Result<Date, SheetsError> {
    let value = raw.trim();

    if let Some(date) = parse_legacy_cell(value) {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        return Ok(date.into());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.into());
    }
    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.into());
        }
    }

    Err(SheetsError::UnparseableDate(raw.to_string()))
}

/// Parses the legacy `Date(YYYY,M,D)` cell encoding (zero-indexed month).
fn parse_legacy_cell(value: &str) -> Option<Date> {
    let inner = value.strip_prefix("Date(")?.strip_suffix(')')?;
    let mut parts = inner.splitn(3, ',');

    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;

    Date::from_ymd(year, month + 1, day).ok()
}

/// Parses a batch of raw calendar values, silently dropping anything that
/// fails to parse as a valid calendar date.
///
/// The upstream calendar column is uncontrolled; a stray header, blank, or
/// typo must not fail the whole scheduling request. Drops are logged at
/// debug level.
///
/// # Examples
///
/// ```
/// use adapter_sheets::parse_working_days;
///
/// let days = parse_working_days(["01/02/2024", "Working Days", "", "02/02/2024"]);
/// assert_eq!(days.len(), 2);
/// ```
pub fn parse_working_days<I, S>(values: I) -> Vec<Date>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| match parse_date_like(value.as_ref()) {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::debug!(value = value.as_ref(), "dropping unparseable calendar entry");
                None
            }
        })
        .collect()
}

/// The sheet query response, deserialised by field name.
#[derive(Debug, Deserialize)]
struct GvizDocument {
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    v: Option<serde_json::Value>,
}

impl GvizRow {
    /// Returns the first-column cell value as text, if present.
    fn first_value(&self) -> Option<String> {
        match self.c.first()?.as_ref()?.v.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Extracts the first-column cell values from a sheet query response body.
///
/// The endpoint wraps its JSON in a JavaScript function call
/// (`google.visualization.Query.setResponse(...)`); everything outside the
/// outermost braces is discarded before deserialising. A response with no
/// table or no rows yields an empty list.
///
/// # Errors
///
/// [`SheetsError::MalformedDocument`] when no JSON object can be located,
/// [`SheetsError::Json`] when the payload does not match the expected shape.
pub fn parse_gviz_document(body: &str) -> Result<Vec<String>, SheetsError> {
    let start = body
        .find('{')
        .ok_or_else(|| SheetsError::MalformedDocument("no JSON object found".to_string()))?;
    let end = body
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| SheetsError::MalformedDocument("unterminated JSON object".to_string()))?;

    let document: GvizDocument = serde_json::from_str(&body[start..=end])?;

    let rows = match document.table {
        Some(table) => table.rows,
        None => return Ok(Vec::new()),
    };

    Ok(rows.iter().filter_map(GvizRow::first_value).collect())
}

/// Parses a full sheet query response into working days.
///
/// Combines [`parse_gviz_document`] and [`parse_working_days`]: envelope
/// problems are errors, individual bad cells are dropped.
pub fn working_days_from_gviz(body: &str) -> Result<Vec<Date>, SheetsError> {
    let values = parse_gviz_document(body)?;
    Ok(parse_working_days(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_dd_mm_yyyy() {
        assert_eq!(parse_date_like("15/01/2024").unwrap(), d(2024, 1, 15));
        assert_eq!(parse_date_like("01/12/2023").unwrap(), d(2023, 12, 1));
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_date_like("2024-01-15").unwrap(), d(2024, 1, 15));
    }

    #[test]
    fn test_parse_legacy_cell_zero_indexed_month() {
        // Month 0 is January
        assert_eq!(parse_date_like("Date(2024,0,15)").unwrap(), d(2024, 1, 15));
        assert_eq!(parse_date_like("Date(2024,11,31)").unwrap(), d(2024, 12, 31));
    }

    #[test]
    fn test_parse_legacy_cell_with_spaces() {
        assert_eq!(
            parse_date_like(" Date(2024, 1, 29) ").unwrap(),
            d(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_fallback_formats() {
        assert_eq!(parse_date_like("15-01-2024").unwrap(), d(2024, 1, 15));
        assert_eq!(parse_date_like("2024/01/15").unwrap(), d(2024, 1, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date_like("").is_err());
        assert!(parse_date_like("Working Days").is_err());
        assert!(parse_date_like("Date(2024)").is_err());
        assert!(parse_date_like("32/01/2024").is_err());
        // Feb 30th is not a calendar date in any format
        assert!(parse_date_like("30/02/2024").is_err());
        assert!(parse_date_like("Date(2024,1,30)").is_err());
    }

    #[test]
    fn test_parse_working_days_drops_failures() {
        let days = parse_working_days([
            "02/01/2024",
            "header row",
            "",
            "01/01/2024",
            "Date(2024,0,3)",
        ]);
        assert_eq!(days, vec![d(2024, 1, 2), d(2024, 1, 1), d(2024, 1, 3)]);
    }

    #[test]
    fn test_parse_working_days_all_garbage() {
        let days = parse_working_days(["a", "b", "c"]);
        assert!(days.is_empty());
    }

    const SAMPLE_RESPONSE: &str = concat!(
        "/*O_o*/\n",
        "google.visualization.Query.setResponse({\"version\":\"0.6\",",
        "\"table\":{\"cols\":[{\"id\":\"A\",\"type\":\"date\"}],",
        "\"rows\":[",
        "{\"c\":[{\"v\":\"Date(2024,0,1)\",\"f\":\"01/01/2024\"}]},",
        "{\"c\":[{\"v\":\"02/01/2024\"}]},",
        "{\"c\":[null]},",
        "{\"c\":[{\"v\":null}]},",
        "{\"c\":[{\"v\":\"not a date\"}]}",
        "]}});"
    );

    #[test]
    fn test_parse_gviz_document() {
        let values = parse_gviz_document(SAMPLE_RESPONSE).unwrap();
        assert_eq!(values, vec!["Date(2024,0,1)", "02/01/2024", "not a date"]);
    }

    #[test]
    fn test_working_days_from_gviz() {
        let days = working_days_from_gviz(SAMPLE_RESPONSE).unwrap();
        assert_eq!(days, vec![d(2024, 1, 1), d(2024, 1, 2)]);
    }

    #[test]
    fn test_gviz_without_table_is_empty() {
        let days = working_days_from_gviz("callback({\"version\":\"0.6\"});").unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_gviz_no_json_is_malformed() {
        let result = parse_gviz_document("<!doctype html><p>sign in</p>");
        assert!(matches!(result, Err(SheetsError::MalformedDocument(_))));
    }

    #[test]
    fn test_gviz_bad_json_is_json_error() {
        let result = parse_gviz_document("callback({\"table\":{\"rows\":42}})");
        assert!(matches!(result, Err(SheetsError::Json(_))));
    }
}
