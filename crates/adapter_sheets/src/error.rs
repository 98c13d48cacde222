//! Calendar feed parsing error types.

use thiserror::Error;

/// Errors from parsing the spreadsheet calendar feed.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The response body does not contain the expected JSON envelope.
    #[error("Malformed calendar document: {0}")]
    MalformedDocument(String),

    /// The JSON payload inside the envelope failed to deserialise.
    #[error("Calendar JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single cell value could not be read as a calendar date.
    ///
    /// Surfaced only by [`crate::parse_date_like`]; bulk parsing drops the
    /// offending entry instead.
    #[error("Unparseable date value: {0:?}")]
    UnparseableDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_display() {
        let err = SheetsError::MalformedDocument("no braces".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed calendar document: no braces"
        );
    }

    #[test]
    fn test_unparseable_date_display() {
        let err = SheetsError::UnparseableDate("tomorrow".to_string());
        assert_eq!(format!("{}", err), "Unparseable date value: \"tomorrow\"");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SheetsError = json_err.into();
        assert!(matches!(err, SheetsError::Json(_)));
    }
}
