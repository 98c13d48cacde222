//! Occurrence generation endpoint
//!
//! The dashboard posts the task form together with the working-day calendar
//! it fetched from the sheet; the handler runs the pure generator and
//! returns the occurrence list for preview or submission.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use adapter_sheets::{parse_date_like, parse_working_days};
use scheduler_core::calendar::WorkingDaySet;
use scheduler_models::schedules::{generate, Frequency, ScheduleError, ScheduleRequest};
use scheduler_models::tasks::TaskTemplate;

use super::AppState;

/// Request body for occurrence generation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Requested start date (any calendar feed format is accepted)
    pub start_date: String,
    /// Recurrence frequency wire spelling
    pub frequency: String,
    /// Raw working-day values as fetched from the calendar sheet
    pub working_days: Vec<String>,
    /// Task fields carried onto every occurrence
    #[serde(default)]
    pub task: TaskTemplate,
}

/// One generated occurrence on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceDto {
    /// Due date in ISO 8601
    pub due_date: String,
    /// Initial task status
    pub status: String,
    /// Recurrence frequency wire spelling
    pub frequency: String,
    /// Task fields from the request
    #[serde(flatten)]
    pub task: TaskTemplate,
}

/// Response body for successful generation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Working day of the first occurrence
    pub anchor_date: String,
    /// Whether the requested start date was replaced by a later working day
    pub start_date_substituted: bool,
    /// Calendar entries that failed to parse and were dropped
    pub dropped_calendar_entries: usize,
    /// Whether the occurrence list was cut at the configured cap
    pub truncated: bool,
    /// The generated occurrences in due-date order
    pub occurrences: Vec<OccurrenceDto>,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// Build the schedule routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/schedule/generate", post(generate_handler))
}

/// POST /api/v1/schedule/generate - Generate task occurrences
async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let start_date = match parse_date_like(&request.start_date) {
        Ok(date) => date,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("invalid_start_date", err.to_string())),
            )
                .into_response();
        }
    };

    let frequency: Frequency = match request.frequency.parse() {
        Ok(frequency) => frequency,
        Err(_) => {
            let err = ScheduleError::UnsupportedFrequency {
                name: request.frequency.clone(),
            };
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new("unsupported_frequency", err.to_string())),
            )
                .into_response();
        }
    };

    let parsed = parse_working_days(&request.working_days);
    let dropped_calendar_entries = request.working_days.len() - parsed.len();
    let calendar = WorkingDaySet::from_dates(parsed);

    let schedule_request = ScheduleRequest::new(start_date, frequency, request.task);
    let outcome = match generate(&schedule_request, &calendar) {
        Ok(outcome) => outcome,
        Err(err) => {
            let code = match err {
                ScheduleError::NoWorkingDaysAvailable => "no_working_days_available",
                ScheduleError::NoFutureWorkingDay { .. } => "no_future_working_day",
                ScheduleError::UnsupportedFrequency { .. } => "unsupported_frequency",
            };
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(code, err.to_string())),
            )
                .into_response();
        }
    };

    let anchor = outcome.anchor();
    let total = outcome.len();
    let cap = state.config.max_occurrences.unwrap_or(usize::MAX);
    let truncated = total > cap;

    let occurrences: Vec<OccurrenceDto> = outcome
        .into_occurrences()
        .into_iter()
        .take(cap)
        .map(|occurrence| {
            let (due_date, task) = occurrence.into_parts();
            OccurrenceDto {
                due_date: due_date.to_string(),
                status: "pending".to_string(),
                frequency: frequency.to_string(),
                task,
            }
        })
        .collect();

    tracing::info!(
        frequency = %frequency,
        anchor = %anchor.date(),
        generated = total,
        returned = occurrences.len(),
        dropped = dropped_calendar_entries,
        "schedule generated"
    );

    let response = GenerateResponse {
        anchor_date: anchor.date().to_string(),
        start_date_substituted: anchor.is_substituted(),
        dropped_calendar_entries,
        truncated,
        occurrences,
    };

    (StatusCode::OK, Json(response)).into_response()
}
