//! Response types for the schedule engine API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EmployeeId, ResolvedDaySchedule};

/// Body of `GET /employees/:employee_id/schedule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The employee the schedule belongs to.
    pub employee_id: EmployeeId,
    /// First resolved date.
    pub start_date: NaiveDate,
    /// Last resolved date.
    pub end_date: NaiveDate,
    /// One entry per date, in date order.
    pub days: Vec<ResolvedDaySchedule>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a malformed query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code, details) = match &error {
            EngineError::InvalidFormat { .. }
            | EngineError::MissingAlias
            | EngineError::NonPositiveDuration { .. }
            | EngineError::DurationOutOfRange { .. }
            | EngineError::InvalidWindow { .. }
            | EngineError::TooManyOvertimeTiers { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_TIME_INTERVAL",
                Some("The time interval definition is inconsistent"),
            ),
            EngineError::InvalidShift { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SHIFT",
                Some("The shift cycle definition is inconsistent"),
            ),
            EngineError::InvalidAssignment { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ASSIGNMENT", None)
            }
            EngineError::ExceptionOutsideAssignment { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXCEPTION_OUTSIDE_ASSIGNMENT",
                None,
            ),
            EngineError::OverlappingAssignment { .. } => (
                StatusCode::CONFLICT,
                "OVERLAPPING_ASSIGNMENT",
                Some("An employee may hold only one assignment per date"),
            ),
            EngineError::DuplicateException { .. } => (
                StatusCode::CONFLICT,
                "DUPLICATE_EXCEPTION",
                Some("Update or remove the existing exception instead"),
            ),
            EngineError::InvalidId { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ID", None)
            }
            EngineError::RangeTooLarge { .. } => (
                StatusCode::BAD_REQUEST,
                "RANGE_TOO_LARGE",
                Some("Request the schedule in smaller date windows"),
            ),
            EngineError::DuplicateId { .. } => (StatusCode::CONFLICT, "DUPLICATE_ID", None),
            EngineError::TimeIntervalInUse { .. } => {
                (StatusCode::CONFLICT, "TIME_INTERVAL_IN_USE", None)
            }
            EngineError::ImmutablePastDate { .. } => (
                StatusCode::FORBIDDEN,
                "IMMUTABLE_PAST_DATE",
                Some("Schedules before today are read-only"),
            ),
            EngineError::TimeIntervalNotFound { .. } => {
                (StatusCode::NOT_FOUND, "TIME_INTERVAL_NOT_FOUND", None)
            }
            EngineError::ShiftNotFound { .. } => (StatusCode::NOT_FOUND, "SHIFT_NOT_FOUND", None),
            EngineError::AssignmentNotFound { .. } => {
                (StatusCode::NOT_FOUND, "ASSIGNMENT_NOT_FOUND", None)
            }
            EngineError::ExceptionNotFound { .. } => {
                (StatusCode::NOT_FOUND, "EXCEPTION_NOT_FOUND", None)
            }
            EngineError::StoreUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE", None)
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                Some("The engine configuration could not be loaded"),
            ),
        };

        let error = match details {
            Some(details) => ApiError::with_details(code, message, details),
            None => ApiError::new(code, message),
        };
        ApiErrorResponse { status, error }
    }
}
