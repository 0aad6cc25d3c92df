//! HTTP request handlers for the schedule engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize;
use crate::error::EngineError;
use crate::models::{
    Assignment, EmployeeId, ExceptionId, NewScheduleException, Shift, TimeIntervalId,
};
use crate::service::ExceptionUpdate;

use super::request::{ScheduleQuery, TimeIntervalRequest};
use super::response::{ApiError, ApiErrorResponse, ScheduleResponse};
use super::state::AppState;

type ApiResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/:employee_id/schedule", get(schedule_handler))
        .route("/time-intervals", post(create_time_interval_handler))
        .route("/time-intervals/summary", post(summary_handler))
        .route("/time-intervals/:id", get(get_time_interval_handler))
        .route("/shifts", post(create_shift_handler))
        .route("/assignments", post(create_assignment_handler))
        .route("/exceptions", post(create_exception_handler))
        .route(
            "/exceptions/:id",
            put(update_exception_handler).delete(delete_exception_handler),
        )
        .with_state(state)
}

/// Handler for GET /employees/:employee_id/schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
    query: Result<Query<ScheduleQuery>, QueryRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id, "Processing schedule request");

    let Query(query) = query.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
    })?;

    let start_time = Instant::now();
    let days = state
        .calendar()
        .resolve(employee_id, query.start_date, query.end_date)
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id,
        days = days.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Schedule resolved successfully"
    );
    Ok(json(
        StatusCode::OK,
        ScheduleResponse {
            employee_id,
            start_date: query.start_date,
            end_date: query.end_date,
            days,
        },
    ))
}

/// Handler for POST /time-intervals.
async fn create_time_interval_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeIntervalRequest>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time interval creation");

    let request = parse_body(payload, correlation_id)?;
    let interval = request
        .into_interval()
        .map_err(|err| failed(correlation_id, err))?;

    let max = state.settings().max_overtime_tiers;
    if interval.overtime_tiers.len() > max {
        return Err(failed(
            correlation_id,
            EngineError::TooManyOvertimeTiers {
                count: interval.overtime_tiers.len(),
                max,
            },
        ));
    }

    let stored = state
        .store()
        .insert_time_interval(interval)
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        time_interval_id = ?stored.id,
        end_time = %stored.end_time(),
        "Time interval created"
    );
    Ok(json(StatusCode::CREATED, stored))
}

/// Handler for GET /time-intervals/:id.
async fn get_time_interval_handler(
    State(state): State<AppState>,
    Path(id): Path<TimeIntervalId>,
) -> ApiResult {
    let interval = state
        .store()
        .get_time_interval(id)
        .map_err(|err| failed(Uuid::new_v4(), err))?;
    Ok(json(StatusCode::OK, interval))
}

/// Handler for POST /time-intervals/summary.
///
/// Summarizes a draft without storing or fully validating it, so the
/// builder can show totals while the form is still incomplete. Only the
/// span bound is enforced.
async fn summary_handler(payload: Result<Json<TimeIntervalRequest>, JsonRejection>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let draft = parse_body(payload, correlation_id)?
        .into_interval()
        .map_err(|err| failed(correlation_id, err))?;
    draft
        .ensure_span_in_range()
        .map_err(|err| failed(correlation_id, err))?;

    Ok(json(StatusCode::OK, summarize(&draft)))
}

/// Handler for POST /shifts.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<Shift>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let shift = parse_body(payload, correlation_id)?;

    let stored = state
        .store()
        .insert_shift(shift)
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = ?stored.id,
        cycle_days = stored.cycle_days(),
        auto_rotate = stored.auto_rotate,
        "Shift created"
    );
    Ok(json(StatusCode::CREATED, stored))
}

/// Handler for POST /assignments.
async fn create_assignment_handler(
    State(state): State<AppState>,
    payload: Result<Json<Assignment>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let assignment = parse_body(payload, correlation_id)?;

    let stored = state
        .store()
        .insert_assignment(assignment)
        .map_err(|err| failed(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        assignment_id = ?stored.id,
        employee_id = stored.employee_id,
        "Assignment created"
    );
    Ok(json(StatusCode::CREATED, stored))
}

/// Handler for POST /exceptions.
async fn create_exception_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewScheduleException>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload, correlation_id)?;

    let stored = state
        .exceptions()
        .create(request)
        .map_err(|err| failed(correlation_id, err))?;
    Ok(json(StatusCode::CREATED, stored))
}

/// Handler for PUT /exceptions/:id.
async fn update_exception_handler(
    State(state): State<AppState>,
    Path(id): Path<ExceptionId>,
    payload: Result<Json<ExceptionUpdate>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let update = parse_body(payload, correlation_id)?;

    let stored = state
        .exceptions()
        .update(id, update)
        .map_err(|err| failed(correlation_id, err))?;
    Ok(json(StatusCode::OK, stored))
}

/// Handler for DELETE /exceptions/:id.
async fn delete_exception_handler(
    State(state): State<AppState>,
    Path(id): Path<ExceptionId>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    state
        .exceptions()
        .remove(id)
        .map_err(|err| failed(correlation_id, err))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn json<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Logs an engine error and converts it to its HTTP form.
fn failed(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Unwraps a JSON body, mapping rejections to 400 responses.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}
