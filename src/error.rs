//! Error types for the Work Schedule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while defining, storing, and
//! resolving work schedules.
//!
//! Note that an employee having no assignment on a date is *not* an error:
//! it is reported as [`ResolutionState::Unassigned`](crate::models::ResolutionState).

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{AssignmentId, EmployeeId, ExceptionId, ShiftId, TimeIntervalId};

/// The main error type for the Work Schedule Engine.
///
/// # Example
///
/// ```
/// use schedule_engine::error::EngineError;
///
/// let error = EngineError::InvalidFormat {
///     input: "7h30".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format '7h30': expected HH:mm or HH:mm:ss");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string could not be parsed.
    #[error("Invalid time format '{input}': expected HH:mm or HH:mm:ss")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// A time interval has no display name.
    #[error("Time interval alias must not be empty")]
    MissingAlias,

    /// A work duration was zero or negative.
    #[error("Work duration must be positive, got {minutes} minutes")]
    NonPositiveDuration {
        /// The offending duration in minutes.
        minutes: i64,
    },

    /// The combined span of an interval exceeds what one schedule may cover.
    #[error("Schedule span of {minutes} minutes exceeds the maximum of {max} minutes")]
    DurationOutOfRange {
        /// The span that was requested, counting every break and tier.
        minutes: u64,
        /// The largest span accepted.
        max: u32,
    },

    /// A punch window ends before it starts without being marked overnight.
    #[error("Invalid {window} window: {start} - {end} ends before it starts")]
    InvalidWindow {
        /// Which window was invalid ("punch-in" or "punch-out").
        window: String,
        /// The window start as HH:mm.
        start: String,
        /// The window end as HH:mm.
        end: String,
    },

    /// More overtime tiers were supplied than the engine supports.
    #[error("At most {max} overtime tiers are supported, got {count}")]
    TooManyOvertimeTiers {
        /// The number of tiers supplied.
        count: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A shift definition was inconsistent.
    #[error("Invalid shift '{alias}': {message}")]
    InvalidShift {
        /// The alias of the invalid shift.
        alias: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An assignment was inconsistent (e.g. ends before it starts).
    #[error("Invalid assignment for employee {employee_id}: {message}")]
    InvalidAssignment {
        /// The employee the assignment belongs to.
        employee_id: EmployeeId,
        /// A description of what made the assignment invalid.
        message: String,
    },

    /// A new assignment overlaps an existing one for the same employee.
    #[error("Assignment overlaps existing assignment {existing_id} for employee {employee_id}")]
    OverlappingAssignment {
        /// The employee both assignments belong to.
        employee_id: EmployeeId,
        /// The assignment already in the store.
        existing_id: AssignmentId,
    },

    /// Schedules on dates before today cannot be edited.
    #[error("Cannot modify schedule for past date {date} (today is {today})")]
    ImmutablePastDate {
        /// The date that was targeted.
        date: NaiveDate,
        /// The clock's current date.
        today: NaiveDate,
    },

    /// An exception already exists for the assignment and date.
    #[error("An exception already exists for assignment {assignment_id} on {date}")]
    DuplicateException {
        /// The assignment the exception belongs to.
        assignment_id: AssignmentId,
        /// The date that already carries an exception.
        date: NaiveDate,
    },

    /// An exception was placed on a date its assignment does not cover.
    #[error("Date {date} is outside assignment {assignment_id}")]
    ExceptionOutsideAssignment {
        /// The assignment that was referenced.
        assignment_id: AssignmentId,
        /// The requested exception date.
        date: NaiveDate,
    },

    /// A referenced time interval does not exist.
    #[error("Time interval not found: {id}")]
    TimeIntervalNotFound {
        /// The missing identifier.
        id: TimeIntervalId,
    },

    /// A time interval cannot be deleted while a shift or exception uses it.
    #[error("Time interval {id} is still referenced by {referenced_by}")]
    TimeIntervalInUse {
        /// The interval that was targeted.
        id: TimeIntervalId,
        /// What still references it.
        referenced_by: String,
    },

    /// A referenced shift does not exist.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The missing identifier.
        id: ShiftId,
    },

    /// A referenced assignment does not exist.
    #[error("Assignment not found: {id}")]
    AssignmentNotFound {
        /// The missing identifier.
        id: AssignmentId,
    },

    /// A referenced exception does not exist.
    #[error("Schedule exception not found: {id}")]
    ExceptionNotFound {
        /// The missing identifier.
        id: ExceptionId,
    },

    /// An entity was inserted with an identifier that is already taken.
    #[error("{entity} with id {id} already exists")]
    DuplicateId {
        /// The kind of entity.
        entity: &'static str,
        /// The conflicting identifier.
        id: i64,
    },

    /// A client-supplied identifier is outside the range the store issues.
    #[error("{entity} id {id} is out of range: identifiers must be between 1 and {max}")]
    InvalidId {
        /// The kind of entity.
        entity: &'static str,
        /// The rejected identifier.
        id: i64,
        /// The largest identifier accepted.
        max: i64,
    },

    /// A schedule request covers more days than the engine serves at once.
    #[error("Requested range of {days} days exceeds the maximum of {max} days")]
    RangeTooLarge {
        /// Number of days requested, inclusive of both ends.
        days: i64,
        /// The configured maximum.
        max: u32,
    },

    /// The schedule store could not serve the request.
    #[error("Schedule store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
