//! Schedule persistence boundary.
//!
//! The engine never talks to a database directly. It reads and writes
//! schedule entities through the [`ScheduleStore`] trait and takes "today"
//! from a [`Clock`]. [`InMemoryScheduleStore`] is the reference
//! implementation and enforces the store-side integrity rules:
//!
//! - entities are validated before they are written
//! - assignments for one employee never overlap
//! - at most one exception exists per assignment and date
//!
//! Any failure of the backing storage itself is reported as
//! [`EngineError::StoreUnavailable`](crate::error::EngineError::StoreUnavailable).
//! The engine does not retry.

mod clock;
mod memory;

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::{InMemoryScheduleStore, MAX_ID};

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    Assignment, AssignmentId, EmployeeId, ExceptionId, ScheduleException, Shift, ShiftId,
    TimeInterval, TimeIntervalId,
};

/// CRUD access to schedule entities.
///
/// Inserts return the stored entity with its identifier filled in. An
/// entity supplied with an identifier keeps it, which lets catalogs be
/// imported verbatim.
pub trait ScheduleStore: Send + Sync {
    /// Validates and stores a time interval.
    fn insert_time_interval(&self, interval: TimeInterval) -> EngineResult<TimeInterval>;
    /// Validates and replaces the time interval stored under `id`.
    fn update_time_interval(
        &self,
        id: TimeIntervalId,
        interval: TimeInterval,
    ) -> EngineResult<TimeInterval>;
    /// Fetches one time interval.
    fn get_time_interval(&self, id: TimeIntervalId) -> EngineResult<TimeInterval>;
    /// Fetches several time intervals, failing if any is missing.
    fn time_intervals_by_ids(&self, ids: &[TimeIntervalId]) -> EngineResult<Vec<TimeInterval>>;
    /// All stored time intervals.
    fn list_time_intervals(&self) -> EngineResult<Vec<TimeInterval>>;
    /// Deletes a time interval no shift or exception references.
    fn delete_time_interval(&self, id: TimeIntervalId) -> EngineResult<TimeInterval>;

    /// Validates and stores a shift.
    fn insert_shift(&self, shift: Shift) -> EngineResult<Shift>;
    /// Validates and replaces the shift stored under `id`.
    fn update_shift(&self, id: ShiftId, shift: Shift) -> EngineResult<Shift>;
    /// Fetches one shift.
    fn get_shift(&self, id: ShiftId) -> EngineResult<Shift>;
    /// Fetches several shifts, failing if any is missing.
    fn shifts_by_ids(&self, ids: &[ShiftId]) -> EngineResult<Vec<Shift>>;

    /// Validates and stores an assignment, rejecting overlaps.
    fn insert_assignment(&self, assignment: Assignment) -> EngineResult<Assignment>;
    /// Fetches one assignment.
    fn get_assignment(&self, id: AssignmentId) -> EngineResult<Assignment>;
    /// Assignments of `employee_id` covering any date in `[from, to]`.
    fn assignments_for_employee(
        &self,
        employee_id: EmployeeId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<Assignment>>;
    /// Deletes an assignment together with its exceptions.
    fn delete_assignment(&self, id: AssignmentId) -> EngineResult<Assignment>;

    /// Stores an exception, rejecting a second one for the same assignment and date.
    fn insert_exception(&self, exception: ScheduleException) -> EngineResult<ScheduleException>;
    /// Replaces the exception stored under `id`.
    fn update_exception(
        &self,
        id: ExceptionId,
        exception: ScheduleException,
    ) -> EngineResult<ScheduleException>;
    /// Fetches one exception.
    fn get_exception(&self, id: ExceptionId) -> EngineResult<ScheduleException>;
    /// Exceptions of `employee_id` dated within `[from, to]`.
    fn exceptions_for_employee(
        &self,
        employee_id: EmployeeId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<ScheduleException>>;
    /// Deletes an exception.
    fn delete_exception(&self, id: ExceptionId) -> EngineResult<ScheduleException>;
}
