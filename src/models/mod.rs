//! Core data models for the Work Schedule Engine.
//!
//! This module contains the schedule definitions (time intervals, shifts),
//! their bindings to employees (assignments, exceptions), and the resolved
//! per-date output.

mod assignment;
mod exception;
mod resolved_schedule;
mod shift;
mod time_interval;

pub use assignment::Assignment;
pub use exception::{NewScheduleException, ScheduleException};
pub use resolved_schedule::{DAY_OFF_PLACEHOLDER, ResolutionState, ResolvedDaySchedule, day_name};
pub use shift::{CycleUnit, DaySlot, Shift};
pub use time_interval::{
    Break, MAX_OVERTIME_TIERS, MAX_SPAN_MINUTES, OvertimeTier, PunchWindow, TimeInterval, Tolerance,
    derive_work_duration,
};

/// Identifier of an employee.
pub type EmployeeId = i64;
/// Identifier of a stored [`TimeInterval`].
pub type TimeIntervalId = i64;
/// Identifier of a stored [`Break`].
pub type BreakId = i64;
/// Identifier of a stored [`Shift`].
pub type ShiftId = i64;
/// Identifier of a stored [`Assignment`].
pub type AssignmentId = i64;
/// Identifier of a stored [`ScheduleException`].
pub type ExceptionId = i64;
