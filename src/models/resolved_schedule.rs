//! Resolved day schedule models.
//!
//! This module contains the [`ResolvedDaySchedule`] type produced by the
//! schedule resolver: the single effective schedule entry for one employee
//! on one calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AssignmentId, ExceptionId, TimeIntervalId};

/// Placeholder shown for in/out times on a day off.
pub const DAY_OFF_PLACEHOLDER: &str = "--:--";

/// How a date's schedule was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// No assignment covers the date.
    Unassigned,
    /// The shift cycle marks the date as a day off.
    DayOff,
    /// The shift cycle supplies the interval.
    Scheduled,
    /// A schedule exception supplies the interval.
    Exception,
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionState::Unassigned => write!(f, "Unassigned"),
            ResolutionState::DayOff => write!(f, "Day Off"),
            ResolutionState::Scheduled => write!(f, "Scheduled"),
            ResolutionState::Exception => write!(f, "Exception"),
        }
    }
}

/// The effective schedule for one employee on one date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::models::{ResolutionState, ResolvedDaySchedule};
///
/// let entry = ResolvedDaySchedule::unassigned(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
/// assert_eq!(entry.state, ResolutionState::Unassigned);
/// assert_eq!(entry.day_name, "Saturday");
/// assert!(entry.in_time.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDaySchedule {
    /// The calendar date.
    pub date: NaiveDate,
    /// English weekday name of `date`.
    pub day_name: String,
    /// Which precedence rule produced this entry.
    pub state: ResolutionState,
    /// The assignment in effect, if any.
    pub assignment_id: Option<AssignmentId>,
    /// The exception applied, if any.
    pub exception_id: Option<ExceptionId>,
    /// The interval in effect, if any.
    pub source_time_interval: Option<TimeIntervalId>,
    /// Alias of the interval in effect.
    pub time_interval_alias: Option<String>,
    /// True when an exception overrides the shift.
    pub is_exception: bool,
    /// True when the shift marks the date as a day off.
    pub is_day_off: bool,
    /// Scheduled start as `HH:mm`, `--:--` on days off, absent when unassigned.
    pub in_time: Option<String>,
    /// Scheduled end as `HH:mm`, `--:--` on days off, absent when unassigned.
    pub out_time: Option<String>,
    /// Paid work minutes of the interval in effect.
    pub work_duration_minutes: u32,
}

impl ResolvedDaySchedule {
    /// An entry for a date no assignment covers.
    pub fn unassigned(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: day_name(date),
            state: ResolutionState::Unassigned,
            assignment_id: None,
            exception_id: None,
            source_time_interval: None,
            time_interval_alias: None,
            is_exception: false,
            is_day_off: false,
            in_time: None,
            out_time: None,
            work_duration_minutes: 0,
        }
    }

    /// An entry for a day off within an assignment.
    pub fn day_off(date: NaiveDate, assignment_id: Option<AssignmentId>) -> Self {
        Self {
            state: ResolutionState::DayOff,
            assignment_id,
            is_day_off: true,
            in_time: Some(DAY_OFF_PLACEHOLDER.to_string()),
            out_time: Some(DAY_OFF_PLACEHOLDER.to_string()),
            ..Self::unassigned(date)
        }
    }
}

/// English weekday name, e.g. "Monday".
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
