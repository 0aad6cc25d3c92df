//! Effective schedule resolution.
//!
//! This module layers per-date exceptions over an assignment's cyclic shift
//! to produce one [`ResolvedDaySchedule`] per calendar date. For each date
//! the precedence is:
//!
//! 1. no covering assignment: [`ResolutionState::Unassigned`]
//! 2. an exception for `(assignment, date)`: [`ResolutionState::Exception`]
//! 3. a day-off slot: [`ResolutionState::DayOff`]
//! 4. otherwise the slot's interval: [`ResolutionState::Scheduled`]
//!
//! Resolution performs no I/O; all data is supplied up front in a
//! [`ScheduleSnapshot`].

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Assignment, AssignmentId, DaySlot, ExceptionId, ResolutionState, ResolvedDaySchedule, ScheduleException,
    Shift, TimeInterval, TimeIntervalId, day_name,
};

/// An assignment together with the shift it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedShift {
    /// The assignment.
    pub assignment: Assignment,
    /// The shift named by `assignment.shift_id`.
    pub shift: Shift,
}

/// Everything needed to resolve one employee's schedule over a window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Assignments intersecting the window, with their shifts.
    pub assignments: Vec<AssignedShift>,
    /// Every interval referenced by the shifts and exceptions.
    pub time_intervals: Vec<TimeInterval>,
    /// Exceptions dated within the window.
    pub exceptions: Vec<ScheduleException>,
}

/// Resolves dates against a borrowed [`ScheduleSnapshot`].
///
/// Construction indexes the snapshot once; each date lookup afterwards is a single
/// map access. The resolver holds no mutable state, so it can be shared
/// freely and calling it twice with the same inputs yields equal output.
///
/// Conflicting data that the store should have rejected is resolved
/// deterministically: among overlapping assignments the latest start date
/// wins (then the highest id), and among duplicate exceptions the latest
/// `created_at` wins (then the highest id).
#[derive(Debug)]
pub struct ScheduleResolver<'a> {
    assignments: Vec<&'a AssignedShift>,
    intervals: HashMap<TimeIntervalId, &'a TimeInterval>,
    exceptions: HashMap<(AssignmentId, NaiveDate), &'a ScheduleException>,
}

impl<'a> ScheduleResolver<'a> {
    /// Indexes a snapshot for resolution.
    pub fn new(snapshot: &'a ScheduleSnapshot) -> Self {
        let intervals = snapshot
            .time_intervals
            .iter()
            .filter_map(|interval| interval.id.map(|id| (id, interval)))
            .collect();

        let mut exceptions: HashMap<(AssignmentId, NaiveDate), &ScheduleException> =
            HashMap::new();
        for exception in &snapshot.exceptions {
            let key = (exception.assignment_id, exception.exception_date);
            let supersedes = match exceptions.get(&key) {
                Some(existing) => {
                    warn!(
                        assignment_id = exception.assignment_id,
                        date = %exception.exception_date,
                        "Duplicate schedule exceptions for the same assignment and date"
                    );
                    exception_rank(exception) > exception_rank(existing)
                }
                None => true,
            };
            if supersedes {
                exceptions.insert(key, exception);
            }
        }

        Self {
            assignments: snapshot.assignments.iter().collect(),
            intervals,
            exceptions,
        }
    }

    /// Resolves a single date.
    ///
    /// # Errors
    ///
    /// - [`EngineError::TimeIntervalNotFound`] if the slot or exception in
    ///   effect references an interval missing from the snapshot
    /// - [`EngineError::InvalidShift`] if the assigned shift has an empty cycle
    pub fn resolve_day(&self, date: NaiveDate) -> EngineResult<ResolvedDaySchedule> {
        let Some(assigned) = self.active_assignment(date) else {
            return Ok(ResolvedDaySchedule::unassigned(date));
        };
        let assignment = &assigned.assignment;

        let base = assigned
            .shift
            .resolve_base_interval(date, assignment.cycle_anchor())?;

        let exception = assignment
            .id
            .and_then(|id| self.exceptions.get(&(id, date)).copied());

        if let Some(exception) = exception {
            let interval = self.interval(exception.time_interval_id)?;
            return Ok(ResolvedDaySchedule {
                state: ResolutionState::Exception,
                exception_id: exception.id,
                is_exception: true,
                ..scheduled_entry(date, assignment.id, interval)
            });
        }

        match base {
            DaySlot::DayOff => Ok(ResolvedDaySchedule::day_off(date, assignment.id)),
            DaySlot::Interval { time_interval_id } => {
                let interval = self.interval(time_interval_id)?;
                Ok(scheduled_entry(date, assignment.id, interval))
            }
        }
    }

    /// Resolves every date in the inclusive range `[start, end]`.
    ///
    /// An inverted range yields no entries.
    pub fn resolve_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ResolvedDaySchedule>> {
        dates_inclusive(start, end)
            .map(|date| self.resolve_day(date))
            .collect()
    }

    fn active_assignment(&self, date: NaiveDate) -> Option<&'a AssignedShift> {
        let mut covering = self
            .assignments
            .iter()
            .copied()
            .filter(|assigned| assigned.assignment.covers(date));

        let mut chosen = covering.next()?;
        for candidate in covering {
            warn!(
                employee_id = candidate.assignment.employee_id,
                date = %date,
                "Overlapping assignments cover the same date"
            );
            if assignment_rank(&candidate.assignment) > assignment_rank(&chosen.assignment) {
                chosen = candidate;
            }
        }
        Some(chosen)
    }

    fn interval(&self, id: TimeIntervalId) -> EngineResult<&'a TimeInterval> {
        self.intervals
            .get(&id)
            .copied()
            .ok_or(EngineError::TimeIntervalNotFound { id })
    }
}

/// Resolves a snapshot over the inclusive range `[start, end]`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::calculation::{ScheduleSnapshot, resolve_schedule};
/// use schedule_engine::models::ResolutionState;
///
/// let snapshot = ScheduleSnapshot::default();
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
///
/// let days = resolve_schedule(&snapshot, start, end).unwrap();
/// assert_eq!(days.len(), 3);
/// assert!(days.iter().all(|d| d.state == ResolutionState::Unassigned));
/// ```
pub fn resolve_schedule(
    snapshot: &ScheduleSnapshot,
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<Vec<ResolvedDaySchedule>> {
    ScheduleResolver::new(snapshot).resolve_range(start, end)
}

/// Iterates the dates of the inclusive range `[start, end]`.
pub fn dates_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let days = (end - start).num_days();
    (0..=days).map(move |offset| start + Duration::days(offset))
}

fn scheduled_entry(
    date: NaiveDate,
    assignment_id: Option<AssignmentId>,
    interval: &TimeInterval,
) -> ResolvedDaySchedule {
    ResolvedDaySchedule {
        date,
        day_name: day_name(date),
        state: ResolutionState::Scheduled,
        assignment_id,
        exception_id: None,
        source_time_interval: interval.id,
        time_interval_alias: Some(interval.alias.clone()),
        is_exception: false,
        is_day_off: false,
        in_time: Some(interval.start_time.to_string()),
        out_time: Some(interval.end_time().to_string()),
        work_duration_minutes: interval.work_duration_minutes,
    }
}

fn assignment_rank(assignment: &Assignment) -> (NaiveDate, Option<AssignmentId>) {
    (assignment.start_date, assignment.id)
}

fn exception_rank(exception: &ScheduleException) -> (NaiveDateTime, Option<ExceptionId>) {
    (exception.created_at, exception.id)
}
