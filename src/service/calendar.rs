//! Date-range schedule requests.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calculation::{AssignedShift, ScheduleSnapshot, resolve_schedule};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DAY_OFF_PLACEHOLDER, EmployeeId, ResolutionState, ResolvedDaySchedule, ShiftId, TimeIntervalId,
};
use crate::store::ScheduleStore;

/// Default limit on the number of days one request may resolve.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

/// Resolves an employee's effective schedule over a date range.
///
/// Each request performs one batched fetch per entity kind and then hands
/// the snapshot to the pure resolver. No per-date fetches are made.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use schedule_engine::models::ResolutionState;
/// use schedule_engine::service::CalendarService;
/// use schedule_engine::store::InMemoryScheduleStore;
///
/// let calendar = CalendarService::new(Arc::new(InMemoryScheduleStore::new()));
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let entries = calendar.resolve(42, day, day).unwrap();
/// assert_eq!(entries[0].state, ResolutionState::Unassigned);
/// ```
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<dyn ScheduleStore>,
    day_off_placeholder: String,
    max_range_days: u32,
}

impl CalendarService {
    /// Creates a calendar service over `store`.
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self {
            store,
            day_off_placeholder: DAY_OFF_PLACEHOLDER.to_string(),
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }

    /// Replaces the in/out text shown on days off.
    pub fn with_day_off_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.day_off_placeholder = placeholder.into();
        self
    }

    /// Caps the inclusive length of a requested range.
    pub fn with_max_range_days(mut self, max_range_days: u32) -> Self {
        self.max_range_days = max_range_days;
        self
    }

    /// Rejects ranges longer than the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RangeTooLarge`] when `[start, end]` spans more
    /// than `max_range_days` days. Inverted ranges always pass.
    pub fn check_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
        let days = (end - start).num_days() + 1;
        if days > i64::from(self.max_range_days) {
            return Err(EngineError::RangeTooLarge {
                days,
                max: self.max_range_days,
            });
        }
        Ok(())
    }

    /// Gathers everything needed to resolve `employee_id` over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Propagates store failures, including
    /// [`EngineError::ShiftNotFound`] and [`EngineError::TimeIntervalNotFound`]
    /// when stored data references missing entities.
    pub fn snapshot(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<ScheduleSnapshot> {
        if end < start {
            return Ok(ScheduleSnapshot::default());
        }

        let assignments = self
            .store
            .assignments_for_employee(employee_id, start, end)?;

        let shift_ids: Vec<ShiftId> = assignments
            .iter()
            .map(|assignment| assignment.shift_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let shifts = self.store.shifts_by_ids(&shift_ids)?;

        let exceptions = self
            .store
            .exceptions_for_employee(employee_id, start, end)?;

        let interval_ids: Vec<TimeIntervalId> = shifts
            .iter()
            .flat_map(|shift| shift.referenced_interval_ids())
            .chain(exceptions.iter().map(|exception| exception.time_interval_id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let time_intervals = self.store.time_intervals_by_ids(&interval_ids)?;

        let assignments = assignments
            .into_iter()
            .map(|assignment| {
                let shift = shifts
                    .iter()
                    .find(|shift| shift.id == Some(assignment.shift_id))
                    .cloned()
                    .ok_or(EngineError::ShiftNotFound {
                        id: assignment.shift_id,
                    })?;
                Ok(AssignedShift { assignment, shift })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        debug!(
            employee_id,
            assignments = assignments.len(),
            exceptions = exceptions.len(),
            time_intervals = time_intervals.len(),
            "Loaded schedule snapshot"
        );

        Ok(ScheduleSnapshot {
            assignments,
            time_intervals,
            exceptions,
        })
    }

    /// Resolves one entry per date in the inclusive range `[start, end]`.
    ///
    /// An inverted range yields no entries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RangeTooLarge`] for ranges over the limit and
    /// propagates store failures and resolution errors.
    pub fn resolve(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ResolvedDaySchedule>> {
        let started = Instant::now();
        self.check_range(start, end)?;
        let snapshot = self.snapshot(employee_id, start, end)?;
        let mut entries = resolve_schedule(&snapshot, start, end)?;

        if self.day_off_placeholder != DAY_OFF_PLACEHOLDER {
            for entry in entries
                .iter_mut()
                .filter(|entry| entry.state == ResolutionState::DayOff)
            {
                entry.in_time = Some(self.day_off_placeholder.clone());
                entry.out_time = Some(self.day_off_placeholder.clone());
            }
        }

        info!(
            employee_id,
            start = %start,
            end = %end,
            days = entries.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "Resolved schedule"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_time;
    use crate::models::{
        Assignment, CycleUnit, DaySlot, NewScheduleException, Shift, TimeInterval,
    };
    use crate::store::InMemoryScheduleStore;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Day 08:00 Mon-Fri, weekends off, Night 22:00 available for exceptions.
    fn seeded_store() -> Arc<InMemoryScheduleStore> {
        let store = Arc::new(InMemoryScheduleStore::new());
        let day = store
            .insert_time_interval(TimeInterval::new("Day", parse_time("08:00").unwrap(), 480))
            .unwrap()
            .id
            .unwrap();
        store
            .insert_time_interval(TimeInterval::new("Night", parse_time("22:00").unwrap(), 480))
            .unwrap();

        let mut slots = vec![DaySlot::Interval { time_interval_id: day }; 7];
        slots[0] = DaySlot::DayOff;
        slots[6] = DaySlot::DayOff;
        let shift = store
            .insert_shift(Shift::new("Office", 7, CycleUnit::Day, false, slots))
            .unwrap();

        store
            .insert_assignment(Assignment {
                id: None,
                employee_id: 42,
                shift_id: shift.id.unwrap(),
                start_date: make_date("2025-01-01"),
                end_date: Some(make_date("2025-02-01")),
                cycle_anchor_date: None,
            })
            .unwrap();
        store
    }

    #[test]
    fn test_resolve_covers_inclusive_range() {
        let calendar = CalendarService::new(seeded_store());
        let entries = calendar
            .resolve(42, make_date("2024-12-30"), make_date("2025-01-05"))
            .unwrap();

        let states: Vec<ResolutionState> = entries.iter().map(|e| e.state).collect();
        assert_eq!(
            states,
            vec![
                ResolutionState::Unassigned, // Mon 30 Dec
                ResolutionState::Unassigned, // Tue 31 Dec
                ResolutionState::Scheduled,  // Wed 1 Jan
                ResolutionState::Scheduled,
                ResolutionState::Scheduled,
                ResolutionState::DayOff, // Sat
                ResolutionState::DayOff, // Sun
            ]
        );
        assert_eq!(entries[2].in_time.as_deref(), Some("08:00"));
        assert_eq!(entries[2].out_time.as_deref(), Some("16:00"));
    }

    #[test]
    fn test_resolve_applies_exception() {
        let store = seeded_store();
        let exception = NewScheduleException {
            employee_id: 42,
            assignment_id: 4,
            exception_date: make_date("2025-01-15"),
            time_interval_id: 2,
            remarks: "cover".to_string(),
            created_by: "admin".to_string(),
        }
        .into_exception(make_date("2025-01-10").and_hms_opt(9, 0, 0).unwrap());
        store.insert_exception(exception).unwrap();

        let calendar = CalendarService::new(store);
        let entries = calendar
            .resolve(42, make_date("2025-01-15"), make_date("2025-01-15"))
            .unwrap();

        assert_eq!(entries[0].state, ResolutionState::Exception);
        assert_eq!(entries[0].time_interval_alias.as_deref(), Some("Night"));
        assert_eq!(entries[0].in_time.as_deref(), Some("22:00"));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let calendar = CalendarService::new(seeded_store());
        let entries = calendar
            .resolve(42, make_date("2025-01-10"), make_date("2025-01-01"))
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_range_longer_than_limit_is_rejected() {
        let calendar = CalendarService::new(seeded_store());
        let result = calendar.resolve(42, make_date("0001-01-01"), make_date("9999-12-31"));
        assert!(matches!(
            result,
            Err(EngineError::RangeTooLarge { days: 3_652_059, max: DEFAULT_MAX_RANGE_DAYS })
        ));
    }

    #[test]
    fn test_range_at_limit_is_served() {
        let calendar = CalendarService::new(seeded_store()).with_max_range_days(7);
        let week = calendar
            .resolve(42, make_date("2025-01-06"), make_date("2025-01-12"))
            .unwrap();
        assert_eq!(week.len(), 7);

        assert!(matches!(
            calendar.resolve(42, make_date("2025-01-06"), make_date("2025-01-13")),
            Err(EngineError::RangeTooLarge { days: 8, max: 7 })
        ));
    }

    #[test]
    fn test_other_employee_is_unassigned() {
        let calendar = CalendarService::new(seeded_store());
        let entries = calendar
            .resolve(7, make_date("2025-01-06"), make_date("2025-01-07"))
            .unwrap();
        assert!(entries.iter().all(|e| e.state == ResolutionState::Unassigned));
    }

    #[test]
    fn test_custom_day_off_placeholder() {
        let calendar = CalendarService::new(seeded_store()).with_day_off_placeholder("OFF");
        let entries = calendar
            .resolve(42, make_date("2025-01-04"), make_date("2025-01-04"))
            .unwrap();
        assert_eq!(entries[0].in_time.as_deref(), Some("OFF"));
        assert_eq!(entries[0].out_time.as_deref(), Some("OFF"));
    }

    #[test]
    fn test_snapshot_fetches_only_referenced_intervals() {
        let calendar = CalendarService::new(seeded_store());
        let snapshot = calendar
            .snapshot(42, make_date("2025-01-01"), make_date("2025-01-31"))
            .unwrap();

        assert_eq!(snapshot.assignments.len(), 1);
        assert_eq!(snapshot.time_intervals.len(), 1);
        assert_eq!(snapshot.time_intervals[0].alias, "Day");
    }
}
