//! In-memory schedule store.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Assignment, AssignmentId, EmployeeId, ExceptionId, ScheduleException, Shift, ShiftId,
    TimeInterval, TimeIntervalId,
};

use super::ScheduleStore;

/// A [`ScheduleStore`] held in process memory.
///
/// All entity kinds share one identifier sequence. Tables are ordered by
/// identifier so listings are deterministic.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::parse_time;
/// use schedule_engine::models::TimeInterval;
/// use schedule_engine::store::{InMemoryScheduleStore, ScheduleStore};
///
/// let store = InMemoryScheduleStore::new();
/// let stored = store
///     .insert_time_interval(TimeInterval::new("Day", parse_time("08:00").unwrap(), 480))
///     .unwrap();
/// assert_eq!(stored.id, Some(1));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    tables: RwLock<Tables>,
}

/// Largest identifier the store hands out or accepts from a client.
pub const MAX_ID: i64 = i64::MAX - 1;

#[derive(Debug, Default)]
struct Tables {
    last_id: i64,
    time_intervals: BTreeMap<TimeIntervalId, TimeInterval>,
    shifts: BTreeMap<ShiftId, Shift>,
    assignments: BTreeMap<AssignmentId, Assignment>,
    exceptions: BTreeMap<ExceptionId, ScheduleException>,
}

impl Tables {
    /// Hands out the next identifier, or accepts a client-supplied one in
    /// `1..=MAX_ID`. Nothing is mutated on error.
    fn allocate_id(&mut self, entity: &'static str, requested: Option<i64>) -> EngineResult<i64> {
        let id = match requested {
            Some(id) if (1..=MAX_ID).contains(&id) => id,
            Some(id) => {
                return Err(EngineError::InvalidId {
                    entity,
                    id,
                    max: MAX_ID,
                });
            }
            None => self
                .last_id
                .checked_add(1)
                .filter(|next| *next <= MAX_ID)
                .ok_or_else(|| EngineError::StoreUnavailable {
                    message: "identifier sequence exhausted".to_string(),
                })?,
        };
        self.last_id = self.last_id.max(id);
        Ok(id)
    }

    fn require_interval(&self, id: TimeIntervalId) -> EngineResult<()> {
        if self.time_intervals.contains_key(&id) {
            Ok(())
        } else {
            Err(EngineError::TimeIntervalNotFound { id })
        }
    }

    fn require_slots_exist(&self, shift: &Shift) -> EngineResult<()> {
        shift
            .referenced_interval_ids()
            .try_for_each(|id| self.require_interval(id))
    }

    fn check_exception_conflicts(
        &self,
        exception: &ScheduleException,
        ignore: Option<ExceptionId>,
    ) -> EngineResult<()> {
        self.require_interval(exception.time_interval_id)?;
        let assignment = self.assignments.get(&exception.assignment_id).ok_or(
            EngineError::AssignmentNotFound {
                id: exception.assignment_id,
            },
        )?;
        if assignment.employee_id != exception.employee_id {
            return Err(EngineError::InvalidAssignment {
                employee_id: exception.employee_id,
                message: format!(
                    "assignment {} belongs to employee {}",
                    exception.assignment_id, assignment.employee_id
                ),
            });
        }
        if !assignment.covers(exception.exception_date) {
            return Err(EngineError::ExceptionOutsideAssignment {
                assignment_id: exception.assignment_id,
                date: exception.exception_date,
            });
        }

        let duplicate = self.exceptions.iter().any(|(id, existing)| {
            Some(*id) != ignore
                && existing.assignment_id == exception.assignment_id
                && existing.exception_date == exception.exception_date
        });
        if duplicate {
            return Err(EngineError::DuplicateException {
                assignment_id: exception.assignment_id,
                date: exception.exception_date,
            });
        }
        Ok(())
    }
}

impl InMemoryScheduleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| EngineError::StoreUnavailable {
            message: "schedule store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| EngineError::StoreUnavailable {
            message: "schedule store lock poisoned".to_string(),
        })
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn insert_time_interval(&self, mut interval: TimeInterval) -> EngineResult<TimeInterval> {
        interval.validate()?;
        let mut tables = self.write()?;

        if let Some(id) = interval.id.filter(|id| tables.time_intervals.contains_key(id)) {
            return Err(EngineError::DuplicateId {
                entity: "Time interval",
                id,
            });
        }
        let id = tables.allocate_id("Time interval", interval.id)?;
        interval.id = Some(id);
        tables.time_intervals.insert(id, interval.clone());

        debug!(time_interval_id = id, alias = %interval.alias, "Stored time interval");
        Ok(interval)
    }

    fn update_time_interval(
        &self,
        id: TimeIntervalId,
        mut interval: TimeInterval,
    ) -> EngineResult<TimeInterval> {
        interval.validate()?;
        let mut tables = self.write()?;
        tables.require_interval(id)?;

        interval.id = Some(id);
        tables.time_intervals.insert(id, interval.clone());

        debug!(time_interval_id = id, "Updated time interval");
        Ok(interval)
    }

    fn get_time_interval(&self, id: TimeIntervalId) -> EngineResult<TimeInterval> {
        self.read()?
            .time_intervals
            .get(&id)
            .cloned()
            .ok_or(EngineError::TimeIntervalNotFound { id })
    }

    fn time_intervals_by_ids(&self, ids: &[TimeIntervalId]) -> EngineResult<Vec<TimeInterval>> {
        let tables = self.read()?;
        ids.iter()
            .map(|id| {
                tables
                    .time_intervals
                    .get(id)
                    .cloned()
                    .ok_or(EngineError::TimeIntervalNotFound { id: *id })
            })
            .collect()
    }

    fn list_time_intervals(&self) -> EngineResult<Vec<TimeInterval>> {
        Ok(self.read()?.time_intervals.values().cloned().collect())
    }

    fn delete_time_interval(&self, id: TimeIntervalId) -> EngineResult<TimeInterval> {
        let mut tables = self.write()?;
        tables.require_interval(id)?;

        if let Some(shift) = tables
            .shifts
            .values()
            .find(|shift| shift.referenced_interval_ids().any(|used| used == id))
        {
            return Err(EngineError::TimeIntervalInUse {
                id,
                referenced_by: format!("shift '{}'", shift.alias),
            });
        }
        if let Some(exception) = tables
            .exceptions
            .values()
            .find(|exception| exception.time_interval_id == id)
        {
            return Err(EngineError::TimeIntervalInUse {
                id,
                referenced_by: format!("exception on {}", exception.exception_date),
            });
        }

        tables
            .time_intervals
            .remove(&id)
            .ok_or(EngineError::TimeIntervalNotFound { id })
    }

    fn insert_shift(&self, mut shift: Shift) -> EngineResult<Shift> {
        shift.validate()?;
        let mut tables = self.write()?;
        tables.require_slots_exist(&shift)?;

        if let Some(id) = shift.id.filter(|id| tables.shifts.contains_key(id)) {
            return Err(EngineError::DuplicateId { entity: "Shift", id });
        }
        let id = tables.allocate_id("Shift", shift.id)?;
        shift.id = Some(id);
        tables.shifts.insert(id, shift.clone());

        debug!(shift_id = id, alias = %shift.alias, cycle_days = shift.cycle_days(), "Stored shift");
        Ok(shift)
    }

    fn update_shift(&self, id: ShiftId, mut shift: Shift) -> EngineResult<Shift> {
        shift.validate()?;
        let mut tables = self.write()?;
        if !tables.shifts.contains_key(&id) {
            return Err(EngineError::ShiftNotFound { id });
        }
        tables.require_slots_exist(&shift)?;

        shift.id = Some(id);
        tables.shifts.insert(id, shift.clone());

        debug!(shift_id = id, "Updated shift");
        Ok(shift)
    }

    fn get_shift(&self, id: ShiftId) -> EngineResult<Shift> {
        self.read()?
            .shifts
            .get(&id)
            .cloned()
            .ok_or(EngineError::ShiftNotFound { id })
    }

    fn shifts_by_ids(&self, ids: &[ShiftId]) -> EngineResult<Vec<Shift>> {
        let tables = self.read()?;
        ids.iter()
            .map(|id| {
                tables
                    .shifts
                    .get(id)
                    .cloned()
                    .ok_or(EngineError::ShiftNotFound { id: *id })
            })
            .collect()
    }

    fn insert_assignment(&self, mut assignment: Assignment) -> EngineResult<Assignment> {
        assignment.validate()?;
        let mut tables = self.write()?;

        if !tables.shifts.contains_key(&assignment.shift_id) {
            return Err(EngineError::ShiftNotFound {
                id: assignment.shift_id,
            });
        }
        if let Some(id) = assignment.id.filter(|id| tables.assignments.contains_key(id)) {
            return Err(EngineError::DuplicateId {
                entity: "Assignment",
                id,
            });
        }
        if let Some((existing_id, _)) = tables.assignments.iter().find(|(_, existing)| {
            existing.employee_id == assignment.employee_id && existing.overlaps(&assignment)
        }) {
            return Err(EngineError::OverlappingAssignment {
                employee_id: assignment.employee_id,
                existing_id: *existing_id,
            });
        }

        let id = tables.allocate_id("Assignment", assignment.id)?;
        assignment.id = Some(id);
        tables.assignments.insert(id, assignment.clone());

        debug!(
            assignment_id = id,
            employee_id = assignment.employee_id,
            shift_id = assignment.shift_id,
            "Stored assignment"
        );
        Ok(assignment)
    }

    fn get_assignment(&self, id: AssignmentId) -> EngineResult<Assignment> {
        self.read()?
            .assignments
            .get(&id)
            .cloned()
            .ok_or(EngineError::AssignmentNotFound { id })
    }

    fn assignments_for_employee(
        &self,
        employee_id: EmployeeId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<Assignment>> {
        Ok(self
            .read()?
            .assignments
            .values()
            .filter(|a| a.employee_id == employee_id && a.intersects(from, to))
            .cloned()
            .collect())
    }

    fn delete_assignment(&self, id: AssignmentId) -> EngineResult<Assignment> {
        let mut tables = self.write()?;
        let removed = tables
            .assignments
            .remove(&id)
            .ok_or(EngineError::AssignmentNotFound { id })?;
        tables.exceptions.retain(|_, exception| exception.assignment_id != id);

        debug!(assignment_id = id, "Deleted assignment and its exceptions");
        Ok(removed)
    }

    fn insert_exception(
        &self,
        mut exception: ScheduleException,
    ) -> EngineResult<ScheduleException> {
        let mut tables = self.write()?;
        tables.check_exception_conflicts(&exception, None)?;

        if let Some(id) = exception.id.filter(|id| tables.exceptions.contains_key(id)) {
            return Err(EngineError::DuplicateId {
                entity: "Schedule exception",
                id,
            });
        }
        let id = tables.allocate_id("Schedule exception", exception.id)?;
        exception.id = Some(id);
        tables.exceptions.insert(id, exception.clone());

        debug!(
            exception_id = id,
            assignment_id = exception.assignment_id,
            date = %exception.exception_date,
            "Stored schedule exception"
        );
        Ok(exception)
    }

    fn update_exception(
        &self,
        id: ExceptionId,
        mut exception: ScheduleException,
    ) -> EngineResult<ScheduleException> {
        let mut tables = self.write()?;
        if !tables.exceptions.contains_key(&id) {
            return Err(EngineError::ExceptionNotFound { id });
        }
        tables.check_exception_conflicts(&exception, Some(id))?;

        exception.id = Some(id);
        tables.exceptions.insert(id, exception.clone());

        debug!(exception_id = id, "Updated schedule exception");
        Ok(exception)
    }

    fn get_exception(&self, id: ExceptionId) -> EngineResult<ScheduleException> {
        self.read()?
            .exceptions
            .get(&id)
            .cloned()
            .ok_or(EngineError::ExceptionNotFound { id })
    }

    fn exceptions_for_employee(
        &self,
        employee_id: EmployeeId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<ScheduleException>> {
        Ok(self
            .read()?
            .exceptions
            .values()
            .filter(|e| {
                e.employee_id == employee_id && e.exception_date >= from && e.exception_date <= to
            })
            .cloned()
            .collect())
    }

    fn delete_exception(&self, id: ExceptionId) -> EngineResult<ScheduleException> {
        let removed = self
            .write()?
            .exceptions
            .remove(&id)
            .ok_or(EngineError::ExceptionNotFound { id })?;

        debug!(exception_id = id, "Deleted schedule exception");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_time;
    use crate::models::{CycleUnit, DaySlot};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn day_interval() -> TimeInterval {
        TimeInterval::new("Day", parse_time("08:00").unwrap(), 480)
    }

    fn weekly_shift(interval_id: TimeIntervalId) -> Shift {
        Shift::new(
            "Weekdays",
            7,
            CycleUnit::Day,
            false,
            vec![DaySlot::Interval {
                time_interval_id: interval_id,
            }; 7],
        )
    }

    fn assignment(shift_id: ShiftId, start: &str, end: Option<&str>) -> Assignment {
        Assignment {
            id: None,
            employee_id: 42,
            shift_id,
            start_date: make_date(start),
            end_date: end.map(make_date),
            cycle_anchor_date: None,
        }
    }

    fn exception(assignment_id: AssignmentId, interval_id: TimeIntervalId, date: &str) -> ScheduleException {
        ScheduleException {
            id: None,
            employee_id: 42,
            assignment_id,
            exception_date: make_date(date),
            day_index: ScheduleException::day_index_for(make_date(date)),
            time_interval_id: interval_id,
            remarks: String::new(),
            created_by: "admin".to_string(),
            created_at: make_date("2025-01-01").and_hms_opt(9, 0, 0).unwrap(),
        }
    }

    /// Store with one interval, one shift and one January assignment.
    fn seeded() -> (InMemoryScheduleStore, TimeIntervalId, ShiftId, AssignmentId) {
        let store = InMemoryScheduleStore::new();
        let interval_id = store.insert_time_interval(day_interval()).unwrap().id.unwrap();
        let shift_id = store.insert_shift(weekly_shift(interval_id)).unwrap().id.unwrap();
        let assignment_id = store
            .insert_assignment(assignment(shift_id, "2025-01-01", Some("2025-02-01")))
            .unwrap()
            .id
            .unwrap();
        (store, interval_id, shift_id, assignment_id)
    }

    #[test]
    fn test_ids_are_allocated_sequentially() {
        let (store, interval_id, shift_id, assignment_id) = seeded();
        assert_eq!((interval_id, shift_id, assignment_id), (1, 2, 3));
        assert_eq!(store.get_shift(shift_id).unwrap().alias, "Weekdays");
    }

    #[test]
    fn test_explicit_ids_are_kept_and_advance_sequence() {
        let store = InMemoryScheduleStore::new();
        let mut interval = day_interval();
        interval.id = Some(50);
        store.insert_time_interval(interval.clone()).unwrap();

        assert!(matches!(
            store.insert_time_interval(interval),
            Err(EngineError::DuplicateId { id: 50, .. })
        ));
        assert_eq!(store.insert_time_interval(day_interval()).unwrap().id, Some(51));
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let store = InMemoryScheduleStore::new();
        let interval = TimeInterval::new("", parse_time("08:00").unwrap(), 480);
        assert!(matches!(
            store.insert_time_interval(interval),
            Err(EngineError::MissingAlias)
        ));
        assert!(store.list_time_intervals().unwrap().is_empty());
    }

    #[test]
    fn test_shift_requires_existing_intervals() {
        let store = InMemoryScheduleStore::new();
        assert!(matches!(
            store.insert_shift(weekly_shift(99)),
            Err(EngineError::TimeIntervalNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_overlapping_assignment_is_rejected() {
        let (store, _, shift_id, assignment_id) = seeded();

        let result = store.insert_assignment(assignment(shift_id, "2025-01-20", None));
        assert!(matches!(
            result,
            Err(EngineError::OverlappingAssignment { existing_id, .. }) if existing_id == assignment_id
        ));

        // Adjacent ranges do not overlap
        assert!(store.insert_assignment(assignment(shift_id, "2025-02-01", None)).is_ok());
    }

    #[test]
    fn test_other_employees_may_overlap() {
        let (store, _, shift_id, _) = seeded();
        let mut other = assignment(shift_id, "2025-01-10", None);
        other.employee_id = 7;
        assert!(store.insert_assignment(other).is_ok());
    }

    #[test]
    fn test_assignments_for_employee_filters_by_range() {
        let (store, _, shift_id, _) = seeded();
        store
            .insert_assignment(assignment(shift_id, "2025-03-01", None))
            .unwrap();

        let february = store
            .assignments_for_employee(42, make_date("2025-02-01"), make_date("2025-02-28"))
            .unwrap();
        assert!(february.is_empty());

        let q1 = store
            .assignments_for_employee(42, make_date("2025-01-15"), make_date("2025-03-15"))
            .unwrap();
        assert_eq!(q1.len(), 2);
    }

    #[test]
    fn test_duplicate_exception_is_rejected() {
        let (store, interval_id, _, assignment_id) = seeded();
        store
            .insert_exception(exception(assignment_id, interval_id, "2025-01-15"))
            .unwrap();

        assert!(matches!(
            store.insert_exception(exception(assignment_id, interval_id, "2025-01-15")),
            Err(EngineError::DuplicateException { .. })
        ));
    }

    #[test]
    fn test_update_exception_may_keep_its_own_date() {
        let (store, interval_id, _, assignment_id) = seeded();
        let stored = store
            .insert_exception(exception(assignment_id, interval_id, "2025-01-15"))
            .unwrap();

        let mut changed = stored.clone();
        changed.remarks = "updated".to_string();
        let updated = store.update_exception(stored.id.unwrap(), changed).unwrap();
        assert_eq!(updated.remarks, "updated");
    }

    #[test]
    fn test_exceptions_for_employee_is_inclusive() {
        let (store, interval_id, _, assignment_id) = seeded();
        for date in ["2025-01-10", "2025-01-15", "2025-01-20"] {
            store
                .insert_exception(exception(assignment_id, interval_id, date))
                .unwrap();
        }

        let found = store
            .exceptions_for_employee(42, make_date("2025-01-10"), make_date("2025-01-15"))
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_referenced_interval_cannot_be_deleted() {
        let (store, interval_id, _, _) = seeded();
        assert!(matches!(
            store.delete_time_interval(interval_id),
            Err(EngineError::TimeIntervalInUse { .. })
        ));
    }

    #[test]
    fn test_delete_assignment_cascades_to_exceptions() {
        let (store, interval_id, _, assignment_id) = seeded();
        let stored = store
            .insert_exception(exception(assignment_id, interval_id, "2025-01-15"))
            .unwrap();

        store.delete_assignment(assignment_id).unwrap();
        assert!(matches!(
            store.get_exception(stored.id.unwrap()),
            Err(EngineError::ExceptionNotFound { .. })
        ));
    }

    #[test]
    fn test_unreferenced_interval_can_be_deleted() {
        let (store, _, _, _) = seeded();
        let spare = store.insert_time_interval(day_interval()).unwrap().id.unwrap();

        let removed = store.delete_time_interval(spare).unwrap();
        assert_eq!(removed.id, Some(spare));
        assert!(store.get_time_interval(spare).is_err());
    }

    #[test]
    fn test_update_time_interval_keeps_id() {
        let (store, interval_id, _, _) = seeded();
        let mut changed = day_interval();
        changed.alias = "Early".to_string();

        let updated = store.update_time_interval(interval_id, changed).unwrap();
        assert_eq!(updated.id, Some(interval_id));
        assert_eq!(store.get_time_interval(interval_id).unwrap().alias, "Early");
        assert!(matches!(
            store.update_time_interval(404, day_interval()),
            Err(EngineError::TimeIntervalNotFound { id: 404 })
        ));
    }

    #[test]
    fn test_update_shift_revalidates_slots() {
        let (store, interval_id, shift_id, _) = seeded();

        let mut rotating = weekly_shift(interval_id);
        rotating.auto_rotate = true;
        assert!(store.update_shift(shift_id, rotating).unwrap().auto_rotate);

        assert!(matches!(
            store.update_shift(shift_id, weekly_shift(77)),
            Err(EngineError::TimeIntervalNotFound { id: 77 })
        ));
        assert!(matches!(
            store.update_shift(404, weekly_shift(interval_id)),
            Err(EngineError::ShiftNotFound { id: 404 })
        ));
    }

    #[test]
    fn test_shifts_by_ids_and_get_assignment() {
        let (store, _, shift_id, assignment_id) = seeded();
        assert_eq!(store.shifts_by_ids(&[shift_id]).unwrap()[0].alias, "Weekdays");
        assert_eq!(store.get_assignment(assignment_id).unwrap().employee_id, 42);
        assert!(matches!(
            store.get_assignment(404),
            Err(EngineError::AssignmentNotFound { id: 404 })
        ));
    }

    #[test]
    fn test_time_intervals_by_ids_reports_missing() {
        let (store, interval_id, _, _) = seeded();
        assert_eq!(store.time_intervals_by_ids(&[interval_id]).unwrap().len(), 1);
        assert!(matches!(
            store.time_intervals_by_ids(&[interval_id, 404]),
            Err(EngineError::TimeIntervalNotFound { id: 404 })
        ));
    }

    #[test]
    fn test_explicit_ids_outside_range_are_rejected() {
        let store = InMemoryScheduleStore::new();
        for id in [0, -5, i64::MAX] {
            let mut interval = day_interval();
            interval.id = Some(id);
            assert!(matches!(
                store.insert_time_interval(interval),
                Err(EngineError::InvalidId { id: rejected, max: MAX_ID, .. }) if rejected == id
            ));
        }
        assert_eq!(store.insert_time_interval(day_interval()).unwrap().id, Some(1));
    }

    #[test]
    fn test_exhausted_sequence_fails_without_poisoning() {
        let store = InMemoryScheduleStore::new();
        let mut interval = day_interval();
        interval.id = Some(MAX_ID);
        store.insert_time_interval(interval).unwrap();

        assert!(matches!(
            store.insert_time_interval(day_interval()),
            Err(EngineError::StoreUnavailable { .. })
        ));
        assert_eq!(store.get_time_interval(MAX_ID).unwrap().id, Some(MAX_ID));
        assert_eq!(store.list_time_intervals().unwrap().len(), 1);
    }

    #[test]
    fn test_oversized_interval_is_not_stored() {
        let store = InMemoryScheduleStore::new();
        let mut interval = TimeInterval::new("Huge", parse_time("08:00").unwrap(), u32::MAX);
        interval.breaks.push(crate::models::Break {
            id: None,
            alias: "Lunch".to_string(),
            duration_minutes: 1,
        });

        assert!(matches!(
            store.insert_time_interval(interval),
            Err(EngineError::DurationOutOfRange { .. })
        ));
        assert!(store.list_time_intervals().unwrap().is_empty());
    }

    #[test]
    fn test_exception_must_fall_inside_its_assignment() {
        let (store, interval_id, _, assignment_id) = seeded();

        assert!(matches!(
            store.insert_exception(exception(assignment_id, interval_id, "2025-02-01")),
            Err(EngineError::ExceptionOutsideAssignment { .. })
        ));

        let mut foreign = exception(assignment_id, interval_id, "2025-01-15");
        foreign.employee_id = 7;
        assert!(matches!(
            store.insert_exception(foreign),
            Err(EngineError::InvalidAssignment { employee_id: 7, .. })
        ));
    }

    #[test]
    fn test_store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryScheduleStore>();
    }
}
