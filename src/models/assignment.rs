//! Assignment model.
//!
//! An [`Assignment`] binds an employee to a shift for a half-open date
//! range `[start_date, end_date)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AssignmentId, EmployeeId, ShiftId};

/// The binding of an employee to a shift for a date range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::models::Assignment;
///
/// let assignment = Assignment {
///     id: Some(1),
///     employee_id: 42,
///     shift_id: 3,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
///     cycle_anchor_date: None,
/// };
///
/// assert!(assignment.covers(NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()));
/// assert!(!assignment.covers(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Store identifier, absent before insertion.
    #[serde(default)]
    pub id: Option<AssignmentId>,
    /// The assigned employee.
    pub employee_id: EmployeeId,
    /// The shift worked during the assignment.
    pub shift_id: ShiftId,
    /// First covered date (inclusive).
    pub start_date: NaiveDate,
    /// First date no longer covered; `None` means open-ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Day zero of a rotating cycle; defaults to `start_date`.
    #[serde(default)]
    pub cycle_anchor_date: Option<NaiveDate>,
}

impl Assignment {
    /// Returns true if `date` lies within `[start_date, end_date)`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.is_none_or(|end| date < end)
    }

    /// The date the shift cycle is counted from.
    pub fn cycle_anchor(&self) -> NaiveDate {
        self.cycle_anchor_date.unwrap_or(self.start_date)
    }

    /// Returns true if any date in the inclusive range `[from, to]` is covered.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from <= to && self.start_date <= to && self.end_date.is_none_or(|end| from < end)
    }

    /// Returns true if both assignments cover at least one common date.
    pub fn overlaps(&self, other: &Assignment) -> bool {
        let self_before_other_ends = other.end_date.is_none_or(|end| self.start_date < end);
        let other_before_self_ends = self.end_date.is_none_or(|end| other.start_date < end);
        self_before_other_ends && other_before_self_ends && !self.is_empty() && !other.is_empty()
    }

    /// Returns true if the range covers no dates at all.
    pub fn is_empty(&self) -> bool {
        self.end_date.is_some_and(|end| end <= self.start_date)
    }

    /// Validates the date range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAssignment`] if `end_date` precedes `start_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(EngineError::InvalidAssignment {
                    employee_id: self.employee_id,
                    message: format!("end date {} is before start date {}", end, self.start_date),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn assignment(start: &str, end: Option<&str>) -> Assignment {
        Assignment {
            id: Some(1),
            employee_id: 42,
            shift_id: 3,
            start_date: make_date(start),
            end_date: end.map(make_date),
            cycle_anchor_date: None,
        }
    }

    #[test]
    fn test_covers_is_half_open() {
        let a = assignment("2025-01-01", Some("2025-01-31"));
        assert!(!a.covers(make_date("2024-12-31")));
        assert!(a.covers(make_date("2025-01-01")));
        assert!(a.covers(make_date("2025-01-30")));
        assert!(!a.covers(make_date("2025-01-31")));
    }

    #[test]
    fn test_open_ended_covers_future() {
        let a = assignment("2025-01-01", None);
        assert!(a.covers(make_date("2099-12-31")));
    }

    #[test]
    fn test_cycle_anchor_defaults_to_start() {
        let mut a = assignment("2025-01-01", None);
        assert_eq!(a.cycle_anchor(), make_date("2025-01-01"));

        a.cycle_anchor_date = Some(make_date("2024-12-28"));
        assert_eq!(a.cycle_anchor(), make_date("2024-12-28"));
    }

    #[test]
    fn test_intersects_inclusive_range() {
        let a = assignment("2025-01-10", Some("2025-01-20"));
        assert!(a.intersects(make_date("2025-01-01"), make_date("2025-01-10")));
        assert!(a.intersects(make_date("2025-01-19"), make_date("2025-02-01")));
        assert!(!a.intersects(make_date("2025-01-20"), make_date("2025-02-01")));
        assert!(!a.intersects(make_date("2025-01-01"), make_date("2025-01-09")));
    }

    #[test]
    fn test_overlaps() {
        let january = assignment("2025-01-01", Some("2025-02-01"));
        let february = assignment("2025-02-01", None);
        let mid_january = assignment("2025-01-15", Some("2025-01-16"));

        assert!(!january.overlaps(&february));
        assert!(january.overlaps(&mid_january));
        assert!(mid_january.overlaps(&january));
        assert!(february.overlaps(&assignment("2030-01-01", None)));
    }

    #[test]
    fn test_empty_range_overlaps_nothing() {
        let empty = assignment("2025-01-10", Some("2025-01-10"));
        assert!(empty.is_empty());
        assert!(empty.validate().is_ok());
        assert!(!empty.overlaps(&assignment("2025-01-01", None)));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let a = assignment("2025-01-10", Some("2025-01-09"));
        assert!(matches!(
            a.validate(),
            Err(EngineError::InvalidAssignment { employee_id: 42, .. })
        ));
    }

    #[test]
    fn test_assignment_deserialization() {
        let json = r#"{
            "employee_id": 42,
            "shift_id": 3,
            "start_date": "2025-01-01",
            "end_date": null
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, None);
        assert_eq!(a.end_date, None);
        assert!(a.covers(make_date("2026-06-01")));
    }
}
