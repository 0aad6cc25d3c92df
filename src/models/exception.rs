//! Schedule exception model.
//!
//! A [`ScheduleException`] replaces the shift-resolved interval for one
//! employee, assignment and date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{AssignmentId, EmployeeId, ExceptionId, TimeIntervalId};

/// A one-off override of an employee's schedule on a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    /// Store identifier, absent before insertion.
    #[serde(default)]
    pub id: Option<ExceptionId>,
    /// The affected employee.
    pub employee_id: EmployeeId,
    /// The assignment whose schedule is overridden.
    pub assignment_id: AssignmentId,
    /// The overridden date.
    pub exception_date: NaiveDate,
    /// Weekday of `exception_date`, counted from Sunday = 0.
    pub day_index: u32,
    /// The interval worked instead.
    pub time_interval_id: TimeIntervalId,
    /// Audit remark explaining the override.
    #[serde(default)]
    pub remarks: String,
    /// Who created the exception.
    pub created_by: String,
    /// When the exception was created (wall clock).
    pub created_at: NaiveDateTime,
}

impl ScheduleException {
    /// Weekday index of a date as stored on exceptions (Sunday = 0).
    pub fn day_index_for(date: NaiveDate) -> u32 {
        date.weekday().num_days_from_sunday()
    }
}

/// Fields a caller supplies to create an exception.
///
/// The day index and creation timestamp are filled in by
/// [`ExceptionService`](crate::service::ExceptionService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduleException {
    /// The affected employee.
    pub employee_id: EmployeeId,
    /// The assignment whose schedule is overridden.
    pub assignment_id: AssignmentId,
    /// The overridden date.
    pub exception_date: NaiveDate,
    /// The interval worked instead.
    pub time_interval_id: TimeIntervalId,
    /// Audit remark explaining the override.
    #[serde(default)]
    pub remarks: String,
    /// Who is creating the exception.
    pub created_by: String,
}

impl NewScheduleException {
    /// Builds the stored form, stamped with `created_at`.
    pub fn into_exception(self, created_at: NaiveDateTime) -> ScheduleException {
        ScheduleException {
            id: None,
            employee_id: self.employee_id,
            assignment_id: self.assignment_id,
            exception_date: self.exception_date,
            day_index: ScheduleException::day_index_for(self.exception_date),
            time_interval_id: self.time_interval_id,
            remarks: self.remarks,
            created_by: self.created_by,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_index_counts_from_sunday() {
        assert_eq!(ScheduleException::day_index_for(make_date("2025-01-12")), 0); // Sunday
        assert_eq!(ScheduleException::day_index_for(make_date("2025-01-13")), 1); // Monday
        assert_eq!(ScheduleException::day_index_for(make_date("2025-01-18")), 6); // Saturday
    }

    #[test]
    fn test_into_exception_derives_day_index() {
        let created_at = make_date("2025-01-10").and_hms_opt(9, 30, 0).unwrap();
        let exception = NewScheduleException {
            employee_id: 42,
            assignment_id: 1,
            exception_date: make_date("2025-01-15"),
            time_interval_id: 9,
            remarks: "Covering night shift".to_string(),
            created_by: "supervisor".to_string(),
        }
        .into_exception(created_at);

        assert_eq!(exception.id, None);
        assert_eq!(exception.day_index, 3); // Wednesday
        assert_eq!(exception.created_at, created_at);
        assert_eq!(exception.remarks, "Covering night shift");
    }

    #[test]
    fn test_new_exception_deserialization_defaults_remarks() {
        let json = r#"{
            "employee_id": 42,
            "assignment_id": 1,
            "exception_date": "2025-01-15",
            "time_interval_id": 9,
            "created_by": "supervisor"
        }"#;
        let request: NewScheduleException = serde_json::from_str(json).unwrap();
        assert!(request.remarks.is_empty());
    }
}
