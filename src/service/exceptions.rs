//! Exception editing with the past-date rule.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{ExceptionId, NewScheduleException, ScheduleException, TimeIntervalId};
use crate::store::{Clock, ScheduleStore};

/// Changes applied to an existing exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionUpdate {
    /// The interval worked instead.
    pub time_interval_id: TimeIntervalId,
    /// Replacement remark; the existing one is kept when absent.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Creates, updates and removes schedule exceptions.
///
/// Exceptions dated before the clock's current date are immutable. An
/// exception dated today may still be edited.
#[derive(Clone)]
pub struct ExceptionService {
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn Clock>,
}

impl ExceptionService {
    /// Creates an exception service.
    pub fn new(store: Arc<dyn ScheduleStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stores a new exception stamped with the current time.
    ///
    /// The store checks the assignment's owner and coverage under the same
    /// write that inserts the exception.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ImmutablePastDate`] if the date is before today
    /// - [`EngineError::AssignmentNotFound`] if the assignment does not exist
    /// - [`EngineError::InvalidAssignment`] if the assignment belongs to another employee
    /// - [`EngineError::ExceptionOutsideAssignment`] if the assignment does not cover the date
    /// - [`EngineError::TimeIntervalNotFound`] if the interval does not exist
    /// - [`EngineError::DuplicateException`] if the date already has an exception
    pub fn create(&self, request: NewScheduleException) -> EngineResult<ScheduleException> {
        self.ensure_editable(request.exception_date)?;

        let stored = self
            .store
            .insert_exception(request.into_exception(self.clock.now()))?;

        info!(
            exception_id = ?stored.id,
            employee_id = stored.employee_id,
            date = %stored.exception_date,
            time_interval_id = stored.time_interval_id,
            created_by = %stored.created_by,
            "Created schedule exception"
        );
        Ok(stored)
    }

    /// Points an existing exception at another interval.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ExceptionNotFound`] if the exception does not exist
    /// - [`EngineError::ImmutablePastDate`] if its date is before today
    /// - [`EngineError::TimeIntervalNotFound`] if the new interval does not exist
    pub fn update(&self, id: ExceptionId, update: ExceptionUpdate) -> EngineResult<ScheduleException> {
        let mut exception = self.store.get_exception(id)?;
        self.ensure_editable(exception.exception_date)?;

        exception.time_interval_id = update.time_interval_id;
        if let Some(remarks) = update.remarks {
            exception.remarks = remarks;
        }
        let stored = self.store.update_exception(id, exception)?;

        info!(
            exception_id = id,
            time_interval_id = stored.time_interval_id,
            "Updated schedule exception"
        );
        Ok(stored)
    }

    /// Deletes an exception, restoring the shift-resolved schedule for its date.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ExceptionNotFound`] if the exception does not exist
    /// - [`EngineError::ImmutablePastDate`] if its date is before today
    pub fn remove(&self, id: ExceptionId) -> EngineResult<ScheduleException> {
        let exception = self.store.get_exception(id)?;
        self.ensure_editable(exception.exception_date)?;

        let removed = self.store.delete_exception(id)?;
        info!(exception_id = id, date = %removed.exception_date, "Removed schedule exception");
        Ok(removed)
    }

    fn ensure_editable(&self, date: NaiveDate) -> EngineResult<()> {
        let today = self.clock.today();
        if date < today {
            warn!(date = %date, today = %today, "Rejected edit of past schedule");
            return Err(EngineError::ImmutablePastDate { date, today });
        }
        Ok(())
    }
}
