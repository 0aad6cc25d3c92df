//! Request-level operations over the schedule store.
//!
//! Services combine the [`ScheduleStore`](crate::store::ScheduleStore) and
//! [`Clock`](crate::store::Clock) collaborators with the pure calculation
//! layer. They are cheap to clone and safe to share across tasks.

mod calendar;
mod exceptions;

pub use calendar::{CalendarService, DEFAULT_MAX_RANGE_DAYS};
pub use exceptions::{ExceptionService, ExceptionUpdate};
