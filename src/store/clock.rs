//! Wall-clock source for the past-date editing rule.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Supplies the current wall-clock time.
///
/// Schedules are timezone-naive, so the clock reports local wall time
/// without an offset.
pub trait Clock: Send + Sync {
    /// The current wall-clock date and time.
    fn now(&self) -> NaiveDateTime;

    /// The current date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::store::{Clock, FixedClock};
///
/// let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// A clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// A clock frozen at midnight on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
