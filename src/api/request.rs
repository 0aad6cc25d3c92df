//! Request types for the schedule engine API.
//!
//! Shift, assignment and exception payloads deserialize straight into the
//! domain types. Time intervals get their own request type because the
//! builder may send an end time instead of a work duration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{MinuteOfDay, add_minutes};
use crate::error::{EngineError, EngineResult};
use crate::models::{Break, OvertimeTier, PunchWindow, TimeInterval, TimeIntervalId, Tolerance};

/// Query string of `GET /employees/:employee_id/schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// First date to resolve (inclusive).
    pub start_date: NaiveDate,
    /// Last date to resolve (inclusive).
    pub end_date: NaiveDate,
}

/// Body of `POST /time-intervals` and `POST /time-intervals/summary`.
///
/// Exactly one of `work_duration_minutes` and `end_time` should be given.
/// With `end_time`, the work duration is the span up to it minus breaks.
/// Omitted punch windows collapse onto the schedule boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeIntervalRequest {
    /// Identifier to keep, normally absent.
    #[serde(default)]
    pub id: Option<TimeIntervalId>,
    /// Display name.
    #[serde(default)]
    pub alias: String,
    /// Scheduled start of work.
    pub start_time: MinuteOfDay,
    /// Paid work minutes.
    #[serde(default)]
    pub work_duration_minutes: Option<u32>,
    /// End of the base span (work plus breaks), used to derive the work duration.
    #[serde(default)]
    pub end_time: Option<MinuteOfDay>,
    /// Breaks in display order.
    #[serde(default)]
    pub breaks: Vec<Break>,
    /// Accepted window for the punch-in.
    #[serde(default)]
    pub punch_in_window: Option<PunchWindow>,
    /// Accepted window for the punch-out.
    #[serde(default)]
    pub punch_out_window: Option<PunchWindow>,
    /// Whether the overtime tiers extend the schedule.
    #[serde(default)]
    pub overtime_enabled: bool,
    /// Overtime tiers.
    #[serde(default)]
    pub overtime_tiers: Vec<OvertimeTier>,
    /// Grace period for late arrival.
    #[serde(default)]
    pub allow_late: Tolerance,
    /// Grace period for leaving early.
    #[serde(default)]
    pub allow_leave_early: Tolerance,
    /// Punch rounding threshold in minutes.
    #[serde(default)]
    pub rounding_threshold_minutes: u32,
}

impl TimeIntervalRequest {
    /// Builds the domain interval, deriving the work duration if needed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonPositiveDuration`] if neither a duration
    /// nor an end time is given, or if the breaks consume the whole span.
    pub fn into_interval(self) -> EngineResult<TimeInterval> {
        let mut interval = TimeInterval::new(self.alias, self.start_time, 0);
        interval.id = self.id;
        interval.breaks = self.breaks;

        match (self.work_duration_minutes, self.end_time) {
            (Some(minutes), _) => interval.work_duration_minutes = minutes,
            (None, Some(end_time)) => {
                interval.derive_work_duration(end_time)?;
            }
            (None, None) => return Err(EngineError::NonPositiveDuration { minutes: 0 }),
        }

        let end_time = add_minutes(interval.start_time, interval.base_span_minutes());
        interval.punch_in_window = self.punch_in_window.unwrap_or(PunchWindow {
            start_time: interval.start_time,
            end_time: interval.start_time,
            overnight: false,
        });
        interval.punch_out_window = self.punch_out_window.unwrap_or(PunchWindow {
            start_time: end_time,
            end_time,
            overnight: false,
        });
        interval.overtime_enabled = self.overtime_enabled;
        interval.overtime_tiers = self.overtime_tiers;
        interval.allow_late = self.allow_late;
        interval.allow_leave_early = self.allow_leave_early;
        interval.rounding_threshold_minutes = self.rounding_threshold_minutes;

        Ok(interval)
    }
}
