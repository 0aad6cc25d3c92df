//! Time interval model and related types.
//!
//! A [`TimeInterval`] is a reusable daily schedule template: when work
//! starts, how many paid minutes it contains, which breaks and overtime
//! tiers extend it, and the windows in which punches count toward its
//! boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{MINUTES_PER_DAY, MinuteOfDay, add_minutes, minutes_between};
use crate::error::{EngineError, EngineResult};

use super::{BreakId, TimeIntervalId};

/// Maximum number of overtime tiers a time interval may carry.
pub const MAX_OVERTIME_TIERS: usize = 3;

/// Longest span a time interval may cover, counting work, breaks and every
/// overtime tier whether enabled or not.
pub const MAX_SPAN_MINUTES: u32 = 2 * MINUTES_PER_DAY;

/// A named block of unpaid time (e.g. lunch) attached to a time interval.
///
/// Breaks lengthen the interval's span without adding paid work minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// Store identifier, absent for breaks created inline with a draft.
    #[serde(default)]
    pub id: Option<BreakId>,
    /// Display name.
    pub alias: String,
    /// Length of the break in minutes.
    pub duration_minutes: u32,
}

/// The window in which a punch is accepted for one schedule boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchWindow {
    /// Earliest accepted punch.
    pub start_time: MinuteOfDay,
    /// Latest accepted punch.
    pub end_time: MinuteOfDay,
    /// Whether the window crosses midnight.
    #[serde(default)]
    pub overnight: bool,
}

impl PunchWindow {
    /// Returns true if the window is internally consistent.
    ///
    /// A window whose end precedes its start is only valid when flagged
    /// as overnight.
    pub fn is_valid(&self) -> bool {
        self.end_time >= self.start_time || self.overnight
    }

    /// Returns true if a punch at `time` falls inside the window.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_engine::calculation::parse_time;
    /// use schedule_engine::models::PunchWindow;
    ///
    /// let window = PunchWindow {
    ///     start_time: parse_time("21:00").unwrap(),
    ///     end_time: parse_time("01:00").unwrap(),
    ///     overnight: true,
    /// };
    /// assert!(window.contains(parse_time("23:30").unwrap()));
    /// assert!(window.contains(parse_time("00:30").unwrap()));
    /// assert!(!window.contains(parse_time("02:00").unwrap()));
    /// ```
    pub fn contains(&self, time: MinuteOfDay) -> bool {
        if self.end_time >= self.start_time {
            time >= self.start_time && time <= self.end_time
        } else {
            time >= self.start_time || time <= self.end_time
        }
    }

    /// Length of the window in minutes.
    pub fn length_minutes(&self) -> u32 {
        minutes_between(self.start_time, self.end_time)
    }
}

/// A block of overtime added after the base work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTier {
    /// Length of the tier in minutes; zero means the tier is inactive.
    pub duration_minutes: u32,
    /// Pay rate for this tier as a percentage of the ordinary rate (e.g. 150).
    pub pay_percentage: Decimal,
}

impl OvertimeTier {
    /// Returns true if the tier contributes any minutes.
    pub fn is_active(&self) -> bool {
        self.duration_minutes > 0
    }
}

/// A grace period that can be switched on or off independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tolerance {
    /// Whether the tolerance applies.
    #[serde(default)]
    pub enabled: bool,
    /// Tolerance length in minutes.
    #[serde(default)]
    pub minutes: u32,
}

impl Tolerance {
    /// Minutes granted, or zero when disabled.
    pub fn effective_minutes(&self) -> u32 {
        if self.enabled { self.minutes } else { 0 }
    }
}

/// A configurable workday template.
///
/// The total span and end time are derived on demand:
///
/// ```text
/// total_span = work + sum(breaks) + (overtime_enabled ? sum(tiers) : 0)
/// end_time   = (start_time + total_span) mod 1440
/// ```
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::parse_time;
/// use schedule_engine::models::{Break, TimeInterval};
///
/// let mut interval = TimeInterval::new("Day", parse_time("07:00").unwrap(), 480);
/// interval.breaks.push(Break {
///     id: None,
///     alias: "Lunch".to_string(),
///     duration_minutes: 60,
/// });
///
/// assert_eq!(interval.end_time().to_string(), "16:00");
/// assert_eq!(interval.total_span_minutes(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Store identifier, absent for drafts.
    #[serde(default)]
    pub id: Option<TimeIntervalId>,
    /// Display name.
    pub alias: String,
    /// Scheduled start of work.
    pub start_time: MinuteOfDay,
    /// Paid work minutes, excluding breaks and overtime.
    pub work_duration_minutes: u32,
    /// Breaks in display order.
    #[serde(default)]
    pub breaks: Vec<Break>,
    /// Accepted window for the punch-in.
    pub punch_in_window: PunchWindow,
    /// Accepted window for the punch-out.
    pub punch_out_window: PunchWindow,
    /// Whether the overtime tiers extend the schedule.
    #[serde(default)]
    pub overtime_enabled: bool,
    /// Up to [`MAX_OVERTIME_TIERS`] overtime tiers.
    #[serde(default)]
    pub overtime_tiers: Vec<OvertimeTier>,
    /// Grace period for late arrival.
    #[serde(default)]
    pub allow_late: Tolerance,
    /// Grace period for leaving early.
    #[serde(default)]
    pub allow_leave_early: Tolerance,
    /// Punches within this many minutes of a boundary round to it.
    #[serde(default)]
    pub rounding_threshold_minutes: u32,
}

impl TimeInterval {
    /// Creates a draft interval with punch windows collapsed onto its
    /// boundaries and no breaks or overtime.
    pub fn new(alias: impl Into<String>, start_time: MinuteOfDay, work_duration_minutes: u32) -> Self {
        let end_time = add_minutes(start_time, work_duration_minutes);
        Self {
            id: None,
            alias: alias.into(),
            start_time,
            work_duration_minutes,
            breaks: Vec::new(),
            punch_in_window: PunchWindow {
                start_time,
                end_time: start_time,
                overnight: false,
            },
            punch_out_window: PunchWindow {
                start_time: end_time,
                end_time,
                overnight: false,
            },
            overtime_enabled: false,
            overtime_tiers: Vec::new(),
            allow_late: Tolerance::default(),
            allow_leave_early: Tolerance::default(),
            rounding_threshold_minutes: 0,
        }
    }

    /// Sum of all break durations.
    ///
    /// Saturates at `u32::MAX`; [`validate`](Self::validate) keeps stored
    /// intervals well below that.
    pub fn total_break_minutes(&self) -> u32 {
        self.breaks
            .iter()
            .fold(0u32, |total, b| total.saturating_add(b.duration_minutes))
    }

    /// Sum of active overtime tiers, or zero when `overtime_enabled` is false.
    pub fn total_overtime_minutes(&self, overtime_enabled: bool) -> u32 {
        if !overtime_enabled {
            return 0;
        }
        self.overtime_tiers
            .iter()
            .filter(|tier| tier.is_active())
            .fold(0u32, |total, tier| total.saturating_add(tier.duration_minutes))
    }

    /// Work plus breaks, excluding overtime.
    pub fn base_span_minutes(&self) -> u32 {
        self.work_duration_minutes
            .saturating_add(self.total_break_minutes())
    }

    /// Work plus breaks plus overtime when enabled.
    pub fn total_span_minutes(&self) -> u32 {
        self.base_span_minutes()
            .saturating_add(self.total_overtime_minutes(self.overtime_enabled))
    }

    /// Checks that the span stays within [`MAX_SPAN_MINUTES`] even if every
    /// overtime tier were switched on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DurationOutOfRange`] with the widest span.
    pub fn ensure_span_in_range(&self) -> EngineResult<()> {
        let minutes = u64::from(self.work_duration_minutes)
            + self
                .breaks
                .iter()
                .map(|b| u64::from(b.duration_minutes))
                .sum::<u64>()
            + self
                .overtime_tiers
                .iter()
                .map(|tier| u64::from(tier.duration_minutes))
                .sum::<u64>();

        if minutes > u64::from(MAX_SPAN_MINUTES) {
            return Err(EngineError::DurationOutOfRange {
                minutes,
                max: MAX_SPAN_MINUTES,
            });
        }
        Ok(())
    }

    /// The time the interval ends, wrapping past midnight.
    pub fn end_time(&self) -> MinuteOfDay {
        add_minutes(self.start_time, self.total_span_minutes())
    }

    /// Returns true if the interval finishes on the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.start_time
            .minutes()
            .saturating_add(self.total_span_minutes())
            > MINUTES_PER_DAY
    }

    /// Recomputes the paid work duration from a user-entered span.
    ///
    /// The schedule builder lets users pick a start and end time; the work
    /// duration is that span minus the attached breaks. Overtime is not
    /// subtracted: it is appended after the entered end time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonPositiveDuration`] if the breaks consume the
    /// whole span.
    pub fn derive_work_duration(&mut self, span_end: MinuteOfDay) -> EngineResult<u32> {
        let minutes = derive_work_duration(self.start_time, span_end, &self.breaks)?;
        self.work_duration_minutes = minutes;
        Ok(minutes)
    }

    /// Validates the interval before it is stored or referenced.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingAlias`] if the alias is blank
    /// - [`EngineError::NonPositiveDuration`] if no work minutes are scheduled
    /// - [`EngineError::DurationOutOfRange`] if the span could exceed [`MAX_SPAN_MINUTES`]
    /// - [`EngineError::InvalidWindow`] for a backwards, non-overnight punch window
    /// - [`EngineError::TooManyOvertimeTiers`] for more than [`MAX_OVERTIME_TIERS`] tiers
    pub fn validate(&self) -> EngineResult<()> {
        if self.alias.trim().is_empty() {
            return Err(EngineError::MissingAlias);
        }

        if self.work_duration_minutes == 0 {
            return Err(EngineError::NonPositiveDuration { minutes: 0 });
        }
        self.ensure_span_in_range()?;

        for (name, window) in [
            ("punch-in", &self.punch_in_window),
            ("punch-out", &self.punch_out_window),
        ] {
            if !window.is_valid() {
                return Err(EngineError::InvalidWindow {
                    window: name.to_string(),
                    start: window.start_time.to_string(),
                    end: window.end_time.to_string(),
                });
            }
        }

        if self.overtime_tiers.len() > MAX_OVERTIME_TIERS {
            return Err(EngineError::TooManyOvertimeTiers {
                count: self.overtime_tiers.len(),
                max: MAX_OVERTIME_TIERS,
            });
        }

        Ok(())
    }
}

/// Work minutes contained in `[start, end)` once breaks are removed.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::parse_time;
/// use schedule_engine::models::{Break, derive_work_duration};
///
/// let lunch = Break { id: None, alias: "Lunch".to_string(), duration_minutes: 60 };
/// let minutes = derive_work_duration(
///     parse_time("07:00").unwrap(),
///     parse_time("16:00").unwrap(),
///     &[lunch],
/// )
/// .unwrap();
/// assert_eq!(minutes, 480);
/// ```
pub fn derive_work_duration(
    start: MinuteOfDay,
    end: MinuteOfDay,
    breaks: &[Break],
) -> EngineResult<u32> {
    let span = i64::from(minutes_between(start, end));
    let break_minutes: i64 = breaks.iter().map(|b| i64::from(b.duration_minutes)).sum();
    let work = span - break_minutes;

    if work <= 0 {
        return Err(EngineError::NonPositiveDuration { minutes: work });
    }
    Ok(work as u32)
}
