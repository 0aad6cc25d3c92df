//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct, a cyclic pattern that maps
//! each day of a rotation to a [`TimeInterval`](super::TimeInterval) or
//! to an explicit day off.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{ShiftId, TimeIntervalId};

/// What happens on one day of a shift's cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DaySlot {
    /// The employee works the referenced time interval.
    Interval {
        /// The interval worked on this day.
        time_interval_id: TimeIntervalId,
    },
    /// The employee is not scheduled.
    DayOff,
}

impl DaySlot {
    /// The referenced interval, or `None` for a day off.
    pub fn time_interval_id(&self) -> Option<TimeIntervalId> {
        match self {
            DaySlot::Interval { time_interval_id } => Some(*time_interval_id),
            DaySlot::DayOff => None,
        }
    }

    /// Returns true for [`DaySlot::DayOff`].
    pub fn is_day_off(&self) -> bool {
        matches!(self, DaySlot::DayOff)
    }
}

/// The unit in which a shift's cycle length is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleUnit {
    /// One slot per unit.
    Day,
    /// Seven slots per unit.
    Week,
}

/// A recurring work pattern.
///
/// Fixed patterns (`auto_rotate = false`) are pinned to calendar weekdays:
/// slot 0 is Sunday, slot 1 Monday, and so on. Rotating patterns
/// (`auto_rotate = true`) advance one slot per calendar day from an anchor
/// date, e.g. a 4-on/4-off rotation with `cycle_length = 8`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::models::{CycleUnit, DaySlot, Shift};
///
/// let mut slots = vec![DaySlot::DayOff; 7];
/// slots[1] = DaySlot::Interval { time_interval_id: 10 }; // Monday
///
/// let shift = Shift::new("Mondays", 7, CycleUnit::Day, false, slots);
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
///
/// assert_eq!(shift.resolve_day_index(monday, monday).unwrap(), 1);
/// assert_eq!(
///     shift.resolve_base_interval(monday, monday).unwrap(),
///     DaySlot::Interval { time_interval_id: 10 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Store identifier, absent for drafts.
    #[serde(default)]
    pub id: Option<ShiftId>,
    /// Display name.
    pub alias: String,
    /// Number of cycle units in one rotation.
    pub cycle_length: u32,
    /// Unit of `cycle_length`.
    pub cycle_unit: CycleUnit,
    /// Whether the cycle advances from an anchor date instead of following weekdays.
    #[serde(default)]
    pub auto_rotate: bool,
    /// One slot per day of the cycle.
    pub day_slots: Vec<DaySlot>,
}

impl Shift {
    /// Creates a draft shift.
    pub fn new(
        alias: impl Into<String>,
        cycle_length: u32,
        cycle_unit: CycleUnit,
        auto_rotate: bool,
        day_slots: Vec<DaySlot>,
    ) -> Self {
        Self {
            id: None,
            alias: alias.into(),
            cycle_length,
            cycle_unit,
            auto_rotate,
            day_slots,
        }
    }

    /// Number of days in one full rotation.
    pub fn cycle_days(&self) -> u32 {
        match self.cycle_unit {
            CycleUnit::Day => self.cycle_length,
            CycleUnit::Week => self.cycle_length.saturating_mul(7),
        }
    }

    /// Interval identifiers referenced by any slot, in slot order.
    pub fn referenced_interval_ids(&self) -> impl Iterator<Item = TimeIntervalId> + '_ {
        self.day_slots.iter().filter_map(DaySlot::time_interval_id)
    }

    /// Validates the cycle definition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if the alias is blank, the cycle is
    /// empty, the slot count differs from the cycle length, or a fixed
    /// weekday pattern is not a whole number of weeks.
    pub fn validate(&self) -> EngineResult<()> {
        if self.alias.trim().is_empty() {
            return Err(self.invalid("alias must not be empty"));
        }

        let cycle_days = self.cycle_days();
        if cycle_days == 0 {
            return Err(self.invalid("cycle length must be at least one day"));
        }

        if self.day_slots.len() != cycle_days as usize {
            return Err(self.invalid(format!(
                "expected {} day slots for the cycle, found {}",
                cycle_days,
                self.day_slots.len()
            )));
        }

        if !self.auto_rotate && cycle_days % 7 != 0 {
            return Err(self.invalid(format!(
                "fixed weekday patterns need a multiple of 7 days, found {}",
                cycle_days
            )));
        }

        Ok(())
    }

    /// Position of `date` within the cycle.
    ///
    /// Fixed patterns use the weekday counted from Sunday, offset by whole
    /// weeks since the anchor's week for multi-week patterns. Rotating
    /// patterns count days since the anchor. Both wrap with Euclidean
    /// modulo, so dates before the anchor still land in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if the cycle is empty.
    pub fn resolve_day_index(&self, date: NaiveDate, cycle_anchor_date: NaiveDate) -> EngineResult<u32> {
        let cycle_days = i64::from(self.cycle_days());
        if cycle_days == 0 {
            return Err(self.invalid("cycle length must be at least one day"));
        }

        let position = if self.auto_rotate {
            (date - cycle_anchor_date).num_days()
        } else {
            let weekday = i64::from(date.weekday().num_days_from_sunday());
            let weeks = (week_start(date) - week_start(cycle_anchor_date)).num_days() / 7;
            weeks * 7 + weekday
        };

        Ok(position.rem_euclid(cycle_days) as u32)
    }

    /// The slot in effect on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if the cycle is empty or has
    /// fewer slots than days.
    pub fn resolve_base_interval(&self, date: NaiveDate, cycle_anchor_date: NaiveDate) -> EngineResult<DaySlot> {
        let index = self.resolve_day_index(date, cycle_anchor_date)?;
        self.day_slots.get(index as usize).copied().ok_or_else(|| {
            self.invalid(format!("no day slot defined for cycle day {}", index))
        })
    }

    fn invalid(&self, message: impl Into<String>) -> EngineError {
        EngineError::InvalidShift {
            alias: self.alias.clone(),
            message: message.into(),
        }
    }
}

/// The Sunday on or before `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}
