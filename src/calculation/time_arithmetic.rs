//! Minute-of-day arithmetic.
//!
//! Schedules are defined on a timezone-naive 24-hour wall clock. Every
//! interval is assumed to cross midnight at most once, so elapsed time is
//! always computed modulo one day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A wall-clock time expressed as minutes since midnight (0..=1439).
///
/// Serializes to and from the `HH:mm` strings used at the API boundary.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::MinuteOfDay;
///
/// let seven = MinuteOfDay::from_hm(7, 0).unwrap();
/// assert_eq!(seven.minutes(), 420);
/// assert_eq!(seven.to_string(), "07:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    /// Creates a value from minutes since midnight, or `None` if out of range.
    pub fn new(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then(|| MinuteOfDay(minutes as u16))
    }

    /// Creates a value from an hour (0..=23) and minute (0..=59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Self::new(hour * 60 + minute)
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// The hour component.
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// The minute component.
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Converts to a `chrono` time.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.minutes() * 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for MinuteOfDay {
    fn from(time: NaiveTime) -> Self {
        MinuteOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for MinuteOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MinuteOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses an `HH:mm` or `HH:mm:ss` string into a minute of the day.
///
/// Seconds are accepted for compatibility with stored values and truncated.
///
/// # Errors
///
/// Returns [`EngineError::InvalidFormat`] for anything else.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::parse_time;
///
/// assert_eq!(parse_time("22:00").unwrap().minutes(), 1320);
/// assert_eq!(parse_time("07:30:45").unwrap().minutes(), 450);
/// assert!(parse_time("7h30").is_err());
/// ```
pub fn parse_time(s: &str) -> EngineResult<MinuteOfDay> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(MinuteOfDay::from)
        .map_err(|_| EngineError::InvalidFormat {
            input: s.to_string(),
        })
}

/// Elapsed minutes from `start` to `end`.
///
/// When `end` is earlier than `start` the interval is taken to cross
/// midnight once.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::{minutes_between, parse_time};
///
/// let start = parse_time("22:00").unwrap();
/// let end = parse_time("06:00").unwrap();
/// assert_eq!(minutes_between(start, end), 480);
/// ```
pub fn minutes_between(start: MinuteOfDay, end: MinuteOfDay) -> u32 {
    if end < start {
        end.minutes() + MINUTES_PER_DAY - start.minutes()
    } else {
        end.minutes() - start.minutes()
    }
}

/// Adds a duration to a start time, wrapping at midnight.
pub fn add_minutes(start: MinuteOfDay, duration_minutes: u32) -> MinuteOfDay {
    let wrapped = (u64::from(start.minutes()) + u64::from(duration_minutes))
        % u64::from(MINUTES_PER_DAY);
    MinuteOfDay(wrapped as u16)
}

/// Formats a duration as `"Xh Ym"`.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "0h 0m");
/// assert_eq!(format_minutes(125), "2h 5m");
/// ```
pub fn format_minutes(total_minutes: u32) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
