//! Calculation logic for the Work Schedule Engine.
//!
//! This module contains the pure computations behind schedule definition
//! and resolution: minute-of-day arithmetic with overnight wraparound, the
//! schedule builder's live summary, and the resolver that layers
//! exceptions over cyclic shifts.

mod builder_summary;
mod schedule_resolver;
mod time_arithmetic;

pub use builder_summary::{
    BreakSummary, OvertimeTierSummary, ScheduleSummary, summarize, work_time_percentage,
};
pub use schedule_resolver::{
    AssignedShift, ScheduleResolver, ScheduleSnapshot, dates_inclusive, resolve_schedule,
};
pub use time_arithmetic::{
    MINUTES_PER_DAY, MinuteOfDay, add_minutes, format_minutes, minutes_between, parse_time,
};
