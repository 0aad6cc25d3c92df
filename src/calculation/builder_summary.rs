//! Live summary for the schedule builder.
//!
//! While a user edits a draft [`TimeInterval`], the builder shows derived
//! totals next to the form. [`summarize`] recomputes all of them from the
//! draft on every call; nothing is cached between edits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeInterval;

use super::time_arithmetic::format_minutes;

/// Count and length of the breaks attached to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSummary {
    /// Number of breaks.
    pub count: usize,
    /// Total break minutes.
    pub total_minutes: u32,
    /// Total break time as `"Xh Ym"`.
    pub formatted: String,
}

/// One active overtime tier, for the builder's tier legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTierSummary {
    /// 1-based position of the tier in the draft.
    pub tier: usize,
    /// Tier length in minutes.
    pub duration_minutes: u32,
    /// Tier length as `"Xh Ym"`.
    pub duration: String,
    /// Pay rate as a percentage of the ordinary rate.
    pub pay_percentage: Decimal,
}

/// Derived display fields for a draft time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// `"{start} - {end}"` with the end including breaks and enabled overtime.
    pub schedule_range: String,
    /// Paid work time as `"Xh Ym"`.
    pub normal_work_day: String,
    /// Break count and total.
    pub break_summary: BreakSummary,
    /// Total active overtime as `"Xh Ym"`; `"0h 0m"` when disabled.
    pub overtime_summary: String,
    /// Active overtime tiers, empty when overtime is disabled.
    pub overtime_tiers: Vec<OvertimeTierSummary>,
    /// Work plus breaks plus overtime as `"Xh Ym"`.
    pub total_duration: String,
    /// Share (0-100, two decimals) of the total span taken by work and breaks.
    pub work_time_percentage: Decimal,
}

/// Computes the builder summary for a draft.
///
/// Drafts are not validated here. Totals that would not fit in a `u32`
/// saturate; callers serving untrusted drafts should check
/// [`TimeInterval::ensure_span_in_range`] first.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use schedule_engine::calculation::{parse_time, summarize};
/// use schedule_engine::models::{Break, TimeInterval};
///
/// let mut draft = TimeInterval::new("Day", parse_time("07:00").unwrap(), 480);
/// draft.breaks.push(Break { id: None, alias: "Lunch".to_string(), duration_minutes: 60 });
///
/// let summary = summarize(&draft);
/// assert_eq!(summary.schedule_range, "07:00 - 16:00");
/// assert_eq!(summary.total_duration, "9h 0m");
/// assert_eq!(summary.work_time_percentage, Decimal::ONE_HUNDRED);
/// ```
pub fn summarize(draft: &TimeInterval) -> ScheduleSummary {
    let break_minutes = draft.total_break_minutes();
    let overtime_minutes = draft.total_overtime_minutes(draft.overtime_enabled);
    let base_minutes = draft.base_span_minutes();
    let total_minutes = draft.total_span_minutes();

    let overtime_tiers = if draft.overtime_enabled {
        draft
            .overtime_tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| tier.is_active())
            .map(|(index, tier)| OvertimeTierSummary {
                tier: index + 1,
                duration_minutes: tier.duration_minutes,
                duration: format_minutes(tier.duration_minutes),
                pay_percentage: tier.pay_percentage,
            })
            .collect()
    } else {
        Vec::new()
    };

    ScheduleSummary {
        schedule_range: format!("{} - {}", draft.start_time, draft.end_time()),
        normal_work_day: format_minutes(draft.work_duration_minutes),
        break_summary: BreakSummary {
            count: draft.breaks.len(),
            total_minutes: break_minutes,
            formatted: format_minutes(break_minutes),
        },
        overtime_summary: format_minutes(overtime_minutes),
        overtime_tiers,
        total_duration: format_minutes(total_minutes),
        work_time_percentage: work_time_percentage(
            base_minutes,
            total_minutes,
            draft.overtime_enabled,
        ),
    }
}

/// Proportion of the total span taken by the base (work + break) span.
///
/// Always 100 when overtime is disabled or the span is empty.
pub fn work_time_percentage(base_minutes: u32, total_minutes: u32, overtime_enabled: bool) -> Decimal {
    if !overtime_enabled || total_minutes == 0 {
        return Decimal::ONE_HUNDRED;
    }
    (Decimal::from(base_minutes) * Decimal::ONE_HUNDRED / Decimal::from(total_minutes)).round_dp(2)
}
