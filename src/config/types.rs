//! Configuration types for the schedule engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{DAY_OFF_PLACEHOLDER, MAX_OVERTIME_TIERS, Shift, TimeInterval};
use crate::service::DEFAULT_MAX_RANGE_DAYS;

/// Runtime settings read from `engine.yaml`.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Text shown for in/out times on days off.
    #[serde(default = "default_day_off_placeholder")]
    pub day_off_placeholder: String,
    /// Maximum overtime tiers accepted on new time intervals.
    #[serde(default = "default_max_overtime_tiers")]
    pub max_overtime_tiers: usize,
    /// Longest inclusive date range a single schedule request may cover.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            day_off_placeholder: default_day_off_placeholder(),
            max_overtime_tiers: default_max_overtime_tiers(),
            max_range_days: default_max_range_days(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_day_off_placeholder() -> String {
    DAY_OFF_PLACEHOLDER.to_string()
}

fn default_max_overtime_tiers() -> usize {
    MAX_OVERTIME_TIERS
}

fn default_max_range_days() -> u32 {
    DEFAULT_MAX_RANGE_DAYS
}

/// Seed data read from `catalog.yaml`.
///
/// Entries carry explicit identifiers so shifts can reference intervals
/// by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// Time intervals to preload.
    #[serde(default)]
    pub time_intervals: Vec<TimeInterval>,
    /// Shifts to preload, referencing `time_intervals`.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Catalog {
    /// Returns true if the catalog defines nothing.
    pub fn is_empty(&self) -> bool {
        self.time_intervals.is_empty() && self.shifts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySlot;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings: EngineSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.day_off_placeholder, "--:--");
        assert_eq!(settings.max_overtime_tiers, 3);
        assert_eq!(settings.max_range_days, 366);
    }

    #[test]
    fn test_settings_override_fields() {
        let yaml = r#"
bind_address: "127.0.0.1:8080"
max_overtime_tiers: 2
max_range_days: 31
"#;
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.bind_address, "127.0.0.1:8080");
        assert_eq!(settings.max_overtime_tiers, 2);
        assert_eq!(settings.max_range_days, 31);
        assert_eq!(settings.day_off_placeholder, "--:--");
    }

    #[test]
    fn test_catalog_deserialization() {
        let yaml = r#"
time_intervals:
  - id: 1
    alias: Morning
    start_time: "06:00"
    work_duration_minutes: 480
    punch_in_window: { start_time: "05:30", end_time: "06:30" }
    punch_out_window: { start_time: "14:00", end_time: "15:00" }
shifts:
  - id: 10
    alias: Daily mornings
    cycle_length: 1
    cycle_unit: day
    auto_rotate: true
    day_slots:
      - { kind: interval, time_interval_id: 1 }
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.time_intervals[0].alias, "Morning");
        assert_eq!(catalog.time_intervals[0].start_time.to_string(), "06:00");
        assert_eq!(
            catalog.shifts[0].day_slots,
            vec![DaySlot::Interval { time_interval_id: 1 }]
        );
    }
}
