//! Application state for the schedule engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineSettings};
use crate::error::EngineResult;
use crate::service::{CalendarService, ExceptionService};
use crate::store::{Clock, InMemoryScheduleStore, ScheduleStore};

/// Shared application state.
///
/// Holds the store, the services built on it and the engine settings.
/// Cloning is cheap; everything sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScheduleStore>,
    calendar: CalendarService,
    exceptions: ExceptionService,
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates application state over an existing store and clock.
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Self {
        let calendar = CalendarService::new(store.clone())
            .with_day_off_placeholder(settings.day_off_placeholder.clone())
            .with_max_range_days(settings.max_range_days);
        let exceptions = ExceptionService::new(store.clone(), clock);
        Self {
            store,
            calendar,
            exceptions,
            settings: Arc::new(settings),
        }
    }

    /// Creates application state over a fresh in-memory store seeded from
    /// the configuration's catalog.
    ///
    /// # Errors
    ///
    /// Propagates catalog validation errors.
    pub fn from_config(config: &ConfigLoader, clock: Arc<dyn Clock>) -> EngineResult<Self> {
        let store = Arc::new(InMemoryScheduleStore::new());
        config.seed(store.as_ref())?;
        Ok(Self::new(store, clock, config.settings().clone()))
    }

    /// Returns the schedule store.
    pub fn store(&self) -> &dyn ScheduleStore {
        self.store.as_ref()
    }

    /// Returns the calendar service.
    pub fn calendar(&self) -> &CalendarService {
        &self.calendar
    }

    /// Returns the exception service.
    pub fn exceptions(&self) -> &ExceptionService {
        &self.exceptions
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
