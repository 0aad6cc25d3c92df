//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and the seed catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::MAX_OVERTIME_TIERS;
use crate::store::ScheduleStore;

use super::types::{Catalog, EngineSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Engine settings (required)
/// └── catalog.yaml  # Seed time intervals and shifts (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use schedule_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Binding to {}", loader.settings().bind_address);
/// # Ok::<(), schedule_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: EngineSettings,
    catalog: Catalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `engine.yaml` is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML
    ///   or a setting is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&engine_path)?;
        if settings.max_overtime_tiers > MAX_OVERTIME_TIERS {
            return Err(EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!(
                    "max_overtime_tiers must be at most {}, got {}",
                    MAX_OVERTIME_TIERS, settings.max_overtime_tiers
                ),
            });
        }
        if settings.max_range_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: "max_range_days must be at least 1".to_string(),
            });
        }

        let catalog_path = path.join("catalog.yaml");
        let catalog = if catalog_path.exists() {
            Self::load_yaml::<Catalog>(&catalog_path)?
        } else {
            Catalog::default()
        };

        info!(
            path = %path.display(),
            time_intervals = catalog.time_intervals.len(),
            shifts = catalog.shifts.len(),
            "Loaded configuration"
        );
        Ok(Self { settings, catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the seed catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Inserts the catalog into `store`, intervals before shifts.
    ///
    /// Returns the number of entities written.
    ///
    /// # Errors
    ///
    /// Propagates validation and conflict errors from the store.
    pub fn seed(&self, store: &dyn ScheduleStore) -> EngineResult<usize> {
        for interval in &self.catalog.time_intervals {
            store.insert_time_interval(interval.clone())?;
        }
        for shift in &self.catalog.shifts {
            store.insert_shift(shift.clone())?;
        }

        let count = self.catalog.time_intervals.len() + self.catalog.shifts.len();
        info!(entities = count, "Seeded schedule store from catalog");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryScheduleStore;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().day_off_placeholder, "--:--");
        assert_eq!(loader.settings().max_overtime_tiers, 3);
        assert!(!loader.catalog().is_empty());
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        match result {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.ends_with("engine.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_seeds_store() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let store = InMemoryScheduleStore::new();

        let count = loader.seed(&store).unwrap();
        assert_eq!(
            count,
            loader.catalog().time_intervals.len() + loader.catalog().shifts.len()
        );
        assert_eq!(
            store.list_time_intervals().unwrap().len(),
            loader.catalog().time_intervals.len()
        );
        for shift in &loader.catalog().shifts {
            assert!(store.get_shift(shift.id.unwrap()).is_ok());
        }
    }

    #[test]
    fn test_seeding_twice_reports_duplicate_ids() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let store = InMemoryScheduleStore::new();
        loader.seed(&store).unwrap();

        assert!(matches!(
            loader.seed(&store),
            Err(EngineError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_default_loader_is_empty() {
        let loader = ConfigLoader::default();
        assert!(loader.catalog().is_empty());
        assert_eq!(loader.settings().bind_address, "0.0.0.0:3000");
    }
}
