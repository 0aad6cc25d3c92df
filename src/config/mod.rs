//! Configuration loading for the Work Schedule Engine.
//!
//! This module loads the engine settings and the seed catalog of time
//! intervals and shifts from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use schedule_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Catalog shifts: {}", config.catalog().shifts.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Catalog, EngineSettings};
