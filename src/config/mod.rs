//! Configuration loading and management for the balance engine.
//!
//! This module loads the organization timezone, schedule defaults and
//! punctuality thresholds and request limits from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use balance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Timezone: {}", loader.config().timezone());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, LimitsConfig, OrganizationConfig, PunctualityConfig, ScheduleDefaults,
};
