//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineConfigFile};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Organization timezone, schedule defaults, punctuality, limits
/// ```
///
/// # Example
///
/// ```no_run
/// use balance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Organization: {}", loader.config().organization().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` is missing, is not valid YAML, or
    /// declares a UTC offset of a day or more.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let engine_path = path.as_ref().join("engine.yaml");
        let file = Self::load_yaml::<EngineConfigFile>(&engine_path)?;

        let offset = file.organization.utc_offset_minutes;
        let config = EngineConfig::new(file.organization, file.schedule_defaults, file.punctuality)
            .ok_or_else(|| EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!("utc_offset_minutes {} is out of range", offset),
            })?
            .with_limits(file.limits);

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "balance-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let config = loader.config();
        assert_eq!(config.organization().name, "Default Organization");
        assert_eq!(config.timezone().local_minus_utc(), 3600);
        assert_eq!(config.schedule_defaults().standard_daily_minutes, 480);
        assert_eq!(config.schedule_defaults().working_days_per_week, 6);
        assert_eq!(config.punctuality().minor_late_threshold_minutes, 10);
        assert_eq!(config.limits().max_window_days, 366);
    }

    #[test]
    fn test_load_reads_window_limit() {
        let dir = scratch_dir("limits");
        fs::write(
            dir.join("engine.yaml"),
            "organization:\n  name: Acme\n  utc_offset_minutes: 0\nlimits:\n  max_window_days: 31\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config().limits().max_window_days, 31);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("engine.yaml"), "organization: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_out_of_range_offset_returns_parse_error() {
        let dir = scratch_dir("bad-offset");
        fs::write(
            dir.join("engine.yaml"),
            "organization:\n  name: Acme\n  utc_offset_minutes: 1440\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("1440"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let dir = scratch_dir("minimal");
        fs::write(
            dir.join("engine.yaml"),
            "organization:\n  name: Acme\n  utc_offset_minutes: -180\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config().timezone().local_minus_utc(), -180 * 60);
        assert_eq!(loader.config().schedule_defaults().standard_daily_minutes, 480);
        assert_eq!(loader.config().punctuality().minor_late_threshold_minutes, 10);
        assert_eq!(loader.config().limits().max_window_days, 366);
    }
}
