//! Configuration types for the balance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `engine.yaml` configuration file.

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::calculation::{DEFAULT_STANDARD_DAILY_MINUTES, DEFAULT_WORKING_DAYS_PER_WEEK};

/// Organization-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationConfig {
    /// The human-readable name of the organization.
    pub name: String,
    /// The fixed organizational timezone, as minutes east of UTC.
    pub utc_offset_minutes: i32,
}

/// Fallback values for schedule profiles with unset fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScheduleDefaults {
    /// Expected minutes for a daily schedule when the profile leaves it unset.
    pub standard_daily_minutes: u32,
    /// Divisor for weekly targets when the profile leaves it unset.
    pub working_days_per_week: u32,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            standard_daily_minutes: DEFAULT_STANDARD_DAILY_MINUTES,
            working_days_per_week: DEFAULT_WORKING_DAYS_PER_WEEK,
        }
    }
}

/// Punctuality classification settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PunctualityConfig {
    /// Lateness up to and including this many minutes counts as minor.
    pub minor_late_threshold_minutes: i64,
}

impl Default for PunctualityConfig {
    fn default() -> Self {
        Self {
            minor_late_threshold_minutes: 10,
        }
    }
}

/// Bounds on the size of a single report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Longest report window accepted, counted in calendar days.
    pub max_window_days: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_window_days: 366,
        }
    }
}

/// Raw structure of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EngineConfigFile {
    pub organization: OrganizationConfig,
    #[serde(default)]
    pub schedule_defaults: ScheduleDefaults,
    #[serde(default)]
    pub punctuality: PunctualityConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// The complete engine configuration.
///
/// Built from the parsed `engine.yaml` once the UTC offset has been validated,
/// so holders of an `EngineConfig` always have a usable timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    organization: OrganizationConfig,
    timezone: FixedOffset,
    schedule_defaults: ScheduleDefaults,
    punctuality: PunctualityConfig,
    limits: LimitsConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig, returning `None` if the UTC offset is out of range.
    pub fn new(
        organization: OrganizationConfig,
        schedule_defaults: ScheduleDefaults,
        punctuality: PunctualityConfig,
    ) -> Option<Self> {
        let timezone = FixedOffset::east_opt(organization.utc_offset_minutes.checked_mul(60)?)?;
        Some(Self {
            organization,
            timezone,
            schedule_defaults,
            punctuality,
            limits: LimitsConfig::default(),
        })
    }

    /// Replaces the request limits.
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the fixed organizational timezone.
    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }

    /// Returns the schedule defaults.
    pub fn schedule_defaults(&self) -> &ScheduleDefaults {
        &self.schedule_defaults
    }

    /// Returns the punctuality settings.
    pub fn punctuality(&self) -> &PunctualityConfig {
        &self.punctuality
    }

    /// Returns the request limits.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            organization: OrganizationConfig {
                name: "default".to_string(),
                utc_offset_minutes: 0,
            },
            timezone: Utc.fix(),
            schedule_defaults: ScheduleDefaults::default(),
            punctuality: PunctualityConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}
