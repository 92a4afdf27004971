//! Schedule profile and scheduled start models.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// How an employee's expected daily time is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleType {
    /// A fixed number of minutes every working day.
    Daily,
    /// A weekly target apportioned over the working days.
    Weekly,
    /// Any value the engine does not recognise; treated as daily.
    #[serde(other)]
    Other,
}

/// An employee's schedule profile.
///
/// Zero and unset numeric fields are equivalent: both fall back to the
/// configured schedule defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleProfile {
    /// The employee this profile belongs to.
    pub employee_id: String,
    /// The schedule type.
    pub schedule_type: ScheduleType,
    /// Expected minutes per day for daily schedules.
    #[serde(default)]
    pub standard_daily_minutes: Option<u32>,
    /// Target minutes per week for weekly schedules.
    #[serde(default)]
    pub weekly_target_minutes: Option<u32>,
    /// Number of working days a weekly target is spread across.
    #[serde(default)]
    pub working_days_per_week: Option<u32>,
}

impl ScheduleProfile {
    /// Builds the profile used for employees that have none: a daily
    /// schedule with every field left to the defaults.
    pub fn default_daily(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            schedule_type: ScheduleType::Daily,
            standard_daily_minutes: None,
            weekly_target_minutes: None,
            working_days_per_week: None,
        }
    }
}

/// The time an employee was scheduled to start on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledStart {
    /// The employee.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The scheduled entry instant.
    pub scheduled_entry_time: DateTime<FixedOffset>,
}
