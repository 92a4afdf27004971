//! Expected-duration calculation.
//!
//! This module derives the minutes an employee is expected to work on a day
//! from their schedule profile.

use rust_decimal::Decimal;

use crate::config::ScheduleDefaults;
use crate::models::{ScheduleProfile, ScheduleType};

/// Expected minutes for a daily schedule when neither the profile nor the
/// configuration provides a value.
pub const DEFAULT_STANDARD_DAILY_MINUTES: u32 = 480;

/// Working days a weekly target is spread over when neither the profile nor
/// the configuration provides a value.
pub const DEFAULT_WORKING_DAYS_PER_WEEK: u32 = 6;

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

/// Calculates the expected minutes for one day of the given profile.
///
/// - A weekly profile with a non-zero weekly target expects
///   `weekly_target_minutes / working_days_per_week`.
/// - Every other profile expects `standard_daily_minutes`.
///
/// Unset or zero fields fall back to `defaults`, and zero defaults fall back
/// to [`DEFAULT_STANDARD_DAILY_MINUTES`] and [`DEFAULT_WORKING_DAYS_PER_WEEK`].
/// The result is exact; weekly apportionment may be fractional and is left
/// unrounded.
///
/// # Examples
///
/// ```
/// use balance_engine::calculation::expected_minutes;
/// use balance_engine::config::ScheduleDefaults;
/// use balance_engine::models::{ScheduleProfile, ScheduleType};
/// use rust_decimal::Decimal;
///
/// let weekly = ScheduleProfile {
///     employee_id: "emp_001".to_string(),
///     schedule_type: ScheduleType::Weekly,
///     standard_daily_minutes: None,
///     weekly_target_minutes: Some(2400),
///     working_days_per_week: Some(5),
/// };
/// assert_eq!(expected_minutes(&weekly, &ScheduleDefaults::default()), Decimal::new(480, 0));
/// ```
pub fn expected_minutes(profile: &ScheduleProfile, defaults: &ScheduleDefaults) -> Decimal {
    let daily = non_zero(profile.standard_daily_minutes)
        .or(non_zero(Some(defaults.standard_daily_minutes)))
        .unwrap_or(DEFAULT_STANDARD_DAILY_MINUTES);

    match profile.schedule_type {
        ScheduleType::Weekly => match non_zero(profile.weekly_target_minutes) {
            Some(target) => {
                let days = non_zero(profile.working_days_per_week)
                    .or(non_zero(Some(defaults.working_days_per_week)))
                    .unwrap_or(DEFAULT_WORKING_DAYS_PER_WEEK);
                Decimal::from(target) / Decimal::from(days)
            }
            None => Decimal::from(daily),
        },
        ScheduleType::Daily | ScheduleType::Other => Decimal::from(daily),
    }
}
