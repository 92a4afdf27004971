//! Punctuality classification.
//!
//! This module compares an actual entry against an optional scheduled start.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::calculation::round_minutes;
use crate::config::PunctualityConfig;

/// How an entry compares to the scheduled start.
///
/// # Example
///
/// ```
/// use balance_engine::aggregation::Punctuality;
///
/// let json = serde_json::to_value(Punctuality::LateMinor { minutes: 4 }).unwrap();
/// assert_eq!(json, serde_json::json!({"status": "late_minor", "minutes": 4}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Punctuality {
    /// Entered at or before the scheduled start.
    OnTime,
    /// Late by at most the configured threshold.
    LateMinor {
        /// Minutes late.
        minutes: i64,
    },
    /// Late by more than the configured threshold.
    LateMajor {
        /// Minutes late.
        minutes: i64,
    },
}

/// Classifies an entry against a scheduled start.
///
/// `delta` is the entry minus the scheduled start, rounded to the nearest
/// minute. `delta <= 0` is on time, `0 < delta <= threshold` is a minor late
/// arrival and anything later is major. Without both an entry and a scheduled
/// start the employee-day is left unclassified (`None`).
///
/// # Example
///
/// ```
/// use balance_engine::aggregation::{classify_punctuality, Punctuality};
/// use balance_engine::config::PunctualityConfig;
/// use chrono::DateTime;
///
/// let scheduled = DateTime::parse_from_rfc3339("2026-03-02T09:00:00+01:00").unwrap();
/// let entry = DateTime::parse_from_rfc3339("2026-03-02T09:25:00+01:00").unwrap();
/// assert_eq!(
///     classify_punctuality(Some(entry), Some(scheduled), &PunctualityConfig::default()),
///     Some(Punctuality::LateMajor { minutes: 25 })
/// );
/// ```
pub fn classify_punctuality(
    entry_time: Option<DateTime<FixedOffset>>,
    scheduled_entry_time: Option<DateTime<FixedOffset>>,
    config: &PunctualityConfig,
) -> Option<Punctuality> {
    let delta = round_minutes(entry_time? - scheduled_entry_time?);
    Some(if delta <= 0 {
        Punctuality::OnTime
    } else if delta <= config.minor_late_threshold_minutes {
        Punctuality::LateMinor { minutes: delta }
    } else {
        Punctuality::LateMajor { minutes: delta }
    })
}
