//! Day partitioning logic.
//!
//! This module assigns clock events to the calendar date they fall on in the
//! organization's fixed timezone, so that each employee-day can be reduced on
//! its own.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::models::{ClockEvent, ReportWindow};

/// Determines the organization-local calendar date of an instant.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::local_date;
/// use chrono::{DateTime, FixedOffset, NaiveDate};
///
/// // 23:30 UTC is already the next day one hour east of UTC.
/// let instant = DateTime::parse_from_rfc3339("2026-03-02T23:30:00Z").unwrap();
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// assert_eq!(local_date(instant, cet), NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
/// ```
pub fn local_date(instant: DateTime<FixedOffset>, timezone: FixedOffset) -> NaiveDate {
    instant.with_timezone(&timezone).date_naive()
}

/// Groups events by their organization-local date.
///
/// Events dated outside `window` are dropped. Within each date the events
/// keep their input order; the reducer does its own sorting.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::partition_by_day;
/// use balance_engine::models::{ClockEvent, ClockEventKind, ReportWindow};
/// use chrono::{DateTime, FixedOffset, NaiveDate};
///
/// let events = vec![
///     ClockEvent {
///         employee_id: "emp_001".to_string(),
///         kind: ClockEventKind::Entry,
///         timestamp: DateTime::parse_from_rfc3339("2026-03-02T09:00:00+01:00").unwrap(),
///     },
///     ClockEvent {
///         employee_id: "emp_001".to_string(),
///         kind: ClockEventKind::Entry,
///         timestamp: DateTime::parse_from_rfc3339("2026-03-03T09:00:00+01:00").unwrap(),
///     },
/// ];
/// let window = ReportWindow::single_day(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// let days = partition_by_day(events, FixedOffset::east_opt(3600).unwrap(), &window);
/// assert_eq!(days.len(), 1);
/// ```
pub fn partition_by_day(
    events: impl IntoIterator<Item = ClockEvent>,
    timezone: FixedOffset,
    window: &ReportWindow,
) -> BTreeMap<NaiveDate, Vec<ClockEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<ClockEvent>> = BTreeMap::new();
    for event in events {
        let date = local_date(event.timestamp, timezone);
        if window.contains_date(date) {
            days.entry(date).or_default().push(event);
        }
    }
    days
}
