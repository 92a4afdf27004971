//! In-memory source implementation.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::error::EngineResult;
use crate::models::{RawClockEvent, ReportWindow, ScheduleProfile, ScheduledStart};

use super::{ClockEventSource, ScheduleProfileSource, ScheduledStartSource};

/// Serves events, profiles and scheduled starts from owned collections.
///
/// Used by the HTTP API, where the caller posts every input in the request
/// body, and by tests.
///
/// # Example
///
/// ```
/// use balance_engine::models::ReportWindow;
/// use balance_engine::sources::{ClockEventSource, InMemorySource};
/// use chrono::NaiveDate;
///
/// let source = InMemorySource::default();
/// let window = ReportWindow::single_day(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// let events = source.list_events(&["emp_001".to_string()], &window).unwrap();
/// assert!(events.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    events: Vec<RawClockEvent>,
    profiles: HashMap<String, ScheduleProfile>,
    scheduled_starts: HashMap<(String, NaiveDate), DateTime<FixedOffset>>,
}

impl InMemorySource {
    /// Builds a source from its collections.
    ///
    /// Later profiles and scheduled starts replace earlier ones with the
    /// same key.
    pub fn new(
        events: Vec<RawClockEvent>,
        profiles: impl IntoIterator<Item = ScheduleProfile>,
        scheduled_starts: impl IntoIterator<Item = ScheduledStart>,
    ) -> Self {
        Self {
            events,
            profiles: profiles
                .into_iter()
                .map(|p| (p.employee_id.clone(), p))
                .collect(),
            scheduled_starts: scheduled_starts
                .into_iter()
                .map(|s| ((s.employee_id, s.date), s.scheduled_entry_time))
                .collect(),
        }
    }
}

impl ClockEventSource for InMemorySource {
    fn list_events(
        &self,
        employee_ids: &[String],
        _window: &ReportWindow,
    ) -> EngineResult<Vec<RawClockEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| employee_ids.contains(&e.employee_id))
            .cloned()
            .collect())
    }
}

impl ScheduleProfileSource for InMemorySource {
    fn get_schedule_profiles(
        &self,
        employee_ids: &[String],
    ) -> EngineResult<HashMap<String, ScheduleProfile>> {
        Ok(employee_ids
            .iter()
            .filter_map(|id| self.profiles.get(id).map(|p| (id.clone(), p.clone())))
            .collect())
    }
}

impl ScheduledStartSource for InMemorySource {
    fn get_scheduled_start(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DateTime<FixedOffset>>> {
        Ok(self
            .scheduled_starts
            .get(&(employee_id.to_string(), date))
            .copied())
    }
}
