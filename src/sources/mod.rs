//! Input sources for the balance engine.
//!
//! A report pulls clock events, schedule profiles and scheduled starts from
//! the collaborators defined here. Any error a source returns aborts the
//! report; the engine performs no retries of its own.

mod memory;

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::error::EngineResult;
use crate::models::{RawClockEvent, ReportWindow, ScheduleProfile};

pub use memory::InMemorySource;

/// Supplies raw clock events.
pub trait ClockEventSource {
    /// Lists the events of `employee_ids` that may fall inside `window`.
    ///
    /// Returning events outside the window or for other employees is
    /// allowed; the engine filters them.
    fn list_events(
        &self,
        employee_ids: &[String],
        window: &ReportWindow,
    ) -> EngineResult<Vec<RawClockEvent>>;
}

/// Supplies schedule profiles.
pub trait ScheduleProfileSource {
    /// Returns the profiles known for `employee_ids`, keyed by employee id.
    /// Employees without a profile are simply absent from the map.
    fn get_schedule_profiles(
        &self,
        employee_ids: &[String],
    ) -> EngineResult<HashMap<String, ScheduleProfile>>;
}

/// Supplies scheduled start times.
pub trait ScheduledStartSource {
    /// Returns the scheduled entry instant of an employee on a date, if any.
    fn get_scheduled_start(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DateTime<FixedOffset>>>;
}

/// The three sources a report reads from.
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    /// Clock events.
    pub events: &'a dyn ClockEventSource,
    /// Schedule profiles.
    pub profiles: &'a dyn ScheduleProfileSource,
    /// Scheduled starts.
    pub scheduled_starts: &'a dyn ScheduledStartSource,
}

impl<'a> Sources<'a> {
    /// Reads everything from one value implementing all three sources.
    pub fn from_single<S>(source: &'a S) -> Self
    where
        S: ClockEventSource + ScheduleProfileSource + ScheduledStartSource,
    {
        Self {
            events: source,
            profiles: source,
            scheduled_starts: source,
        }
    }
}
