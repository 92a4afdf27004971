//! Report window model.
//!
//! This module contains the [`ReportWindow`] type, the inclusive range of
//! calendar dates a balance report covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates in the organization timezone.
///
/// # Example
///
/// ```
/// use balance_engine::models::ReportWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportWindow {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
/// };
///
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()));
/// assert_eq!(window.days().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// The first date of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the window (inclusive).
    pub end_date: NaiveDate,
}

impl ReportWindow {
    /// A window covering a single date.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Checks that the window does not end before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidReportWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Number of calendar days in the window, counting both ends.
    ///
    /// An inverted window has a count of zero or less.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks that the window covers at most `max_days` days.
    pub fn validate_length(&self, max_days: u32) -> EngineResult<()> {
        let days = self.day_count();
        if days > i64::from(max_days) {
            return Err(EngineError::ReportWindowTooLong { days, max_days });
        }
        Ok(())
    }

    /// Checks if a given date falls within this window.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every date of the window in ascending order.
    ///
    /// An inverted window yields no dates.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}
