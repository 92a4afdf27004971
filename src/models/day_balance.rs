//! Day balance models.
//!
//! This module contains the [`DayBalance`] type, the reduced and classified
//! summary of one employee's clock events for one calendar day, along with
//! its [`DayState`] and [`BalanceDiagnostic`] types.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of an employee-day.
///
/// # Example
///
/// ```
/// use balance_engine::models::DayState;
///
/// assert_eq!(DayState::MissingExit.to_string(), "missing_exit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    /// Both an entry and an exit were recorded.
    Complete,
    /// An entry was recorded but no exit.
    MissingExit,
    /// Residual state: events were recorded, but no entry and no pauses.
    MissingEntry,
    /// Only pause activity was recorded.
    PauseOnly,
    /// Nothing was recorded.
    Absent,
}

impl DayState {
    /// Every state, in declaration order.
    pub const ALL: [DayState; 5] = [
        DayState::Complete,
        DayState::MissingExit,
        DayState::MissingEntry,
        DayState::PauseOnly,
        DayState::Absent,
    ];

    /// Returns the wire name of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            DayState::Complete => "complete",
            DayState::MissingExit => "missing_exit",
            DayState::MissingEntry => "missing_entry",
            DayState::PauseOnly => "pause_only",
            DayState::Absent => "absent",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note attached to a day balance about how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum BalanceDiagnostic {
    /// An event for this day could not be parsed; the day is degraded.
    MalformedEvent {
        /// What was wrong with the event.
        message: String,
    },
    /// The employee has no schedule profile; the default daily profile was used.
    MissingScheduleProfile,
    /// The last exit precedes the first entry; worked minutes are negative.
    ExitBeforeEntry,
}

/// The balance of one employee for one calendar day.
///
/// Invariants: `deviation_minutes` is `Some` exactly when `state` is
/// [`DayState::Complete`], and `pause_minutes` is never negative.
///
/// # Example
///
/// ```
/// use balance_engine::models::{DayBalance, DayState};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let balance = DayBalance {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     entry_time: None,
///     exit_time: None,
///     pause_minutes: 0,
///     worked_minutes: None,
///     expected_minutes: Decimal::new(480, 0),
///     deviation_minutes: None,
///     state: DayState::Absent,
///     diagnostics: vec![],
/// };
/// assert!(!balance.is_degraded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBalance {
    /// The employee.
    pub employee_id: String,
    /// The calendar date in the organization timezone.
    pub date: NaiveDate,
    /// First entry of the day.
    pub entry_time: Option<DateTime<FixedOffset>>,
    /// Last exit of the day.
    pub exit_time: Option<DateTime<FixedOffset>>,
    /// Total minutes of closed pauses.
    pub pause_minutes: i64,
    /// Entry-to-exit span in minutes, pauses not deducted.
    pub worked_minutes: Option<i64>,
    /// Minutes the schedule profile expects for the day.
    pub expected_minutes: Decimal,
    /// Worked minus expected minutes; only for complete days.
    pub deviation_minutes: Option<Decimal>,
    /// The day classification.
    pub state: DayState,
    /// Notes about how the balance was produced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<BalanceDiagnostic>,
}

impl DayBalance {
    /// Builds the balance reported for a day whose events could not be parsed.
    ///
    /// Every fact is undefined and the state is [`DayState::Absent`].
    pub fn degraded(
        employee_id: impl Into<String>,
        date: NaiveDate,
        expected_minutes: Decimal,
        message: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            entry_time: None,
            exit_time: None,
            pause_minutes: 0,
            worked_minutes: None,
            expected_minutes,
            deviation_minutes: None,
            state: DayState::Absent,
            diagnostics: vec![BalanceDiagnostic::MalformedEvent {
                message: message.into(),
            }],
        }
    }

    /// Returns true if an unparseable event made this balance unreliable.
    pub fn is_degraded(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, BalanceDiagnostic::MalformedEvent { .. }))
    }

    /// Returns true if any event was recorded for the day.
    pub fn is_present(&self) -> bool {
        self.state != DayState::Absent
    }
}
