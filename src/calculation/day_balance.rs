//! Day balance construction.
//!
//! This module combines reduced facts, expected minutes and the day state
//! into a [`DayBalance`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BalanceDiagnostic, DayBalance};

use super::{DayFacts, classify, deviation_minutes};

/// Builds the balance for one employee-day.
///
/// `diagnostics` carries notes gathered upstream (such as a missing
/// schedule profile); an `exit_before_entry` note is added when the reduced
/// span is negative.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::{build_day_balance, reduce};
/// use balance_engine::models::{ClockEvent, ClockEventKind, DayState};
/// use chrono::{DateTime, NaiveDate};
/// use rust_decimal::Decimal;
///
/// let at = |kind, ts: &str| ClockEvent {
///     employee_id: "emp_001".to_string(),
///     kind,
///     timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
/// };
/// let facts = reduce(&[
///     at(ClockEventKind::Entry, "2026-03-02T09:00:00+01:00"),
///     at(ClockEventKind::Exit, "2026-03-02T15:40:00+01:00"),
/// ]);
/// let balance = build_day_balance(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     facts,
///     Decimal::new(480, 0),
///     vec![],
/// );
/// assert_eq!(balance.state, DayState::Complete);
/// assert_eq!(balance.deviation_minutes, Some(Decimal::new(-80, 0)));
/// ```
pub fn build_day_balance(
    employee_id: impl Into<String>,
    date: NaiveDate,
    facts: DayFacts,
    expected_minutes: Decimal,
    mut diagnostics: Vec<BalanceDiagnostic>,
) -> DayBalance {
    let state = classify(&facts);
    let deviation = deviation_minutes(state, facts.worked_minutes, expected_minutes);

    if facts.worked_minutes.is_some_and(|worked| worked < 0) {
        diagnostics.push(BalanceDiagnostic::ExitBeforeEntry);
    }

    DayBalance {
        employee_id: employee_id.into(),
        date,
        entry_time: facts.entry_time,
        exit_time: facts.exit_time,
        pause_minutes: facts.pause_minutes,
        worked_minutes: facts.worked_minutes,
        expected_minutes,
        deviation_minutes: deviation,
        state,
        diagnostics,
    }
}
