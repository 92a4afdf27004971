//! Day state classification.
//!
//! This module assigns a [`DayState`] to reduced day facts and derives the
//! deviation from expected time for complete days.

use rust_decimal::Decimal;

use crate::models::DayState;

use super::DayFacts;

/// Classifies reduced day facts.
///
/// Rules are evaluated in order, first match wins:
///
/// 1. entry and exit present: [`DayState::Complete`]
/// 2. entry present, exit absent: [`DayState::MissingExit`]
/// 3. no entry, but pause minutes or pause events: [`DayState::PauseOnly`]
/// 4. no events at all: [`DayState::Absent`]
/// 5. anything else: [`DayState::MissingEntry`]
///
/// Rule 5 is only reached by days holding exits and nothing else.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::{classify, DayFacts};
/// use balance_engine::models::DayState;
///
/// assert_eq!(classify(&DayFacts::default()), DayState::Absent);
/// ```
pub fn classify(facts: &DayFacts) -> DayState {
    match (facts.entry_time, facts.exit_time) {
        (Some(_), Some(_)) => DayState::Complete,
        (Some(_), None) => DayState::MissingExit,
        (None, _) if facts.pause_minutes > 0 || facts.pause_events_seen => DayState::PauseOnly,
        (None, _) if facts.event_count == 0 => DayState::Absent,
        (None, _) => DayState::MissingEntry,
    }
}

/// Computes `worked - expected` for complete days.
///
/// Returns `None` for every other state, and for a complete day without
/// worked minutes, which the reducer never produces.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::deviation_minutes;
/// use balance_engine::models::DayState;
/// use rust_decimal::Decimal;
///
/// let deviation = deviation_minutes(DayState::Complete, Some(545), Decimal::new(480, 0));
/// assert_eq!(deviation, Some(Decimal::new(65, 0)));
/// assert_eq!(deviation_minutes(DayState::MissingExit, None, Decimal::new(480, 0)), None);
/// ```
pub fn deviation_minutes(
    state: DayState,
    worked_minutes: Option<i64>,
    expected_minutes: Decimal,
) -> Option<Decimal> {
    match state {
        DayState::Complete => worked_minutes.map(|worked| Decimal::from(worked) - expected_minutes),
        DayState::MissingExit | DayState::MissingEntry | DayState::PauseOnly | DayState::Absent => {
            None
        }
    }
}
