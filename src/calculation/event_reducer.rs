//! Event reduction for a single employee-day.
//!
//! This module folds an unordered list of clock events into the facts of one
//! day: first entry, last exit, closed pause minutes and the entry-to-exit
//! span. The fold owns all of its state, so reductions of different
//! employee-days never interact.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, ClockEventKind};

/// The facts reduced from one employee-day of clock events.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::DayFacts;
///
/// let facts = DayFacts::default();
/// assert_eq!(facts.event_count, 0);
/// assert!(facts.worked_minutes.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFacts {
    /// Timestamp of the first entry.
    pub entry_time: Option<DateTime<FixedOffset>>,
    /// Timestamp of the last exit.
    pub exit_time: Option<DateTime<FixedOffset>>,
    /// Sum of closed pause intervals, in whole minutes.
    pub pause_minutes: i64,
    /// Entry-to-exit span in whole minutes; pauses are not deducted.
    pub worked_minutes: Option<i64>,
    /// Number of events reduced.
    pub event_count: usize,
    /// Whether any pause start or pause end was seen.
    pub pause_events_seen: bool,
}

/// Rounds a duration to the nearest whole minute, halves away from zero.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::round_minutes;
/// use chrono::Duration;
///
/// assert_eq!(round_minutes(Duration::seconds(89)), 1);
/// assert_eq!(round_minutes(Duration::seconds(90)), 2);
/// assert_eq!(round_minutes(Duration::seconds(-90)), -2);
/// ```
pub fn round_minutes(span: Duration) -> i64 {
    const MINUTE_MS: i64 = 60_000;
    let millis = span.num_milliseconds();
    let whole = millis / MINUTE_MS;
    let remainder = millis % MINUTE_MS;
    if remainder >= MINUTE_MS / 2 {
        whole + 1
    } else if remainder <= -MINUTE_MS / 2 {
        whole - 1
    } else {
        whole
    }
}

/// Fold state for one reduction.
#[derive(Default)]
struct Reduction {
    facts: DayFacts,
    open_pause: Option<DateTime<FixedOffset>>,
}

impl Reduction {
    fn apply(mut self, event: &ClockEvent) -> Self {
        self.facts.event_count += 1;
        self.facts.pause_events_seen |= event.kind.is_pause();
        match event.kind {
            ClockEventKind::Entry => {
                if self.facts.entry_time.is_none() {
                    self.facts.entry_time = Some(event.timestamp);
                }
            }
            ClockEventKind::Exit => {
                self.facts.exit_time = Some(event.timestamp);
            }
            ClockEventKind::PauseStart => {
                // An earlier unmatched start is dropped without contributing minutes.
                self.open_pause = Some(event.timestamp);
            }
            ClockEventKind::PauseEnd => {
                if let Some(start) = self.open_pause.take() {
                    self.facts.pause_minutes += round_minutes(event.timestamp - start).max(0);
                }
            }
        }
        self
    }

    fn finish(mut self) -> DayFacts {
        if let (Some(entry), Some(exit)) = (self.facts.entry_time, self.facts.exit_time) {
            self.facts.worked_minutes = Some(round_minutes(exit - entry));
        }
        self.facts
    }
}

/// Reduces one employee-day of clock events into [`DayFacts`].
///
/// The events are sorted by timestamp, ties broken entry, pause start,
/// pause end, exit. Then:
///
/// - the first entry is kept, later entries are ignored;
/// - the last exit is kept, each exit overwrites the previous one;
/// - a pause start opens a pause, replacing any pause already open;
/// - a pause end closes the open pause and adds its rounded length, or is
///   ignored when no pause is open;
/// - worked minutes are the rounded entry-to-exit span, defined only when
///   both exist, and are not reduced by pause minutes.
///
/// The caller is responsible for passing events of a single employee and date.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::reduce;
/// use balance_engine::models::{ClockEvent, ClockEventKind};
/// use chrono::DateTime;
///
/// let at = |kind, ts: &str| ClockEvent {
///     employee_id: "emp_001".to_string(),
///     kind,
///     timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
/// };
/// let events = vec![
///     at(ClockEventKind::Exit, "2026-03-02T18:05:00+01:00"),
///     at(ClockEventKind::PauseEnd, "2026-03-02T12:30:00+01:00"),
///     at(ClockEventKind::Entry, "2026-03-02T09:00:00+01:00"),
///     at(ClockEventKind::PauseStart, "2026-03-02T12:00:00+01:00"),
/// ];
///
/// let facts = reduce(&events);
/// assert_eq!(facts.worked_minutes, Some(545));
/// assert_eq!(facts.pause_minutes, 30);
/// ```
pub fn reduce(events: &[ClockEvent]) -> DayFacts {
    let mut ordered: Vec<&ClockEvent> = events.iter().collect();
    ordered.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.kind.cmp(&b.kind)));

    ordered
        .into_iter()
        .fold(Reduction::default(), Reduction::apply)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(kind: ClockEventKind, time: &str) -> ClockEvent {
        ClockEvent {
            employee_id: "emp_001".to_string(),
            kind,
            timestamp: DateTime::parse_from_rfc3339(&format!("2026-03-02T{}+01:00", time))
                .unwrap(),
        }
    }

    fn ts(time: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2026-03-02T{}+01:00", time)).unwrap()
    }

    // ==========================================================================
    // ER-001: single entry and exit, no pauses
    // ==========================================================================
    #[test]
    fn test_er_001_entry_and_exit() {
        let facts = reduce(&[
            at(ClockEventKind::Entry, "09:00:00"),
            at(ClockEventKind::Exit, "17:00:00"),
        ]);

        assert_eq!(facts.entry_time, Some(ts("09:00:00")));
        assert_eq!(facts.exit_time, Some(ts("17:00:00")));
        assert_eq!(facts.worked_minutes, Some(480));
        assert_eq!(facts.pause_minutes, 0);
        assert_eq!(facts.event_count, 2);
        assert!(!facts.pause_events_seen);
    }

    // ==========================================================================
    // ER-002: only an entry leaves worked minutes undefined
    // ==========================================================================
    #[test]
    fn test_er_002_entry_only() {
        let facts = reduce(&[at(ClockEventKind::Entry, "09:00:00")]);
        assert_eq!(facts.entry_time, Some(ts("09:00:00")));
        assert!(facts.exit_time.is_none());
        assert!(facts.worked_minutes.is_none());
    }

    // ==========================================================================
    // ER-003: no events
    // ==========================================================================
    #[test]
    fn test_er_003_no_events() {
        assert_eq!(reduce(&[]), DayFacts::default());
    }

    // ==========================================================================
    // ER-004: a closed pause contributes its length
    // ==========================================================================
    #[test]
    fn test_er_004_closed_pause() {
        let facts = reduce(&[
            at(ClockEventKind::PauseStart, "12:00:00"),
            at(ClockEventKind::PauseEnd, "12:30:00"),
        ]);
        assert_eq!(facts.pause_minutes, 30);
        assert!(facts.pause_events_seen);
    }

    // ==========================================================================
    // ER-005: a lone pause end contributes nothing
    // ==========================================================================
    #[test]
    fn test_er_005_lone_pause_end() {
        let facts = reduce(&[at(ClockEventKind::PauseEnd, "12:30:00")]);
        assert_eq!(facts.pause_minutes, 0);
        assert!(facts.pause_events_seen);
    }

    // ==========================================================================
    // ER-006: last pause start wins
    // ==========================================================================
    #[test]
    fn test_er_006_last_pause_start_wins() {
        let facts = reduce(&[
            at(ClockEventKind::PauseStart, "10:00:00"),
            at(ClockEventKind::PauseStart, "10:05:00"),
            at(ClockEventKind::PauseEnd, "10:20:00"),
        ]);
        assert_eq!(facts.pause_minutes, 15);
    }

    // ==========================================================================
    // ER-007: worked minutes are not reduced by pauses
    // ==========================================================================
    #[test]
    fn test_er_007_worked_time_ignores_pauses() {
        let facts = reduce(&[
            at(ClockEventKind::Entry, "09:00:00"),
            at(ClockEventKind::PauseStart, "12:00:00"),
            at(ClockEventKind::PauseEnd, "12:30:00"),
            at(ClockEventKind::Exit, "18:05:00"),
        ]);
        assert_eq!(facts.worked_minutes, Some(545));
        assert_eq!(facts.pause_minutes, 30);
    }

    // ==========================================================================
    // ER-008: first entry and last exit win
    // ==========================================================================
    #[test]
    fn test_er_008_first_entry_last_exit() {
        let facts = reduce(&[
            at(ClockEventKind::Exit, "13:00:00"),
            at(ClockEventKind::Entry, "14:00:00"),
            at(ClockEventKind::Entry, "08:00:00"),
            at(ClockEventKind::Exit, "17:00:00"),
        ]);
        assert_eq!(facts.entry_time, Some(ts("08:00:00")));
        assert_eq!(facts.exit_time, Some(ts("17:00:00")));
        assert_eq!(facts.worked_minutes, Some(540));
    }

    // ==========================================================================
    // ER-009: multiple closed pauses accumulate
    // ==========================================================================
    #[test]
    fn test_er_009_multiple_pauses_accumulate() {
        let facts = reduce(&[
            at(ClockEventKind::PauseStart, "10:00:00"),
            at(ClockEventKind::PauseEnd, "10:15:00"),
            at(ClockEventKind::PauseStart, "13:00:00"),
            at(ClockEventKind::PauseEnd, "13:45:00"),
            at(ClockEventKind::PauseEnd, "14:00:00"),
        ]);
        assert_eq!(facts.pause_minutes, 60);
    }

    // ==========================================================================
    // ER-010: an unclosed pause contributes nothing
    // ==========================================================================
    #[test]
    fn test_er_010_unclosed_pause() {
        let facts = reduce(&[
            at(ClockEventKind::Entry, "09:00:00"),
            at(ClockEventKind::PauseStart, "12:00:00"),
        ]);
        assert_eq!(facts.pause_minutes, 0);
        assert!(facts.pause_events_seen);
    }

    // ==========================================================================
    // ER-011: same-timestamp ties follow entry < pause_start < pause_end < exit
    // ==========================================================================
    #[test]
    fn test_er_011_tie_break_order() {
        // pause_end listed first but sorts after pause_start, closing a zero-length pause
        let facts = reduce(&[
            at(ClockEventKind::Exit, "12:00:00"),
            at(ClockEventKind::PauseEnd, "12:00:00"),
            at(ClockEventKind::PauseStart, "12:00:00"),
            at(ClockEventKind::Entry, "12:00:00"),
        ]);
        assert_eq!(facts.entry_time, Some(ts("12:00:00")));
        assert_eq!(facts.worked_minutes, Some(0));
        assert_eq!(facts.pause_minutes, 0);
    }

    // ==========================================================================
    // ER-012: sub-minute spans round to the nearest minute
    // ==========================================================================
    #[test]
    fn test_er_012_rounding_to_nearest_minute() {
        let facts = reduce(&[
            at(ClockEventKind::Entry, "09:00:00"),
            at(ClockEventKind::PauseStart, "12:00:00"),
            at(ClockEventKind::PauseEnd, "12:10:29"),
            at(ClockEventKind::Exit, "17:00:30"),
        ]);
        assert_eq!(facts.pause_minutes, 10);
        assert_eq!(facts.worked_minutes, Some(481));
    }

    // ==========================================================================
    // ER-013: an exit before the entry yields a negative span
    // ==========================================================================
    #[test]
    fn test_er_013_exit_before_entry() {
        let facts = reduce(&[
            at(ClockEventKind::Exit, "08:00:00"),
            at(ClockEventKind::Entry, "09:00:00"),
        ]);
        assert_eq!(facts.worked_minutes, Some(-60));
    }

    #[test]
    fn test_round_minutes_boundaries() {
        assert_eq!(round_minutes(Duration::zero()), 0);
        assert_eq!(round_minutes(Duration::seconds(29)), 0);
        assert_eq!(round_minutes(Duration::seconds(30)), 1);
        assert_eq!(round_minutes(Duration::milliseconds(29_999)), 0);
        assert_eq!(round_minutes(Duration::seconds(-29)), 0);
        assert_eq!(round_minutes(Duration::seconds(-30)), -1);
        assert_eq!(round_minutes(Duration::minutes(545)), 545);
    }

    fn kind_strategy() -> impl Strategy<Value = ClockEventKind> {
        prop_oneof![
            Just(ClockEventKind::Entry),
            Just(ClockEventKind::PauseStart),
            Just(ClockEventKind::PauseEnd),
            Just(ClockEventKind::Exit),
        ]
    }

    fn events_strategy() -> impl Strategy<Value = Vec<ClockEvent>> {
        prop::collection::vec((kind_strategy(), 0i64..86_400), 0..24).prop_map(|items| {
            let midnight = ts("00:00:00");
            items
                .into_iter()
                .map(|(kind, secs)| ClockEvent {
                    employee_id: "emp_001".to_string(),
                    kind,
                    timestamp: midnight + Duration::seconds(secs),
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_reduce_is_idempotent(events in events_strategy()) {
            prop_assert_eq!(reduce(&events), reduce(&events));
        }

        #[test]
        fn prop_reduce_ignores_input_order(events in events_strategy(), shift in 0usize..24) {
            let mut reversed = events.clone();
            reversed.reverse();
            let mut rotated = events.clone();
            if !rotated.is_empty() {
                let by = shift % rotated.len();
                rotated.rotate_left(by);
            }
            let expected = reduce(&events);
            prop_assert_eq!(&reduce(&reversed), &expected);
            prop_assert_eq!(&reduce(&rotated), &expected);
        }

        #[test]
        fn prop_pause_minutes_never_negative(events in events_strategy()) {
            let facts = reduce(&events);
            prop_assert!(facts.pause_minutes >= 0);
            prop_assert_eq!(facts.event_count, events.len());
            prop_assert_eq!(
                facts.worked_minutes.is_some(),
                facts.entry_time.is_some() && facts.exit_time.is_some()
            );
        }
    }
}
