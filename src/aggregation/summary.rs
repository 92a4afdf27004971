//! Report-wide summary statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayBalance, DayState};

use super::{BalanceRow, Punctuality};

/// Number of balances in each state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Complete days.
    pub complete: usize,
    /// Days with an entry but no exit.
    pub missing_exit: usize,
    /// Days with exits only.
    pub missing_entry: usize,
    /// Days with pause activity only.
    pub pause_only: usize,
    /// Days without events, degraded days included.
    pub absent: usize,
}

impl StateCounts {
    /// Counts one balance in the given state.
    pub fn record(&mut self, state: DayState) {
        match state {
            DayState::Complete => self.complete += 1,
            DayState::MissingExit => self.missing_exit += 1,
            DayState::MissingEntry => self.missing_entry += 1,
            DayState::PauseOnly => self.pause_only += 1,
            DayState::Absent => self.absent += 1,
        }
    }

    /// Returns the count for a state.
    pub fn get(&self, state: DayState) -> usize {
        match state {
            DayState::Complete => self.complete,
            DayState::MissingExit => self.missing_exit,
            DayState::MissingEntry => self.missing_entry,
            DayState::PauseOnly => self.pause_only,
            DayState::Absent => self.absent,
        }
    }
}

/// Number of balances per punctuality outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctualityCounts {
    /// On time.
    pub on_time: usize,
    /// Minor late arrivals.
    pub late_minor: usize,
    /// Major late arrivals.
    pub late_major: usize,
    /// No scheduled start or no entry.
    pub unclassified: usize,
}

impl PunctualityCounts {
    /// Counts one punctuality outcome.
    pub fn record(&mut self, punctuality: Option<Punctuality>) {
        match punctuality {
            Some(Punctuality::OnTime) => self.on_time += 1,
            Some(Punctuality::LateMinor { .. }) => self.late_minor += 1,
            Some(Punctuality::LateMajor { .. }) => self.late_major += 1,
            None => self.unclassified += 1,
        }
    }
}

/// Worked time and deviation accumulated over complete balances.
#[derive(Debug, Clone, Default)]
pub(crate) struct CompleteTotals {
    complete: usize,
    worked_sum: i64,
    deviation_sum: Decimal,
}

impl CompleteTotals {
    pub(crate) fn record(&mut self, balance: &DayBalance) {
        if balance.state != DayState::Complete {
            return;
        }
        self.complete += 1;
        self.worked_sum += balance.worked_minutes.unwrap_or_default();
        self.deviation_sum += balance.deviation_minutes.unwrap_or_default();
    }

    pub(crate) fn complete(&self) -> usize {
        self.complete
    }

    /// Mean worked minutes, undefined when nothing was complete.
    pub(crate) fn average_worked_minutes(&self) -> Option<Decimal> {
        (self.complete > 0)
            .then(|| Decimal::from(self.worked_sum) / Decimal::from(self.complete as u64))
    }

    pub(crate) fn deviation_sum(&self) -> Decimal {
        self.deviation_sum
    }
}

/// Summary statistics for a batch of balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Number of balances.
    pub total: usize,
    /// Balances per state.
    pub states: StateCounts,
    /// Balances degraded by unparseable events.
    pub degraded: usize,
    /// Mean worked minutes over complete balances.
    pub average_worked_minutes: Option<Decimal>,
    /// Signed sum of deviations over complete balances; positive is overtime.
    pub total_deviation_minutes: Decimal,
    /// Balances per punctuality outcome.
    pub punctuality: PunctualityCounts,
}

/// Summarizes a batch of report rows.
///
/// # Example
///
/// ```
/// use balance_engine::aggregation::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.total, 0);
/// assert!(summary.average_worked_minutes.is_none());
/// ```
pub fn summarize(rows: &[BalanceRow]) -> BalanceSummary {
    let mut states = StateCounts::default();
    let mut punctuality = PunctualityCounts::default();
    let mut totals = CompleteTotals::default();
    let mut degraded = 0;

    for row in rows {
        states.record(row.balance.state);
        punctuality.record(row.punctuality);
        totals.record(&row.balance);
        if row.balance.is_degraded() {
            degraded += 1;
        }
    }

    BalanceSummary {
        total: rows.len(),
        states,
        degraded,
        average_worked_minutes: totals.average_worked_minutes(),
        total_deviation_minutes: totals.deviation_sum(),
        punctuality,
    }
}
