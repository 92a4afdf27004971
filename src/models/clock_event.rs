//! Clock event models.
//!
//! This module defines the validated [`ClockEvent`] used by the reducer and
//! the [`RawClockEvent`] wire shape delivered by the event source.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The action recorded by a clock event.
///
/// The declaration order is the tie-break order used when two events share a
/// timestamp: entry, pause start, pause end, exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// Clock-in.
    Entry,
    /// Start of a pause.
    PauseStart,
    /// End of a pause.
    PauseEnd,
    /// Clock-out.
    Exit,
}

impl ClockEventKind {
    /// Returns true for pause start and pause end events.
    pub fn is_pause(self) -> bool {
        matches!(self, ClockEventKind::PauseStart | ClockEventKind::PauseEnd)
    }

    /// Returns the wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ClockEventKind::Entry => "entry",
            ClockEventKind::PauseStart => "pause_start",
            ClockEventKind::PauseEnd => "pause_end",
            ClockEventKind::Exit => "exit",
        }
    }
}

impl fmt::Display for ClockEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClockEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(ClockEventKind::Entry),
            "pause_start" => Ok(ClockEventKind::PauseStart),
            "pause_end" => Ok(ClockEventKind::PauseEnd),
            "exit" => Ok(ClockEventKind::Exit),
            other => Err(format!("unknown event type '{}'", other)),
        }
    }
}

/// A validated, timezone-aware clock event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// The employee who clocked.
    pub employee_id: String,
    /// What was clocked.
    pub kind: ClockEventKind,
    /// When it was clocked.
    pub timestamp: DateTime<FixedOffset>,
}

/// A clock event as delivered by the event source, before validation.
///
/// # Example
///
/// ```
/// use balance_engine::models::{ClockEventKind, RawClockEvent};
///
/// let raw = RawClockEvent {
///     employee_id: "emp_001".to_string(),
///     event_type: "entry".to_string(),
///     timestamp: "2026-03-02T09:00:00+01:00".to_string(),
/// };
/// let event = raw.parse().unwrap();
/// assert_eq!(event.kind, ClockEventKind::Entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClockEvent {
    /// The employee who clocked.
    pub employee_id: String,
    /// The event type as sent by the source.
    #[serde(rename = "type")]
    pub event_type: String,
    /// RFC 3339 timestamp as sent by the source.
    pub timestamp: String,
}

impl RawClockEvent {
    /// Parses the timestamp.
    pub fn parse_timestamp(&self) -> EngineResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim()).map_err(|e| {
            EngineError::MalformedEvent {
                employee_id: self.employee_id.clone(),
                message: format!("invalid timestamp '{}': {}", self.timestamp, e),
            }
        })
    }

    /// Parses the event type.
    pub fn parse_kind(&self) -> EngineResult<ClockEventKind> {
        self.event_type
            .parse()
            .map_err(|message| EngineError::MalformedEvent {
                employee_id: self.employee_id.clone(),
                message,
            })
    }

    /// Validates the raw event into a [`ClockEvent`].
    pub fn parse(&self) -> EngineResult<ClockEvent> {
        Ok(ClockEvent {
            employee_id: self.employee_id.clone(),
            timestamp: self.parse_timestamp()?,
            kind: self.parse_kind()?,
        })
    }
}
