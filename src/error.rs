//! Error types for the balance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a balance report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the balance engine.
///
/// Only some variants ever leave a report run: `MissingScheduleProfile` and
/// `MalformedEvent` are absorbed into per-day diagnostics, while
/// `UpstreamFetchFailure` aborts the whole report.
///
/// # Example
///
/// ```
/// use balance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested report window ends before it starts.
    #[error("Invalid report window: {start} is after {end}")]
    InvalidReportWindow {
        /// First date of the window.
        start: NaiveDate,
        /// Last date of the window.
        end: NaiveDate,
    },

    /// The requested report window covers more days than the configured limit.
    #[error("Report window spans {days} days, more than the limit of {max_days}")]
    ReportWindowTooLong {
        /// Number of calendar days in the requested window.
        days: i64,
        /// The configured maximum.
        max_days: u32,
    },

    /// An employee has no schedule profile.
    #[error("No schedule profile for employee '{employee_id}'")]
    MissingScheduleProfile {
        /// The employee without a profile.
        employee_id: String,
    },

    /// A clock event could not be parsed.
    #[error("Malformed clock event for employee '{employee_id}': {message}")]
    MalformedEvent {
        /// The employee the event belongs to.
        employee_id: String,
        /// A description of what made the event unusable.
        message: String,
    },

    /// An external data source failed entirely.
    #[error("Upstream fetch from {source_name} failed: {message}")]
    UpstreamFetchFailure {
        /// Name of the failing source (e.g. "clock_events").
        source_name: String,
        /// The message reported by the source.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
