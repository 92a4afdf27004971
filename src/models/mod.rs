//! Core data models for the balance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod day_balance;
mod employee;
mod report_window;
mod schedule;

pub use clock_event::{ClockEvent, ClockEventKind, RawClockEvent};
pub use day_balance::{BalanceDiagnostic, DayBalance, DayState};
pub use employee::{Employee, UNASSIGNED_BRANCH};
pub use report_window::ReportWindow;
pub use schedule::{ScheduleProfile, ScheduleType, ScheduledStart};
