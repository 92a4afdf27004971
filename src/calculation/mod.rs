//! Per-day calculation logic for the balance engine.
//!
//! This module turns the clock events of one employee-day into a
//! [`DayBalance`](crate::models::DayBalance): day partitioning in the
//! organization timezone, event reduction, expected-duration calculation,
//! state classification and balance construction.

mod day_balance;
mod day_partition;
mod event_reducer;
mod expected_duration;
mod state_classifier;

pub use day_balance::build_day_balance;
pub use day_partition::{local_date, partition_by_day};
pub use event_reducer::{DayFacts, reduce, round_minutes};
pub use expected_duration::{
    DEFAULT_STANDARD_DAILY_MINUTES, DEFAULT_WORKING_DAYS_PER_WEEK, expected_minutes,
};
pub use state_classifier::{classify, deviation_minutes};
