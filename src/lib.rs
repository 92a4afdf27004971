//! Daily attendance balance engine
//!
//! This crate turns raw clock events (entries, exits, pause starts and pause
//! ends) into per-employee, per-day balances of worked versus expected
//! minutes, and aggregates them into summaries, per-branch rollups,
//! punctuality classifications and a sortable projection.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod sources;
