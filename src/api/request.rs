//! Request types for the balance engine API.
//!
//! This module defines the JSON request structure for the `/balances` endpoint.

use serde::{Deserialize, Serialize};

use crate::aggregation::SortSpec;
use crate::models::{Employee, RawClockEvent, ReportWindow, ScheduleProfile, ScheduledStart};
use crate::sources::InMemorySource;

use super::response::ApiError;

/// Request body for the `/balances` endpoint.
///
/// Carries the employee directory, every input the sources would supply and
/// the requested row order.
///
/// # Example
///
/// ```
/// use balance_engine::api::BalanceRequest;
///
/// let json = r#"{
///     "window": {"start_date": "2026-03-02", "end_date": "2026-03-02"},
///     "employees": [{"id": "emp_001", "first_name": "Ada", "surname": "Lovelace"}],
///     "events": [{"employee_id": "emp_001", "type": "entry", "timestamp": "2026-03-02T09:00:00+01:00"}]
/// }"#;
/// let request: BalanceRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.events.len(), 1);
/// assert!(request.sort.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The dates to report on.
    pub window: ReportWindow,
    /// The employees to report on.
    pub employees: Vec<Employee>,
    /// Raw clock events.
    #[serde(default)]
    pub events: Vec<RawClockEvent>,
    /// Schedule profiles; employees without one get the default daily profile.
    #[serde(default)]
    pub schedule_profiles: Vec<ScheduleProfile>,
    /// Scheduled start times used for punctuality.
    #[serde(default)]
    pub scheduled_starts: Vec<ScheduledStart>,
    /// Row order, highest priority first.
    #[serde(default)]
    pub sort: Vec<SortSpec>,
}

impl BalanceRequest {
    /// Checks the parts of the request serde cannot.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(position) = self.employees.iter().position(|e| e.id.trim().is_empty()) {
            return Err(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("employees[{}].id must not be empty", position),
                "Every employee needs a non-empty id",
            ));
        }
        Ok(())
    }

    /// Splits the request into the report parameters and a source over its
    /// inputs.
    pub fn into_parts(self) -> (ReportWindow, Vec<Employee>, Vec<SortSpec>, InMemorySource) {
        let source = InMemorySource::new(self.events, self.schedule_profiles, self.scheduled_starts);
        (self.window, self.employees, self.sort, source)
    }
}
