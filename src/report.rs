//! Balance report generation.
//!
//! [`generate_report`] runs the whole pipeline for one request: it fetches
//! inputs from the [`Sources`], validates and buckets events by local date,
//! reduces and classifies every employee-day in the window, then summarizes,
//! rolls up and sorts the resulting rows.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregation::{
    BalanceRow, BalanceSummary, BranchRollup, SortSpec, classify_punctuality, rollup_by_branch,
    sort_rows, summarize,
};
use crate::calculation::{build_day_balance, expected_minutes, local_date, partition_by_day, reduce};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BalanceDiagnostic, ClockEvent, DayBalance, Employee, RawClockEvent, ReportWindow,
    ScheduleProfile,
};
use crate::sources::Sources;

/// The engine version stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A complete balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Unique identifier for this report, also used as its log correlation id.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced it.
    pub engine_version: String,
    /// The covered dates.
    pub window: ReportWindow,
    /// One row per employee-day, sorted as requested.
    pub rows: Vec<BalanceRow>,
    /// Report-wide statistics.
    pub summary: BalanceSummary,
    /// Per-branch statistics, in branch name order.
    pub branches: Vec<BranchRollup>,
    /// Time spent building the report, in microseconds.
    pub duration_us: u64,
}

/// Parsed events of one employee, with whatever could not be parsed.
#[derive(Default)]
struct EmployeeEvents {
    events: Vec<ClockEvent>,
    /// First problem per date, for events whose date is known.
    malformed_days: BTreeMap<NaiveDate, String>,
    /// First problem with an event that cannot be dated at all.
    undated: Option<String>,
}

/// Parses raw events and buckets the failures by employee-day.
///
/// Events for employees outside `directory` or dated outside the window are
/// dropped. Kept timestamps are shifted into the organization offset.
fn parse_events(
    raw_events: Vec<RawClockEvent>,
    directory: &HashSet<&str>,
    config: &EngineConfig,
    window: &ReportWindow,
) -> HashMap<String, EmployeeEvents> {
    let mut parsed: HashMap<String, EmployeeEvents> = HashMap::new();

    for raw in raw_events {
        if !directory.contains(raw.employee_id.as_str()) {
            debug!(employee_id = %raw.employee_id, "Ignoring event for unknown employee");
            continue;
        }

        let timestamp = match raw.parse_timestamp() {
            Ok(timestamp) => timestamp,
            Err(err) => {
                parsed
                    .entry(raw.employee_id)
                    .or_default()
                    .undated
                    .get_or_insert_with(|| err.to_string());
                continue;
            }
        };

        let date = local_date(timestamp, config.timezone());
        if !window.contains_date(date) {
            debug!(
                employee_id = %raw.employee_id,
                date = %date,
                "Ignoring event outside the report window"
            );
            continue;
        }

        match raw.parse_kind() {
            Ok(kind) => {
                let entry = parsed.entry(raw.employee_id.clone()).or_default();
                entry.events.push(ClockEvent {
                    employee_id: raw.employee_id,
                    kind,
                    timestamp: timestamp.with_timezone(&config.timezone()),
                });
            }
            Err(err) => {
                parsed
                    .entry(raw.employee_id)
                    .or_default()
                    .malformed_days
                    .entry(date)
                    .or_insert_with(|| err.to_string());
            }
        }
    }

    parsed
}

/// Builds the balances of one employee for every date in the window.
fn employee_balances(
    employee: &Employee,
    events: EmployeeEvents,
    profile: Option<&ScheduleProfile>,
    config: &EngineConfig,
    window: &ReportWindow,
) -> Vec<DayBalance> {
    let mut base_diagnostics = Vec::new();
    let fallback;
    let profile = match profile {
        Some(profile) => profile,
        None => {
            warn!(
                employee_id = %employee.id,
                error = %EngineError::MissingScheduleProfile {
                    employee_id: employee.id.clone(),
                },
                "Using the default daily schedule"
            );
            base_diagnostics.push(BalanceDiagnostic::MissingScheduleProfile);
            fallback = ScheduleProfile::default_daily(employee.id.as_str());
            &fallback
        }
    };
    let expected = expected_minutes(profile, config.schedule_defaults());

    let EmployeeEvents {
        events,
        malformed_days,
        undated,
    } = events;
    let mut days = partition_by_day(events, config.timezone(), window);

    window
        .days()
        .map(|date| {
            let problem = undated.as_ref().or_else(|| malformed_days.get(&date));
            if let Some(message) = problem {
                warn!(
                    employee_id = %employee.id,
                    date = %date,
                    error = %message,
                    "Degrading employee-day with malformed events"
                );
                let mut balance = DayBalance::degraded(&employee.id, date, expected, message);
                balance.diagnostics.extend(base_diagnostics.iter().cloned());
                return balance;
            }

            let facts = reduce(&days.remove(&date).unwrap_or_default());
            build_day_balance(&employee.id, date, facts, expected, base_diagnostics.clone())
        })
        .collect()
}

/// Generates a balance report for `employees` over `window`.
///
/// Every employee gets one row per date in the window, even without events.
/// Malformed events never abort the report; they degrade the employee-days
/// they belong to. Any source failure aborts it and is returned unchanged.
///
/// # Example
///
/// ```
/// use balance_engine::config::EngineConfig;
/// use balance_engine::models::{DayState, Employee, ReportWindow};
/// use balance_engine::report::generate_report;
/// use balance_engine::sources::{InMemorySource, Sources};
/// use chrono::NaiveDate;
///
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     first_name: "Ada".to_string(),
///     surname: "Lovelace".to_string(),
///     branch: None,
/// }];
/// let source = InMemorySource::default();
/// let window = ReportWindow::single_day(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
///
/// let report = generate_report(
///     Sources::from_single(&source),
///     &employees,
///     window,
///     &[],
///     &EngineConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(report.rows.len(), 1);
/// assert_eq!(report.rows[0].balance.state, DayState::Absent);
/// ```
pub fn generate_report(
    sources: Sources<'_>,
    employees: &[Employee],
    window: ReportWindow,
    sort: &[SortSpec],
    config: &EngineConfig,
) -> EngineResult<BalanceReport> {
    let start_time = Instant::now();
    let report_id = Uuid::new_v4();
    window.validate()?;
    window.validate_length(config.limits().max_window_days)?;

    let mut seen = HashSet::new();
    let employees: Vec<&Employee> = employees
        .iter()
        .filter(|e| {
            let first = seen.insert(e.id.as_str());
            if !first {
                debug!(employee_id = %e.id, "Ignoring duplicate directory entry");
            }
            first
        })
        .collect();
    let employee_ids: Vec<String> = employees.iter().map(|e| e.id.clone()).collect();

    let raw_events = sources.events.list_events(&employee_ids, &window)?;
    let event_count = raw_events.len();
    let profiles = sources.profiles.get_schedule_profiles(&employee_ids)?;
    let mut parsed = parse_events(raw_events, &seen, config, &window);

    let capacity = usize::try_from(window.day_count())
        .ok()
        .and_then(|days| employees.len().checked_mul(days))
        .unwrap_or(0);
    let mut rows = Vec::with_capacity(capacity);
    for employee in &employees {
        let events = parsed.remove(&employee.id).unwrap_or_default();
        let balances = employee_balances(
            employee,
            events,
            profiles.get(&employee.id),
            config,
            &window,
        );
        for balance in balances {
            let scheduled = sources
                .scheduled_starts
                .get_scheduled_start(&employee.id, balance.date)?;
            let punctuality =
                classify_punctuality(balance.entry_time, scheduled, config.punctuality());
            rows.push(BalanceRow::new(employee, balance, punctuality));
        }
    }

    sort_rows(&mut rows, sort);
    let summary = summarize(&rows);
    let branches = rollup_by_branch(&rows);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        report_id = %report_id,
        employees = employees.len(),
        events = event_count,
        days = rows.len(),
        degraded = summary.degraded,
        duration_us,
        "Balance report generated"
    );

    Ok(BalanceReport {
        report_id,
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        window,
        rows,
        summary,
        branches,
        duration_us,
    })
}
