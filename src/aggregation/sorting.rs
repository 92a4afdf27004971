//! Multi-key ordering of report rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::BalanceRow;

/// A column rows can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Surname, then first name; case-insensitive.
    Name,
    /// Branch name; case-insensitive.
    Branch,
    /// First entry of the day.
    EntryTime,
    /// Last exit of the day.
    ExitTime,
    /// Worked minutes.
    WorkedMinutes,
    /// Deviation from the expected minutes.
    Deviation,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One level of a multi-key ordering.
///
/// # Example
///
/// ```
/// use balance_engine::aggregation::{SortDirection, SortKey, SortSpec};
///
/// let spec: SortSpec = serde_json::from_str(r#"{"key": "worked_minutes"}"#).unwrap();
/// assert_eq!(spec.key, SortKey::WorkedMinutes);
/// assert_eq!(spec.direction, SortDirection::Asc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The column.
    pub key: SortKey,
    /// The direction, ascending when omitted.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending order on `key`.
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Descending order on `key`.
    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_names(a: &BalanceRow, b: &BalanceRow) -> Ordering {
    cmp_case_insensitive(&a.surname, &b.surname)
        .then_with(|| cmp_case_insensitive(&a.first_name, &b.first_name))
}

/// Undefined values go last whatever the direction.
fn cmp_optional<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_by(spec: SortSpec, a: &BalanceRow, b: &BalanceRow) -> Ordering {
    let (x, y) = (&a.balance, &b.balance);
    match spec.key {
        SortKey::Name => spec.direction.apply(cmp_names(a, b)),
        SortKey::Branch => spec.direction.apply(cmp_case_insensitive(&a.branch, &b.branch)),
        SortKey::EntryTime => cmp_optional(x.entry_time, y.entry_time, spec.direction),
        SortKey::ExitTime => cmp_optional(x.exit_time, y.exit_time, spec.direction),
        SortKey::WorkedMinutes => cmp_optional(x.worked_minutes, y.worked_minutes, spec.direction),
        SortKey::Deviation => {
            cmp_optional(x.deviation_minutes, y.deviation_minutes, spec.direction)
        }
    }
}

/// Sorts rows by the given keys in priority order.
///
/// Rows equal on every key are ordered by name ascending (unless a name key
/// was given), then by employee id and date, so the result is deterministic
/// for any input order. An empty key list sorts by name.
pub fn sort_rows(rows: &mut [BalanceRow], specs: &[SortSpec]) {
    let has_name_key = specs.iter().any(|s| s.key == SortKey::Name);

    rows.sort_by(|a, b| {
        specs
            .iter()
            .fold(Ordering::Equal, |acc, spec| {
                acc.then_with(|| cmp_by(*spec, a, b))
            })
            .then_with(|| {
                if has_name_key {
                    Ordering::Equal
                } else {
                    cmp_names(a, b)
                }
            })
            .then_with(|| a.balance.employee_id.cmp(&b.balance.employee_id))
            .then_with(|| a.balance.date.cmp(&b.balance.date))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::test_support::{absent_row, complete_row};
    use proptest::prelude::*;

    fn ids(rows: &[BalanceRow]) -> Vec<&str> {
        rows.iter().map(|r| r.balance.employee_id.as_str()).collect()
    }

    fn sample() -> Vec<BalanceRow> {
        vec![
            complete_row("emp_001", "Ada", "Lovelace", "south", 545),
            complete_row("emp_002", "Grace", "hopper", "north", 400),
            absent_row("emp_003"),
            complete_row("emp_004", "Alan", "Turing", "North", 480),
        ]
    }

    // ==========================================================================
    // SO-001: empty key list sorts by surname, case-insensitively
    // ==========================================================================
    #[test]
    fn test_so_001_default_name_order() {
        let mut rows = sample();
        sort_rows(&mut rows, &[]);
        // absent_row is "Zed Absent"
        assert_eq!(ids(&rows), vec!["emp_003", "emp_002", "emp_001", "emp_004"]);
    }

    // ==========================================================================
    // SO-002: worked minutes descending puts undefined last
    // ==========================================================================
    #[test]
    fn test_so_002_worked_desc_undefined_last() {
        let mut rows = sample();
        sort_rows(&mut rows, &[SortSpec::desc(SortKey::WorkedMinutes)]);
        assert_eq!(ids(&rows), vec!["emp_001", "emp_004", "emp_002", "emp_003"]);
    }

    // ==========================================================================
    // SO-003: worked minutes ascending still puts undefined last
    // ==========================================================================
    #[test]
    fn test_so_003_worked_asc_undefined_last() {
        let mut rows = sample();
        sort_rows(&mut rows, &[SortSpec::asc(SortKey::WorkedMinutes)]);
        assert_eq!(ids(&rows), vec!["emp_002", "emp_004", "emp_001", "emp_003"]);
    }

    // ==========================================================================
    // SO-004: ties on a non-name key fall back to surname, first name
    // ==========================================================================
    #[test]
    fn test_so_004_branch_ties_break_on_name() {
        let mut rows = sample();
        rows[2].branch = "north".to_string();
        sort_rows(&mut rows, &[SortSpec::asc(SortKey::Branch)]);
        // north: Absent, hopper, Turing; then south
        assert_eq!(ids(&rows), vec!["emp_003", "emp_002", "emp_004", "emp_001"]);
    }

    // ==========================================================================
    // SO-005: multi-key ordering applies keys in priority order
    // ==========================================================================
    #[test]
    fn test_so_005_multi_key() {
        let mut rows = sample();
        sort_rows(
            &mut rows,
            &[
                SortSpec::desc(SortKey::Branch),
                SortSpec::desc(SortKey::Deviation),
            ],
        );
        // unassigned, south, then north by deviation desc (0, -80)
        assert_eq!(ids(&rows), vec!["emp_003", "emp_001", "emp_004", "emp_002"]);
    }

    // ==========================================================================
    // SO-006: name descending reverses the name order
    // ==========================================================================
    #[test]
    fn test_so_006_name_desc() {
        let mut rows = sample();
        sort_rows(&mut rows, &[SortSpec::desc(SortKey::Name)]);
        assert_eq!(ids(&rows), vec!["emp_004", "emp_001", "emp_002", "emp_003"]);
    }

    // ==========================================================================
    // SO-007: a shared surname falls back to first name, case-insensitively
    // ==========================================================================
    #[test]
    fn test_so_007_shared_surname_breaks_on_first_name() {
        let rows = vec![
            complete_row("emp_010", "Byron", "Lovelace", "north", 480),
            complete_row("emp_011", "ada", "Lovelace", "north", 480),
        ];

        let mut by_branch = rows.clone();
        sort_rows(&mut by_branch, &[SortSpec::asc(SortKey::Branch)]);
        assert_eq!(ids(&by_branch), vec!["emp_011", "emp_010"]);

        let mut by_name = rows;
        sort_rows(&mut by_name, &[SortSpec::asc(SortKey::Name)]);
        assert_eq!(ids(&by_name), vec!["emp_011", "emp_010"]);
    }

    #[test]
    fn test_same_employee_orders_by_date() {
        let first = complete_row("emp_001", "Ada", "Lovelace", "north", 480);
        let mut second = first.clone();
        second.balance.date = first.balance.date.succ_opt().unwrap();

        let mut rows = vec![second.clone(), first.clone()];
        sort_rows(&mut rows, &[SortSpec::asc(SortKey::Name)]);
        assert_eq!(rows, vec![first, second]);
    }

    #[test]
    fn test_sort_spec_deserializes_direction() {
        let spec: SortSpec =
            serde_json::from_str(r#"{"key": "exit_time", "direction": "desc"}"#).unwrap();
        assert_eq!(spec, SortSpec::desc(SortKey::ExitTime));
    }

    proptest! {
        #[test]
        fn prop_sort_is_independent_of_input_order(rotation in 0usize..4, key in 0usize..6) {
            let keys = [
                SortKey::Name,
                SortKey::Branch,
                SortKey::EntryTime,
                SortKey::ExitTime,
                SortKey::WorkedMinutes,
                SortKey::Deviation,
            ];
            let specs = [SortSpec::desc(keys[key])];

            let mut expected = sample();
            sort_rows(&mut expected, &specs);

            let mut rotated = sample();
            rotated.rotate_left(rotation);
            sort_rows(&mut rotated, &specs);

            prop_assert_eq!(rotated, expected);
        }
    }
}
