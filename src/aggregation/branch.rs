//! Per-branch rollups.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BalanceRow;
use super::summary::CompleteTotals;

/// Statistics for one branch.
///
/// `present` and `total` count distinct employees. The remaining fields are
/// taken over complete employee-days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRollup {
    /// Branch name.
    pub branch: String,
    /// Employees with at least one day that has a recorded event.
    pub present: usize,
    /// Employees in the branch.
    pub total: usize,
    /// Complete balances.
    pub complete: usize,
    /// Mean worked minutes over complete balances.
    pub average_worked_minutes: Option<Decimal>,
    /// Signed sum of deviations over complete balances.
    pub total_deviation_minutes: Decimal,
}

#[derive(Default)]
struct BranchAccumulator<'a> {
    present: HashSet<&'a str>,
    employees: HashSet<&'a str>,
    totals: CompleteTotals,
}

/// Groups rows by branch, returning one rollup per branch in name order.
///
/// # Example
///
/// ```
/// use balance_engine::aggregation::rollup_by_branch;
///
/// assert!(rollup_by_branch(&[]).is_empty());
/// ```
pub fn rollup_by_branch(rows: &[BalanceRow]) -> Vec<BranchRollup> {
    let mut branches: BTreeMap<&str, BranchAccumulator<'_>> = BTreeMap::new();

    for row in rows {
        let employee_id = row.balance.employee_id.as_str();
        let acc = branches.entry(row.branch.as_str()).or_default();
        acc.employees.insert(employee_id);
        if row.balance.is_present() {
            acc.present.insert(employee_id);
        }
        acc.totals.record(&row.balance);
    }

    branches
        .into_iter()
        .map(|(branch, acc)| BranchRollup {
            branch: branch.to_string(),
            present: acc.present.len(),
            total: acc.employees.len(),
            complete: acc.totals.complete(),
            average_worked_minutes: acc.totals.average_worked_minutes(),
            total_deviation_minutes: acc.totals.deviation_sum(),
        })
        .collect()
}
