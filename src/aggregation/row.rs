//! The sortable report row.

use serde::{Deserialize, Serialize};

use crate::models::{DayBalance, Employee};

use super::Punctuality;

/// One employee-day as shown in a report: who, the balance, and punctuality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// Branch name, `unassigned` when the employee has none.
    pub branch: String,
    /// The day balance.
    pub balance: DayBalance,
    /// Punctuality, when a scheduled start exists.
    pub punctuality: Option<Punctuality>,
}

impl BalanceRow {
    /// Projects a balance onto its employee.
    pub fn new(employee: &Employee, balance: DayBalance, punctuality: Option<Punctuality>) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            surname: employee.surname.clone(),
            branch: employee.branch_name().to_string(),
            balance,
            punctuality,
        }
    }
}
