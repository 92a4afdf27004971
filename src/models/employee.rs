//! Employee model.
//!
//! This module defines the Employee struct, the directory entry that decides
//! which employees a report covers and how they are named and grouped.

use serde::{Deserialize, Serialize};

/// Branch name used for employees without a branch.
pub const UNASSIGNED_BRANCH: &str = "unassigned";

/// Represents an employee covered by a balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// The branch the employee belongs to, if any.
    #[serde(default)]
    pub branch: Option<String>,
}

impl Employee {
    /// Returns the branch name used for rollups.
    ///
    /// # Examples
    ///
    /// ```
    /// use balance_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     surname: "Lovelace".to_string(),
    ///     branch: None,
    /// };
    /// assert_eq!(employee.branch_name(), "unassigned");
    /// ```
    pub fn branch_name(&self) -> &str {
        self.branch.as_deref().unwrap_or(UNASSIGNED_BRANCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_without_branch() {
        let json = r#"{
            "id": "emp_001",
            "first_name": "Ada",
            "surname": "Lovelace"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert!(employee.branch.is_none());
        assert_eq!(employee.branch_name(), UNASSIGNED_BRANCH);
    }

    #[test]
    fn test_branch_name_uses_branch() {
        let employee = Employee {
            id: "emp_002".to_string(),
            first_name: "Grace".to_string(),
            surname: "Hopper".to_string(),
            branch: Some("north".to_string()),
        };
        assert_eq!(employee.branch_name(), "north");
    }
}
