//! Employee domain models.

use serde::{Deserialize, Serialize};

/// An employee node in the graph.
///
/// `name` is required on every node and is the merge identity used by CSV
/// ingestion. `emp_id` is the canonical numeric identifier when assigned;
/// fields that were never set in the store are omitted from JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl Employee {
    /// Create an employee with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emp_id: None,
            email: None,
            department: None,
            position: None,
            hire_date: None,
        }
    }
}

/// A directed, typed edge between two employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from_employee: String,
    pub to_employee: String,
    pub relationship_type: String,
}

/// An employee joined with their reporting and friendship neighborhood.
///
/// `boss` is serialized as an explicit `null` when the employee has no
/// outgoing REPORTS_TO edge; the two name lists are always present, possibly
/// empty, and deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWithRelationships {
    pub employee: Employee,
    pub boss: Option<String>,
    #[serde(default)]
    pub direct_reports: Vec<String>,
    #[serde(default)]
    pub friends: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_omits_absent_fields() {
        let json = serde_json::to_value(Employee::named("Alice")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Alice"}));
    }

    #[test]
    fn test_employee_serializes_set_fields() {
        let mut e = Employee::named("Alice");
        e.emp_id = Some(7);
        e.department = Some("Engineering".to_string());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Alice", "emp_id": 7, "department": "Engineering"})
        );
    }

    #[test]
    fn test_network_entry_keeps_null_boss_and_empty_lists() {
        let entry = EmployeeWithRelationships {
            employee: Employee::named("Alice"),
            boss: None,
            direct_reports: vec![],
            friends: vec![],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employee": {"name": "Alice"},
                "boss": null,
                "direct_reports": [],
                "friends": []
            })
        );
    }
}
