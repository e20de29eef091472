//! Visualization-oriented nodes/edges projection.

use serde::{Deserialize, Serialize};

/// Stable key for a graph-view node.
///
/// The numeric `emp_id` wins when assigned; otherwise the name with spaces
/// replaced by underscores, so every node has a non-null key and edge
/// endpoints resolve to the same keys as the node list.
pub fn node_key(emp_id: Option<i64>, name: &str) -> String {
    match emp_id {
        Some(id) => id.to_string(),
        None => name.replace(' ', "_"),
    }
}

/// A node in the visualization projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An edge in the visualization projection.
///
/// `id` is the engine's internal edge identifier, stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub rel_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_key_prefers_numeric_id() {
        assert_eq!(node_key(Some(42), "Alice Smith"), "42");
    }

    #[test]
    fn test_node_key_falls_back_to_underscored_name() {
        assert_eq!(node_key(None, "Alice Smith"), "Alice_Smith");
        assert_eq!(node_key(None, "Bob"), "Bob");
    }

    #[test]
    fn test_node_keys_distinct_for_distinct_names() {
        let keys = ["Alice Smith", "Alice Jones", "Bob"]
            .iter()
            .map(|n| node_key(None, n))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_edge_serializes_type_field() {
        let edge = GraphEdge {
            id: "17".to_string(),
            from: "Alice".to_string(),
            to: "Bob".to_string(),
            rel_type: "REPORTS_TO".to_string(),
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "17", "from": "Alice", "to": "Bob", "type": "REPORTS_TO"})
        );
    }
}
