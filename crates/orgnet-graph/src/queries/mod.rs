//! Cypher query operations over the employee graph.

pub mod employees;
pub mod graph_view;
pub mod network;

use serde::de::DeserializeOwned;

use crate::error::{GraphError, GraphResult};

/// Read a required field from a result row.
pub(crate) fn get_field<T: DeserializeOwned>(row: &neo4rs::Row, field: &str) -> GraphResult<T> {
    row.get(field).map_err(|e| GraphError::Decode {
        field: field.to_string(),
        message: format!("{:?}", e),
    })
}
