//! JSON response envelopes for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeWithRelationships, Relationship};
use crate::graph_view::{GraphEdge, GraphNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipListResponse {
    pub relationships: Vec<Relationship>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeNetworkResponse {
    pub employees: Vec<EmployeeWithRelationships>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDataResponse {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphEdge>,
}
