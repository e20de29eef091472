//! Orgnet Core Library
//!
//! Entity models and response envelopes for the employee graph service.

pub mod employee;
pub mod graph_view;
pub mod response;

pub use employee::{Employee, EmployeeWithRelationships, Relationship};
pub use graph_view::{node_key, GraphEdge, GraphNode};
