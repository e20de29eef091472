//! # Orgnet Graph
//!
//! Neo4j integration for the employee graph service.
//!
//! Owns the connection lifecycle (including candidate-URI fallback at
//! startup), schema constraints, the Cypher query operations, and CSV
//! ingestion of the two relationship files.

pub mod client;
pub mod error;
pub mod ingest;
pub mod queries;
pub mod schema;

pub use client::{GraphClient, GraphConfig};
pub use error::{GraphError, GraphResult};
pub use ingest::SeedPaths;
