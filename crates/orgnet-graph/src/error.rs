//! Error types for graph operations.

use thiserror::Error;

/// Errors raised by the graph client and ingestion.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("could not connect to Neo4j after trying all candidate URIs; last attempt was {uri}")]
    Connection {
        uri: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Neo4j query failed: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("failed to decode field '{field}' from query result: {message}")]
    Decode { field: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
