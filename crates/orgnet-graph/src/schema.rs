//! Neo4j schema initialization (constraints).

use neo4rs::Query;
use tracing::{info, warn};

use crate::GraphClient;

/// Cypher statements for schema initialization.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT employee_emp_id IF NOT EXISTS FOR (e:Employee) REQUIRE e.emp_id IS UNIQUE",
];

/// Declare the uniqueness constraint on the employee identifier.
///
/// Safe to run multiple times. Engines and versions report an existing
/// constraint differently, so any failure here is logged and swallowed;
/// startup proceeds either way.
pub async fn ensure_unique_constraints(client: &GraphClient) {
    for statement in SCHEMA_STATEMENTS {
        match client.execute(Query::new(statement.to_string())).await {
            Ok(()) => info!("Employee constraint ensured"),
            Err(e) => warn!("Constraints may already exist: {}", e),
        }
    }
}
