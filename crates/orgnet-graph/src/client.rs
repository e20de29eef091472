//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{GraphError, GraphResult};

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            database: "neo4j".to_string(),
        }
    }
}

impl GraphConfig {
    /// Read configuration from the environment, with development defaults.
    ///
    /// Variables: `NEO4J_URI`, `NEO4J_USERNAME`, `NEO4J_PASSWORD`,
    /// `NEO4J_DATABASE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USERNAME").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
            database: std::env::var("NEO4J_DATABASE").unwrap_or(defaults.database),
        }
    }

    /// Ordered list of connection URIs to probe at startup.
    ///
    /// The configured URI comes first, followed by the loopback and
    /// container-network addresses the service may be deployed against.
    /// Duplicates are removed, preserving order.
    pub fn candidate_uris(&self) -> Vec<String> {
        let mut uris = vec![
            self.uri.clone(),
            "bolt://localhost:8888".to_string(),
            "bolt://host.docker.internal:8888".to_string(),
            "bolt://neo4j-gds:7687".to_string(),
        ];
        let mut seen = std::collections::HashSet::new();
        uris.retain(|u| seen.insert(u.clone()));
        uris
    }
}

/// Client for employee graph operations.
///
/// Holds the one driver instance for the process lifetime; neo4rs checks a
/// pooled connection out per query and returns it on every exit path, so the
/// client itself carries no per-call session state and is safe to clone into
/// concurrent request handlers.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    uri: String,
}

impl GraphClient {
    /// Connect by probing each candidate URI in order.
    ///
    /// neo4rs uses a lazy pool — `Graph::connect` only creates the pool
    /// object and does NOT establish a real bolt connection yet. A cheap
    /// `RETURN 1` ping forces the TCP+bolt handshake so an unreachable
    /// address fails here instead of on the first real query. The first URI
    /// whose ping succeeds is adopted for the rest of the process lifetime;
    /// if every candidate fails the error names the last URI tried and
    /// chains its underlying cause.
    pub async fn connect(config: &GraphConfig) -> GraphResult<Self> {
        let mut last_failure: Option<(String, neo4rs::Error)> = None;

        for uri in config.candidate_uris() {
            info!("Attempting to connect to Neo4j at {}", uri);
            match Self::try_connect(&uri, config).await {
                Ok(graph) => {
                    info!("Successfully connected to Neo4j at {}", uri);
                    return Ok(Self { graph, uri });
                }
                Err(e) => {
                    warn!("Failed to connect to {}: {}", uri, e);
                    last_failure = Some((uri, e));
                }
            }
        }

        // candidate_uris always starts with the configured URI, so the loop
        // body runs at least once
        let (uri, source) = last_failure.expect("empty candidate URI list");
        Err(GraphError::Connection {
            uri,
            source: Box::new(source),
        })
    }

    async fn try_connect(uri: &str, config: &GraphConfig) -> Result<Graph, neo4rs::Error> {
        let neo4j_config = ConfigBuilder::default()
            .uri(uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(8)
            .fetch_size(200)
            .build()?;

        let graph = Graph::connect(neo4j_config).await?;
        graph.run(Query::new("RETURN 1".to_string())).await?;
        Ok(graph)
    }

    /// The URI the client ended up connected to.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> GraphResult<()> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a Cypher query and collect all result rows.
    ///
    /// A driver error partway through the stream is propagated, never
    /// truncated into a short successful result.
    pub async fn query(&self, query: Query) -> GraphResult<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> GraphResult<Option<T>> {
        let rows = self.query(query).await?;
        match rows.into_iter().next() {
            Some(row) => {
                let val: T = row.get(field).map_err(|e| GraphError::Decode {
                    field: field.to_string(),
                    message: format!("{:?}", e),
                })?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_uris_start_with_configured() {
        let config = GraphConfig {
            uri: "bolt://db.internal:7687".to_string(),
            ..GraphConfig::default()
        };
        let uris = config.candidate_uris();
        assert_eq!(uris[0], "bolt://db.internal:7687");
        assert_eq!(uris.len(), 4);
    }

    #[test]
    fn test_candidate_uris_dedup_preserves_order() {
        let config = GraphConfig {
            uri: "bolt://localhost:8888".to_string(),
            ..GraphConfig::default()
        };
        let uris = config.candidate_uris();
        assert_eq!(
            uris,
            vec![
                "bolt://localhost:8888".to_string(),
                "bolt://host.docker.internal:8888".to_string(),
                "bolt://neo4j-gds:7687".to_string(),
            ]
        );
    }

    #[test]
    fn test_stream_failure_converts_to_query_error() {
        let err = GraphError::from(neo4rs::Error::ConnectionError);
        assert!(matches!(err, GraphError::Query(_)));
        assert!(err.to_string().starts_with("Neo4j query failed"));
    }

    #[test]
    fn test_connection_error_names_last_uri() {
        let err = GraphError::Connection {
            uri: "bolt://neo4j-gds:7687".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        };
        assert!(err.to_string().contains("bolt://neo4j-gds:7687"));
        let cause = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(cause.as_deref(), Some("connection refused"));
    }
}
