//! Visualization-ready nodes/edges projection.

use neo4rs::Query;
use orgnet_core::{node_key, GraphEdge, GraphNode};

use super::get_field;
use crate::error::GraphResult;
use crate::GraphClient;

/// Node and edge lists for graph visualization.
#[derive(Debug, Clone)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Fetch the full graph as nodes and edges, ordered by employee name.
///
/// Node keys use the numeric `emp_id` when present and fall back to the
/// underscored name otherwise; the same rule is applied to edge endpoints so
/// every edge resolves against the node list.
pub async fn get_graph_data(client: &GraphClient) -> GraphResult<GraphData> {
    let nodes_query = Query::new(
        "MATCH (e:Employee)
         RETURN e.emp_id as id,
                e.name as name,
                e.department as department,
                e.position as position,
                e.email as email
         ORDER BY e.name"
            .to_string(),
    );

    let node_rows = client.query(nodes_query).await?;
    let mut nodes = Vec::with_capacity(node_rows.len());
    for row in &node_rows {
        let name: String = get_field(row, "name")?;
        nodes.push(GraphNode {
            id: node_key(row.get::<i64>("id").ok(), &name),
            name,
            department: row.get::<String>("department").ok(),
            position: row.get::<String>("position").ok(),
            email: row.get::<String>("email").ok(),
        });
    }

    let edges_query = Query::new(
        "MATCH (a:Employee)-[r]->(b:Employee)
         RETURN a.emp_id as from_id,
                a.name as from_name,
                b.emp_id as to_id,
                b.name as to_name,
                TYPE(r) as rel_type,
                id(r) as rel_id
         ORDER BY a.name, b.name"
            .to_string(),
    );

    let edge_rows = client.query(edges_query).await?;
    let mut edges = Vec::with_capacity(edge_rows.len());
    for row in &edge_rows {
        let from_name: String = get_field(row, "from_name")?;
        let to_name: String = get_field(row, "to_name")?;
        let rel_id: i64 = get_field(row, "rel_id")?;

        edges.push(GraphEdge {
            id: rel_id.to_string(),
            from: node_key(row.get::<i64>("from_id").ok(), &from_name),
            to: node_key(row.get::<i64>("to_id").ok(), &to_name),
            rel_type: get_field(row, "rel_type")?,
        });
    }

    Ok(GraphData { nodes, edges })
}
