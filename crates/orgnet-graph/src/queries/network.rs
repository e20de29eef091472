//! Relationship listings and the joined employee network view.

use neo4rs::Query;
use orgnet_core::{EmployeeWithRelationships, Relationship};

use super::{employees::employee_from_row, get_field};
use crate::error::GraphResult;
use crate::GraphClient;

/// Fetch every employee joined with their boss, direct reports, and friends.
///
/// Three independent optional joins combined via grouping: at most one
/// outgoing REPORTS_TO target, all incoming REPORTS_TO sources, and
/// FRIENDS_WITH neighbors in either direction. The collected name lists are
/// deduplicated by the query and stripped of null/empty entries here.
pub async fn get_employees_with_relationships(
    client: &GraphClient,
) -> GraphResult<Vec<EmployeeWithRelationships>> {
    let query = Query::new(
        "MATCH (e:Employee)
         OPTIONAL MATCH (e)-[:REPORTS_TO]->(boss:Employee)
         OPTIONAL MATCH (subordinate:Employee)-[:REPORTS_TO]->(e)
         OPTIONAL MATCH (e)-[:FRIENDS_WITH]-(friend:Employee)
         RETURN e.name as name,
                e.emp_id as emp_id,
                e.email as email,
                e.department as department,
                e.position as position,
                e.hire_date as hire_date,
                boss.name as boss_name,
                COLLECT(DISTINCT subordinate.name) as direct_reports,
                COLLECT(DISTINCT friend.name) as friends
         ORDER BY e.name"
            .to_string(),
    );

    let rows = client.query(query).await?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in &rows {
        let direct_reports = clean_names(row.get::<Vec<String>>("direct_reports").unwrap_or_default());
        let friends = clean_names(row.get::<Vec<String>>("friends").unwrap_or_default());

        entries.push(EmployeeWithRelationships {
            employee: employee_from_row(row)?,
            boss: row.get::<String>("boss_name").ok(),
            direct_reports,
            friends,
        });
    }
    Ok(entries)
}

fn clean_names(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter(|n| !n.is_empty()).collect()
}

/// Fetch every directed typed edge as a flat (from, to, kind) triple,
/// ordered by source name then target name.
pub async fn get_relationships(client: &GraphClient) -> GraphResult<Vec<Relationship>> {
    let query = Query::new(
        "MATCH (a:Employee)-[r]->(b:Employee)
         RETURN a.name as from_employee,
                b.name as to_employee,
                TYPE(r) as relationship_type
         ORDER BY a.name, b.name"
            .to_string(),
    );

    let rows = client.query(query).await?;
    rows.iter()
        .map(|row| {
            Ok(Relationship {
                from_employee: get_field(row, "from_employee")?,
                to_employee: get_field(row, "to_employee")?,
                relationship_type: get_field(row, "relationship_type")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_names_drops_empty_entries() {
        let names = vec!["Alice".to_string(), String::new(), "Bob".to_string()];
        assert_eq!(clean_names(names), vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_clean_names_empty_collection_stays_empty() {
        assert!(clean_names(vec![]).is_empty());
    }
}
