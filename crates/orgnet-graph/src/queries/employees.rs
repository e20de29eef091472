//! Employee listing, creation, and counting.

use neo4rs::Query;
use orgnet_core::Employee;

use super::get_field;
use crate::error::GraphResult;
use crate::GraphClient;

/// Fetch all employees, ordered by name ascending.
pub async fn get_employees(client: &GraphClient) -> GraphResult<Vec<Employee>> {
    let query = Query::new(
        "MATCH (e:Employee)
         RETURN e.name as name,
                e.emp_id as emp_id,
                e.email as email,
                e.department as department,
                e.position as position,
                e.hire_date as hire_date
         ORDER BY e.name"
            .to_string(),
    );

    let rows = client.query(query).await?;
    rows.iter().map(employee_from_row).collect()
}

/// Map a result row onto an [`Employee`], leaving unset properties `None`.
pub(crate) fn employee_from_row(row: &neo4rs::Row) -> GraphResult<Employee> {
    Ok(Employee {
        name: get_field(row, "name")?,
        emp_id: row.get::<i64>("emp_id").ok(),
        email: row.get::<String>("email").ok(),
        department: row.get::<String>("department").ok(),
        position: row.get::<String>("position").ok(),
        hire_date: row.get::<String>("hire_date").ok(),
    })
}

/// Unconditionally create a new employee node.
///
/// Plain `CREATE`, not `MERGE`: two calls with the same input produce two
/// distinct nodes. Only the properties that are actually set are written,
/// so absent fields never appear as null placeholders on the node.
pub async fn create_employee(client: &GraphClient, employee: &Employee) -> GraphResult<()> {
    let mut query = Query::new(create_employee_cypher(employee))
        .param("name", employee.name.as_str());

    if let Some(id) = employee.emp_id {
        query = query.param("emp_id", id);
    }
    if let Some(email) = &employee.email {
        query = query.param("email", email.as_str());
    }
    if let Some(department) = &employee.department {
        query = query.param("department", department.as_str());
    }
    if let Some(position) = &employee.position {
        query = query.param("position", position.as_str());
    }
    if let Some(hire_date) = &employee.hire_date {
        query = query.param("hire_date", hire_date.as_str());
    }

    client.execute(query).await
}

fn create_employee_cypher(employee: &Employee) -> String {
    let mut props = vec!["name: $name"];
    if employee.emp_id.is_some() {
        props.push("emp_id: $emp_id");
    }
    if employee.email.is_some() {
        props.push("email: $email");
    }
    if employee.department.is_some() {
        props.push("department: $department");
    }
    if employee.position.is_some() {
        props.push("position: $position");
    }
    if employee.hire_date.is_some() {
        props.push("hire_date: $hire_date");
    }
    format!("CREATE (e:Employee {{{}}})", props.join(", "))
}

/// Count employee nodes.
pub async fn count_employees(client: &GraphClient) -> GraphResult<i64> {
    let query = Query::new("MATCH (e:Employee) RETURN COUNT(e) as count".to_string());
    Ok(client.query_scalar::<i64>(query, "count").await?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cypher_name_only() {
        let cypher = create_employee_cypher(&Employee::named("Alice"));
        assert_eq!(cypher, "CREATE (e:Employee {name: $name})");
    }

    #[test]
    fn test_create_cypher_includes_set_fields_only() {
        let mut e = Employee::named("Alice");
        e.emp_id = Some(7);
        e.position = Some("Engineer".to_string());
        let cypher = create_employee_cypher(&e);
        assert_eq!(
            cypher,
            "CREATE (e:Employee {name: $name, emp_id: $emp_id, position: $position})"
        );
    }
}
