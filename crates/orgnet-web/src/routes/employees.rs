//! Employee listing and creation routes.

use anyhow::Context;
use axum::{extract::State, Json};
use orgnet_core::response::EmployeeListResponse;
use orgnet_core::Employee;
use orgnet_graph::queries::employees;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<EmployeeListResponse>, ApiError> {
    let employees = employees::get_employees(&state.client)
        .await
        .context("Failed to fetch employees")?;

    Ok(Json(EmployeeListResponse {
        total: employees.len(),
        employees,
    }))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<EmployeeListResponse>, ApiError> {
    employees::create_employee(&state.client, &employee)
        .await
        .context("Failed to create employee")?;

    Ok(Json(EmployeeListResponse {
        employees: vec![employee],
        total: 1,
    }))
}
