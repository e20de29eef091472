//! Relationship listing and the employee network view.

use anyhow::Context;
use axum::{extract::State, Json};
use orgnet_core::response::{EmployeeNetworkResponse, RelationshipListResponse};
use orgnet_graph::queries::network;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_relationships(
    State(state): State<AppState>,
) -> Result<Json<RelationshipListResponse>, ApiError> {
    let relationships = network::get_relationships(&state.client)
        .await
        .context("Failed to fetch relationships")?;

    Ok(Json(RelationshipListResponse {
        total: relationships.len(),
        relationships,
    }))
}

pub async fn employee_network(
    State(state): State<AppState>,
) -> Result<Json<EmployeeNetworkResponse>, ApiError> {
    let employees = network::get_employees_with_relationships(&state.client)
        .await
        .context("Failed to fetch employee network")?;

    Ok(Json(EmployeeNetworkResponse {
        total: employees.len(),
        employees,
    }))
}
