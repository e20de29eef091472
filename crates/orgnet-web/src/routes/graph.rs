//! Graph visualization route.

use anyhow::Context;
use axum::{extract::State, Json};
use orgnet_core::response::GraphDataResponse;
use orgnet_graph::queries::graph_view;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn graph_data(
    State(state): State<AppState>,
) -> Result<Json<GraphDataResponse>, ApiError> {
    let data = graph_view::get_graph_data(&state.client)
        .await
        .context("Failed to fetch graph data")?;

    Ok(Json(GraphDataResponse {
        nodes: data.nodes,
        relationships: data.edges,
    }))
}
