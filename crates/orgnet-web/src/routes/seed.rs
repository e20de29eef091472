//! Seeding route: destructive reset plus CSV re-ingestion.

use anyhow::Context;
use axum::{extract::State, Json};
use orgnet_core::response::MessageResponse;
use orgnet_graph::ingest;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn seed_data(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let count = ingest::seed_sample_data(&state.client, &state.seed_paths)
        .await
        .context("Failed to seed sample data")?;

    Ok(Json(MessageResponse {
        message: format!("Seeded {} employees from CSV data", count),
    }))
}
