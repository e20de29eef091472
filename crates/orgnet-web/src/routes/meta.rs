//! Root and health routes.

use axum::Json;
use orgnet_core::response::{HealthResponse, MessageResponse};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Employee Graph API".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
