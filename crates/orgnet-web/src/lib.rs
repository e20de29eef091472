//! Orgnet Web Server
//!
//! Axum-based HTTP surface over the employee graph. Every route maps to one
//! graph client call; failures become 500 responses with a `detail` body.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use orgnet_graph::{GraphClient, SeedPaths};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::meta::root))
        .route("/health", get(routes::meta::health))
        .route("/seed", post(routes::seed::seed_data))
        .route("/employees", get(routes::employees::list_employees))
        .route("/employees", post(routes::employees::create_employee))
        .route("/relationships", get(routes::relationships::list_relationships))
        // Two paths for the network view; /employee-network is the
        // documented one, the other is kept for older clients.
        .route("/employee-network", get(routes::relationships::employee_network))
        .route(
            "/employees-with-relationship",
            get(routes::relationships::employee_network),
        )
        .route("/graph", get(routes::graph::graph_data))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    client: GraphClient,
    seed_paths: SeedPaths,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(client, seed_paths);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Employee graph API listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
