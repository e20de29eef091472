//! Application state.

use orgnet_graph::{GraphClient, SeedPaths};

/// State shared across handlers.
///
/// The graph client is constructed once at startup and injected here; the
/// driver pool inside it is safe for concurrent use across requests.
#[derive(Clone)]
pub struct AppState {
    pub client: GraphClient,
    pub seed_paths: SeedPaths,
}

impl AppState {
    pub fn new(client: GraphClient, seed_paths: SeedPaths) -> Self {
        Self { client, seed_paths }
    }
}
