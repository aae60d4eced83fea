pub mod builtin;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::{AppState, Config};

/// Build a fully configured Router + shared state.
pub fn build_app(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        http: reqwest::Client::new(),
        config,
    });

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/generate", post(routes::generate))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
