//! Router setup.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";

/// Build the router with the skill endpoint mounted at `skill_path`.
pub fn create_router(state: AppState, skill_path: &str) -> Router {
    Router::new()
        .route(skill_path, post(handlers::skill))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
