use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Loopback control surface carrying the host command envelope.
pub fn create_control_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .route("/command", post(handlers::handle_command))
        .with_state(state)
}
