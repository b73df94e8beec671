pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/resume", get(handlers::handle_get_resume))
        .route("/api/chat", post(handlers::handle_chat))
        .route("/api/health", get(health::health_handler))
        .with_state(state)
}
