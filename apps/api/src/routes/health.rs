use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
///
/// Reports service liveness and whether a remote-completion credential is
/// configured. Credential presence comes from config only; the remote
/// endpoint is never probed.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "api_key_configured": state.config.api_key_configured(),
    }))
}
