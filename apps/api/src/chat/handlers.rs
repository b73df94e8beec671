//! Axum route handlers for the resume and chat endpoints.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::chat::{ChatReply, ChatRequest};
use crate::models::resume::Resume;
use crate::state::AppState;

/// GET /api/resume
///
/// Returns the full resume payload the assistant answers questions about.
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<Resume> {
    Json(state.resume.as_ref().clone())
}

/// POST /api/chat
///
/// Answers a free-text question about the resume. Remote completion first;
/// keyword fallback on any failure or missing credential. Always 200 with a
/// usable message unless the request itself is malformed (empty message).
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.responder.reply(&request).await?;
    Ok(Json(reply))
}
