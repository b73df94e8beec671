use std::sync::Arc;

use crate::chat::responder::ChatResponder;
use crate::config::Config;
use crate::models::resume::Resume;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// `resume` is the read-only snapshot built at startup; requests never mutate
/// it, so no locking is needed under concurrency.
#[derive(Clone)]
pub struct AppState {
    pub resume: Arc<Resume>,
    pub responder: Arc<ChatResponder>,
    pub config: Config,
}
