mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::responder::ChatResponder;
use crate::config::Config;
use crate::llm_client::{HuggingFaceClient, RemoteCompletion};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));
    info!("API key configured: {}", config.api_key_configured());

    // Resume snapshot: built once, read-only for the life of the process
    let resume = Arc::new(models::resume::profile());

    // Remote completion client, only when a credential is present. Without
    // one, every chat request is answered by the keyword fallback.
    let remote: Option<Arc<dyn RemoteCompletion>> =
        config.huggingface_api_key.clone().map(|key| {
            Arc::new(HuggingFaceClient::new(
                key,
                config.huggingface_api_url.clone(),
            )) as Arc<dyn RemoteCompletion>
        });

    let responder = Arc::new(ChatResponder::new(resume.clone(), remote));

    let state = AppState {
        resume,
        responder,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // open CORS, same as the original deployment

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
