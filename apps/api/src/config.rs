use anyhow::{Context, Result};

/// Default inference endpoint when HUGGINGFACE_API_URL is not set.
const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.1";

/// Application configuration loaded from environment variables.
///
/// The HuggingFace API key is deliberately optional: running without it is a
/// supported mode in which every chat request is answered by the keyword
/// fallback responder.
#[derive(Debug, Clone)]
pub struct Config {
    pub huggingface_api_key: Option<String>,
    pub huggingface_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            huggingface_api_key: optional_env("HUGGINGFACE_API_KEY"),
            huggingface_api_url: std::env::var("HUGGINGFACE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Whether a remote-completion credential is present. Reported by the
    /// health endpoint; never verified against the remote service.
    pub fn api_key_configured(&self) -> bool {
        self.huggingface_api_key.is_some()
    }
}

/// Reads an env var, treating unset and blank as equally absent.
fn optional_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
