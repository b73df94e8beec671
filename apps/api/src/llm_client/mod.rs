//! Remote completion client — the single point of entry for text-generation
//! API calls.
//!
//! The call is made exactly once per chat request: no retries, no backoff.
//! Every failure mode (transport error, non-success status, malformed
//! payload, missing completion marker) is an error the chat responder absorbs
//! by switching to its keyword fallback, so nothing here needs to be
//! recoverable.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::chat::{ChatTurn, Role};

/// Marker separating the echoed prompt from the generated continuation in the
/// raw completion. A detail of this collaborator: the text-generation API
/// echoes the flattened conversation, so the reply is whatever follows the
/// last occurrence.
const ASSISTANT_MARKER: &str = "Assistant:";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_NEW_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed completion payload")]
    MalformedPayload,

    #[error("completion missing '{ASSISTANT_MARKER}' marker")]
    MissingMarker,
}

/// A text-generation backend invoked with an ordered turn sequence.
///
/// Object-safe so the responder can hold `Arc<dyn RemoteCompletion>` and
/// tests can substitute a stub without any network.
#[async_trait]
pub trait RemoteCompletion: Send + Sync {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct InferenceCandidate {
    generated_text: Option<String>,
}

/// HuggingFace Inference API client.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl RemoteCompletion for HuggingFaceClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, CompletionError> {
        let conversation = flatten_conversation(turns);

        let request_body = InferenceRequest {
            inputs: &conversation,
            parameters: InferenceParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let candidates: Vec<InferenceCandidate> = response
            .json()
            .await
            .map_err(|_| CompletionError::MalformedPayload)?;

        let generated = candidates
            .first()
            .and_then(|c| c.generated_text.as_deref())
            .ok_or(CompletionError::MalformedPayload)?;

        let reply = extract_completion(generated)?;

        debug!("remote completion succeeded ({} chars)", reply.len());

        Ok(reply)
    }
}

/// Flattens a turn sequence into the prompt format the inference endpoint
/// expects, terminated with a bare marker for the model to continue from.
pub fn flatten_conversation(turns: &[ChatTurn]) -> String {
    let mut conversation = String::new();
    for turn in turns {
        let prefix = match turn.role {
            Role::System => "System",
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        conversation.push_str(&format!("{}: {}\n", prefix, turn.content));
    }
    conversation.push_str(ASSISTANT_MARKER);
    conversation
}

/// Extracts the generated reply: the trimmed text after the LAST marker.
/// A completion without the marker, or with nothing after it, is unusable.
fn extract_completion(generated_text: &str) -> Result<String, CompletionError> {
    let (_, tail) = generated_text
        .rsplit_once(ASSISTANT_MARKER)
        .ok_or(CompletionError::MissingMarker)?;

    let reply = tail.trim();
    if reply.is_empty() {
        return Err(CompletionError::MissingMarker);
    }

    Ok(reply.to_string())
}
