//! Chat orchestration: prompt assembly, the single remote-completion attempt,
//! and the keyword fallback.
//!
//! The responder is stateless between calls. Each reply is fully determined
//! by the request, the resume snapshot, and whatever the remote service
//! returns; conversation history is the caller's responsibility.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::chat::classifier::{classify, render};
use crate::chat::prompts::build_system_prompt;
use crate::errors::AppError;
use crate::llm_client::RemoteCompletion;
use crate::models::chat::{ChatReply, ChatRequest, ChatTurn, Role};
use crate::models::resume::Resume;

/// At most this many caller-supplied history turns are forwarded to the
/// remote service, bounding prompt size regardless of what the caller sends.
pub const HISTORY_WINDOW: usize = 10;

/// Result of the remote attempt. `Fallback` carries the reason for logging;
/// it is never surfaced to the caller.
enum RemoteOutcome {
    Answered(String),
    Fallback(String),
}

/// Builds the effective turn sequence for a request:
/// `[system] + last HISTORY_WINDOW history turns + [user message]`.
///
/// Pure function; the system prompt is always freshly generated from the
/// resume and never taken from caller history.
pub fn assemble_turns(system_prompt: &str, history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut turns = Vec::with_capacity(2 + HISTORY_WINDOW);
    turns.push(ChatTurn::new(Role::System, system_prompt));
    turns.extend_from_slice(&history[window_start..]);
    turns.push(ChatTurn::new(Role::User, message));
    turns
}

pub struct ChatResponder {
    resume: Arc<Resume>,
    /// `None` when no credential is configured — a valid state in which every
    /// request takes the fallback path without touching the network.
    remote: Option<Arc<dyn RemoteCompletion>>,
}

impl ChatResponder {
    pub fn new(resume: Arc<Resume>, remote: Option<Arc<dyn RemoteCompletion>>) -> Self {
        Self { resume, remote }
    }

    /// Produces a reply for a chat request.
    ///
    /// Fails only on an empty/missing message. Remote-completion failures are
    /// absorbed here: the reply degrades to the keyword fallback instead.
    pub async fn reply(&self, request: &ChatRequest) -> Result<ChatReply, AppError> {
        if request.message.trim().is_empty() {
            return Err(AppError::Validation("Message is required".to_string()));
        }

        let system_prompt = build_system_prompt(&self.resume);
        let turns = assemble_turns(&system_prompt, &request.history, &request.message);

        let text = match self.attempt_remote(&turns).await {
            RemoteOutcome::Answered(text) => text,
            RemoteOutcome::Fallback(reason) => {
                debug!("using keyword fallback: {reason}");
                let question = last_user_message(&turns);
                render(classify(question), question, &self.resume)
            }
        };

        Ok(ChatReply {
            message: text,
            timestamp: Utc::now(),
        })
    }

    /// One remote attempt, no retries. Any failure becomes `Fallback`.
    async fn attempt_remote(&self, turns: &[ChatTurn]) -> RemoteOutcome {
        let Some(remote) = &self.remote else {
            return RemoteOutcome::Fallback("no API credential configured".to_string());
        };

        match remote.complete(turns).await {
            Ok(text) => RemoteOutcome::Answered(text),
            Err(e) => {
                warn!("remote completion failed: {e}");
                RemoteOutcome::Fallback(e.to_string())
            }
        }
    }
}

/// The last user turn of the assembled sequence — the question the fallback
/// classifier answers.
fn last_user_message(turns: &[ChatTurn]) -> &str {
    turns
        .iter()
        .rev()
        .find(|t| t.role == Role::User)
        .map(|t| t.content.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::CompletionError;
    use crate::models::resume;
    use async_trait::async_trait;

    /// Remote stub that returns a canned answer or always fails.
    struct StubRemote {
        answer: Option<String>,
    }

    #[async_trait]
    impl RemoteCompletion for StubRemote {
        async fn complete(&self, _turns: &[ChatTurn]) -> Result<String, CompletionError> {
            self.answer
                .clone()
                .ok_or(CompletionError::MissingMarker)
        }
    }

    fn responder_without_remote() -> ChatResponder {
        ChatResponder::new(Arc::new(resume::profile()), None)
    }

    fn responder_with_stub(answer: Option<&str>) -> ChatResponder {
        ChatResponder::new(
            Arc::new(resume::profile()),
            Some(Arc::new(StubRemote {
                answer: answer.map(str::to_string),
            })),
        )
    }

    fn history_of(n: usize) -> Vec<ChatTurn> {
        (0..n)
            .map(|i| ChatTurn::new(Role::User, format!("turn {i}")))
            .collect()
    }

    #[test]
    fn test_assemble_turns_without_history() {
        let turns = assemble_turns("sys", &[], "hello");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].content, "hello");
    }

    #[test]
    fn test_assemble_turns_caps_history_at_window() {
        let turns = assemble_turns("sys", &history_of(15), "hello");
        // 1 system + 10 history + 1 user
        assert_eq!(turns.len(), 12);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns.last().unwrap().content, "hello");
        // The window keeps the MOST RECENT turns
        assert_eq!(turns[1].content, "turn 5");
        assert_eq!(turns[10].content, "turn 14");
    }

    #[test]
    fn test_assemble_turns_keeps_short_history_whole() {
        let turns = assemble_turns("sys", &history_of(3), "hello");
        assert_eq!(turns.len(), 5);
        assert_eq!(turns[1].content, "turn 0");
    }

    #[tokio::test]
    async fn test_empty_message_is_invalid() {
        let responder = responder_without_remote();
        let request = ChatRequest {
            message: "   ".to_string(),
            history: vec![],
        };
        let err = responder.reply(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Message is required"));
    }

    #[tokio::test]
    async fn test_no_credential_falls_back_deterministically() {
        let responder = responder_without_remote();
        let request = ChatRequest {
            message: "What are your skills?".to_string(),
            history: vec![],
        };
        let reply = responder.reply(&request).await.unwrap();
        let expected = render(classify("What are your skills?"), "What are your skills?", &resume::profile());
        assert_eq!(reply.message, expected);
        assert!(reply.message.contains("Java, MySQL"));
    }

    #[tokio::test]
    async fn test_remote_success_returns_remote_text() {
        let responder = responder_with_stub(Some("remote answer"));
        let request = ChatRequest {
            message: "What are your skills?".to_string(),
            history: vec![],
        };
        let reply = responder.reply(&request).await.unwrap();
        assert_eq!(reply.message, "remote answer");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let responder = responder_with_stub(None);
        let request = ChatRequest {
            message: "tell me about your education".to_string(),
            history: vec![],
        };
        let reply = responder.reply(&request).await.unwrap();
        assert!(reply.message.starts_with("My education:"));
    }

    #[tokio::test]
    async fn test_fallback_answers_the_current_message_not_history() {
        let responder = responder_without_remote();
        let request = ChatRequest {
            message: "xyzzy quantum flux".to_string(),
            history: vec![
                ChatTurn::new(Role::User, "what are your skills"),
                ChatTurn::new(Role::Assistant, "…"),
            ],
        };
        let reply = responder.reply(&request).await.unwrap();
        assert!(reply.message.contains("'xyzzy quantum flux'"));
        assert!(!reply.message.contains("Java, MySQL"));
    }
}
