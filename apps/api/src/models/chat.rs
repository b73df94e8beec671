//! Wire types for the chat API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of conversation. History turns are caller-supplied; the server
/// never stores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`. A missing `message` field deserializes to an
/// empty string so `{}` hits the same validation as `{"message": ""}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Body of a successful `POST /api/chat` response. The timestamp is taken
/// when the reply text is produced, not at request receipt.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(role, Role::System);
    }

    #[test]
    fn test_request_without_message_deserializes_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_empty());
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_request_with_history_only_deserializes_empty_message() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"history": [{"role": "user", "content": "hi"}]}"#).unwrap();
        assert!(req.message.is_empty());
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].role, Role::User);
    }

    #[test]
    fn test_reply_serializes_iso8601_timestamp() {
        let reply = ChatReply {
            message: "hi".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&reply).unwrap();
        // chrono's serde emits RFC 3339 (an ISO-8601 profile)
        assert!(json.contains("T"));
        assert!(json.contains("\"timestamp\""));
    }
}
