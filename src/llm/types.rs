//! LLM request/response types
//!
//! These types model the OpenAI Chat Completions API but stay small enough
//! to be provider-agnostic.

use serde::{Deserialize, Serialize};

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction sent as the first message
    pub system_prompt: String,

    /// Ordered user/assistant messages following the system instruction
    pub messages: Vec<Message>,

    /// Max tokens for the response (from config)
    pub max_tokens: u32,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name used by the Chat Completions API
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// The declared shape a model reply must satisfy to be accepted
///
/// The client attaches a JSON-schema rendering of this type to every request
/// and refuses to return anything that does not parse into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReply {
    /// The generated diet plan text for today
    pub content: String,

    /// Optional advisory message to the user; never persisted
    #[serde(default)]
    pub optional_message: Option<String>,
}

impl PlanReply {
    /// JSON schema for the reply shape, sent as the response format contract
    pub fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The updated diet plan for the user based on their profile."
                },
                "optional_message": {
                    "type": ["string", "null"],
                    "description": "Optional message to the user."
                }
            },
            "required": ["content", "optional_message"],
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Hi there");
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_plan_reply_deserialize_full() {
        let reply: PlanReply =
            serde_json::from_str(r#"{"content": "Breakfast: oats", "optional_message": "Stay hydrated"}"#).unwrap();
        assert_eq!(reply.content, "Breakfast: oats");
        assert_eq!(reply.optional_message.as_deref(), Some("Stay hydrated"));
    }

    #[test]
    fn test_plan_reply_deserialize_without_message() {
        let reply: PlanReply = serde_json::from_str(r#"{"content": "Lunch: salad"}"#).unwrap();
        assert_eq!(reply.content, "Lunch: salad");
        assert!(reply.optional_message.is_none());
    }

    #[test]
    fn test_plan_reply_missing_content_rejected() {
        let result = serde_json::from_str::<PlanReply>(r#"{"optional_message": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_reply_schema_requires_content() {
        let schema = PlanReply::json_schema();
        assert_eq!(schema["type"], "object");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"content"));
    }
}
