//! LLM error types

use thiserror::Error;

/// Errors that can occur while generating a plan
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Reply did not match the expected shape after {attempts} attempts: {message}")]
    MalformedReply { attempts: u32, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this error came from the reply-shape contract
    pub fn is_malformed_reply(&self) -> bool {
        matches!(self, LlmError::MalformedReply { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_malformed_reply() {
        let err = LlmError::MalformedReply {
            attempts: 3,
            message: "missing field `content`".to_string(),
        };
        assert!(err.is_malformed_reply());

        let err = LlmError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(!err.is_malformed_reply());
    }

    #[test]
    fn test_malformed_reply_display_includes_attempts() {
        let err = LlmError::MalformedReply {
            attempts: 3,
            message: "not json".to_string(),
        };
        assert!(err.to_string().contains("3 attempts"));
    }
}
