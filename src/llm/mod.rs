//! LLM client module
//!
//! Provides the completion client and the structured reply contract.

use std::sync::Arc;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAiClient;
pub use types::{CompletionRequest, Message, PlanReply, Role};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown LLM provider: '{}'. Supported: openai",
            other
        ))),
    }
}
