//! OpenAI API client implementation
//!
//! Implements the LlmClient trait for OpenAI's Chat Completions API with a
//! structured-output contract: every request declares the reply schema and
//! the raw output is re-requested (bounded by attempt count) until it parses.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{CompletionRequest, LlmClient, LlmError, PlanReply};
use crate::config::LlmConfig;

/// OpenAI API client
pub struct OpenAiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    max_attempts: u32,
}

impl OpenAiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
            max_attempts: config.max_attempts.max(1),
        })
    }

    /// Build the request body for the OpenAI API
    ///
    /// The system prompt becomes the first message and the reply schema is
    /// declared via `response_format` so the model emits the expected shape.
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];

        messages.extend(request.messages.iter().map(|msg| {
            serde_json::json!({
                "role": msg.role.as_str(),
                "content": msg.content,
            })
        }));

        serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "messages": messages,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "plan_reply",
                    "strict": true,
                    "schema": PlanReply::json_schema(),
                }
            },
        })
    }

    /// Send one request and return the raw assistant message content
    async fn request_once(&self, body: &serde_json::Value) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, message: text });
        }

        let api_response: OpenAiResponse = response.json().await?;
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
    }

    /// Parse raw assistant output into the declared reply shape
    fn parse_reply(raw: &str) -> Result<PlanReply, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: CompletionRequest) -> Result<PlanReply, LlmError> {
        debug!(model = %self.model, max_tokens = request.max_tokens, "generate: called");
        let body = self.build_request_body(&request);

        let mut last_parse_error = String::new();
        for attempt in 1..=self.max_attempts {
            let raw = match self.request_once(&body).await {
                Ok(raw) => raw,
                Err(LlmError::InvalidResponse(msg)) => {
                    // Empty choices counts against the shape budget
                    warn!(attempt, %msg, "generate: reply had no content, retrying");
                    last_parse_error = msg;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match Self::parse_reply(&raw) {
                Ok(reply) => {
                    debug!(attempt, "generate: reply accepted");
                    return Ok(reply);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "generate: reply failed shape validation, retrying");
                    last_parse_error = e.to_string();
                }
            }
        }

        Err(LlmError::MalformedReply {
            attempts: self.max_attempts,
            message: last_parse_error,
        })
    }
}

// OpenAI API response types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}
