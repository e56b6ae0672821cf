//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, PlanReply};

/// Stateless LLM client - each call is independent
///
/// This is the single choke point between the session and the model: an
/// implementation either returns a reply that satisfies the declared shape
/// or a typed failure, never a partially valid value.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one completion request and return the validated reply
    async fn generate(&self, request: CompletionRequest) -> Result<PlanReply, LlmError>;
}
