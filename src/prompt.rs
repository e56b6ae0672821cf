//! Plan request builder
//!
//! Assembles the ordered messages for one plan generation: fixed system
//! instruction, then the stringified profile payload, then the free-text
//! revision. Ordering matters - the revision comes last so the model treats
//! it as the most recent instruction.

use crate::llm::{CompletionRequest, Message};

/// Fixed system instruction for every plan request
pub const SYSTEM_PROMPT: &str = "Create a diet plan for today based on the user's calorie and \
     macronutrient targets and their number of meals per day.";

/// Build a completion request from the opaque profile payload and user input
///
/// `user_input` is forwarded verbatim - no truncation or sanitization - and
/// may be empty on the very first call of a session.
pub fn build_plan_request(user_profile: &serde_json::Value, user_input: &str, max_tokens: u32) -> CompletionRequest {
    CompletionRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        messages: vec![
            Message::user(format!("User profile: {}", user_profile)),
            Message::user(user_input),
        ],
        max_tokens,
    }
}
