//! dietplan - interactive daily diet plan generator
//!
//! Generates a diet plan for today from a per-user JSON profile by calling
//! an LLM completion endpoint with a structured-output contract, persists
//! the result under today's date, and refines it in a console loop on
//! free-text corrections.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait, OpenAI implementation, and reply contract
//! - [`profile`] - date-keyed profile document storage
//! - [`prompt`] - plan request construction
//! - [`session`] - the interactive request/persist/print loop
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod profile;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{Config, LlmConfig, ProfileConfig};
pub use llm::{CompletionRequest, LlmClient, LlmError, Message, OpenAiClient, PlanReply, Role, create_client};
pub use profile::{ProfileDocument, ProfileError, ProfileStore};
pub use prompt::{SYSTEM_PROMPT, build_plan_request};
pub use session::{Session, SessionInput, parse_input};
