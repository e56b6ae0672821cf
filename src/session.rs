//! Interactive plan session
//!
//! Orchestrates the full cycle: load profile, request the initial plan,
//! persist it under today's date, then loop on console revisions until the
//! user types `exit`. Persistence is write-through - every successful model
//! exchange overwrites today's entry and flushes the document to disk.

use std::sync::Arc;

use colored::Colorize;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::llm::LlmClient;
use crate::profile::{ProfileDocument, ProfileStore};
use crate::prompt::build_plan_request;

/// One line of console input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Terminate the session without a further model request
    Exit,
    /// Blank line, re-prompt
    Empty,
    /// Free-text revision forwarded verbatim to the model
    Revision(String),
}

/// Classify a raw console line
///
/// The literal token `exit` is case-insensitive with surrounding whitespace
/// trimmed; everything else trimmed-nonempty is a revision.
pub fn parse_input(line: &str) -> SessionInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        SessionInput::Empty
    } else if trimmed.eq_ignore_ascii_case("exit") {
        SessionInput::Exit
    } else {
        SessionInput::Revision(trimmed.to_string())
    }
}

/// One interactive session over a single profile document
///
/// The client and store are explicit inputs rather than process globals, so
/// multiple sessions could coexist in one address space if ever needed.
pub struct Session {
    llm: Arc<dyn LlmClient>,
    store: ProfileStore,
    profile: ProfileDocument,
    max_tokens: u32,
}

impl Session {
    /// Load the profile and open a session over it (fail-fast on error)
    pub fn open(llm: Arc<dyn LlmClient>, store: ProfileStore, max_tokens: u32) -> Result<Self> {
        let profile = store
            .load()
            .context(format!("Failed to load profile from {}", store.path().display()))?;

        Ok(Self {
            llm,
            store,
            profile,
            max_tokens,
        })
    }

    /// Today's date key in `YYYY-MM-DD` form (local time)
    pub fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    /// Stored plan text for today, if any
    pub fn plan_for_today(&self) -> Option<&str> {
        self.profile.plan_for(&Self::today())
    }

    /// Request a plan, persist it under today's date, and return its text
    ///
    /// Always overwrites today's entry. The document is only written after a
    /// successful reply, so a generation failure leaves the file untouched.
    pub async fn refresh_plan(&mut self, user_input: &str) -> Result<String> {
        let request = build_plan_request(&self.profile.user_profile, user_input, self.max_tokens);

        let reply = self
            .llm
            .generate(request)
            .await
            .context("Failed to generate diet plan")?;

        if let Some(message) = &reply.optional_message {
            debug!(%message, "Model attached an advisory message");
        }

        let today = Self::today();
        self.profile.set_plan(&today, &reply.content);
        self.store
            .save(&self.profile)
            .context(format!("Failed to save profile to {}", self.store.path().display()))?;

        info!(date = %today, "Stored diet plan");
        Ok(reply.content)
    }

    /// Run the interactive loop until `exit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        let plan = self.refresh_plan("").await?;
        println!("{}", "Diet plan for today:".bright_cyan().bold());
        println!("{}", plan);

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            println!();
            let readline = rl.readline(&format!(
                "{} ",
                "Enter adjustments or requests (or 'exit' to quit):".bright_green()
            ));

            match readline {
                Ok(line) => match parse_input(&line) {
                    SessionInput::Exit => break,
                    SessionInput::Empty => continue,
                    SessionInput::Revision(text) => {
                        let _ = rl.add_history_entry(&text);
                        let plan = self.refresh_plan(&text).await?;
                        println!();
                        println!("{}", "Updated diet plan:".bright_cyan().bold());
                        println!("{}", plan);
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show a new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye.");
        Ok(())
    }
}
