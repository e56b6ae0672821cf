//! dietplan - interactive daily diet plan generator
//!
//! CLI entry point: load config, build the LLM client, and run the session.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use dietplan::cli::Cli;
use dietplan::config::Config;
use dietplan::llm::create_client;
use dietplan::profile::ProfileStore;
use dietplan::session::Session;

/// Initialize file logging
///
/// stdout is the interactive surface, so logs go to a file under the user
/// data directory instead.
fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dietplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("dietplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    let profile_path = cli.profile.unwrap_or_else(|| config.profile.path.clone());
    info!(model = %config.llm.model, profile = %profile_path.display(), "Starting session");

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let store = ProfileStore::new(&profile_path);

    let mut session = Session::open(llm, store, config.llm.max_tokens)?;
    session.run().await
}
