//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// dietplan - interactive daily diet plan generator
#[derive(Debug, Parser)]
#[command(
    name = "dietplan",
    about = "Generate and refine a daily diet plan from your profile",
    version,
    after_help = "Logs are written to: ~/.local/share/dietplan/logs/dietplan.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Path to the profile document (overrides the config value)
    #[arg(short, long, help = "Path to the user profile JSON file")]
    pub profile: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, help = "Log level for the session log file")]
    pub log_level: Option<String>,
}
