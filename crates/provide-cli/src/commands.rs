//! Subcommand definitions.

use clap::Subcommand;

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check optional system dependencies and print a diagnostic report
    CheckDeps,

    /// Configuration inspection
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration command variants.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective settings after config file, profile, env, and flags
    Show,
}
