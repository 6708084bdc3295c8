//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global option groups and
//! dispatches to subcommands. clap's built-in version flag is disabled so the
//! version line renders in the fixed `"{prog} version {version}"` form.

use clap::{ArgAction, Parser};

use crate::commands::Commands;
use crate::options::{ConfigOptions, LoggingOptions, OutputOptions};

/// Command-line interface definition for the provide foundation tool.
#[derive(Debug, Parser)]
#[command(name = "provide")]
#[command(about = "Application foundation utilities")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    #[command(flatten)]
    pub logging: LoggingOptions,

    #[command(flatten)]
    pub config: ConfigOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The fixed version line printed by `--version`.
pub fn version_string(prog_name: &str) -> String {
    format!("{prog_name} version {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use provide_core::settings::{LogFormat, LogLevel};

    #[test]
    fn cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_the_subcommand() {
        let cli = Cli::parse_from(["provide", "--log-level", "DEBUG", "check-deps"]);
        assert_eq!(cli.logging.log_level, Some(LogLevel::Debug));

        let cli = Cli::parse_from(["provide", "check-deps", "--log-format", "json", "--json"]);
        assert_eq!(cli.logging.log_format, Some(LogFormat::Json));
        assert!(cli.output.json);
    }

    #[test]
    fn bad_log_level_is_a_usage_error() {
        let result = Cli::try_parse_from(["provide", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn version_line_has_the_fixed_shape() {
        assert_eq!(
            version_string("provide"),
            format!("provide version {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["provide"]);
        assert!(cli.command.is_none());
        assert!(!cli.version);
    }
}
