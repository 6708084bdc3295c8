//! Composable CLI option groups.
//!
//! Each group is a clap `Args` struct that commands flatten into their own
//! parser. Every flag falls back to a `PROVIDE_*` environment variable when
//! absent. Fields are `Option`/`bool` so "flag not given" stays
//! distinguishable from an explicit value, and each group knows how to fold
//! itself into a `SettingsUpdate`.

use std::path::PathBuf;

use clap::Args;
use clap::builder::FalseyValueParser;

use provide_core::settings::{LogFormat, LogLevel, SettingsError, SettingsUpdate};

/// Logging flags: level, file, and format.
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingOptions {
    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(
        long = "log-level",
        env = "PROVIDE_LOG_LEVEL",
        global = true,
        value_name = "LEVEL",
        value_parser = parse_log_level
    )]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file instead of stderr
    #[arg(
        long = "log-file",
        env = "PROVIDE_LOG_FILE",
        global = true,
        value_name = "PATH"
    )]
    pub log_file: Option<PathBuf>,

    /// Log output format (text, json, compact)
    #[arg(
        long = "log-format",
        env = "PROVIDE_LOG_FORMAT",
        global = true,
        value_name = "FORMAT",
        value_parser = parse_log_format
    )]
    pub log_format: Option<LogFormat>,
}

impl LoggingOptions {
    /// Fold the provided flags into an update.
    pub fn apply(&self, update: &mut SettingsUpdate) {
        if let Some(level) = self.log_level {
            update.log_level = Some(level);
        }
        if let Some(path) = &self.log_file {
            update.log_file = Some(path.clone());
        }
        if let Some(format) = self.log_format {
            update.log_format = Some(format);
        }
    }
}

/// Configuration source flags: config file path and profile.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOptions {
    /// Path to the config file (default: <config_dir>/provide/config.toml)
    #[arg(
        long = "config",
        env = "PROVIDE_CONFIG",
        global = true,
        value_name = "PATH"
    )]
    pub config: Option<PathBuf>,

    /// Configuration profile to apply
    #[arg(
        long = "profile",
        env = "PROVIDE_PROFILE",
        global = true,
        value_name = "NAME"
    )]
    pub profile: Option<String>,
}

/// Output mode flags.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputOptions {
    /// Emit machine-readable JSON instead of human output
    #[arg(
        long = "json",
        env = "PROVIDE_JSON",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub json: bool,

    /// Disable ANSI colors in output
    #[arg(
        long = "no-color",
        env = "PROVIDE_NO_COLOR",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Use plain ASCII status markers instead of symbols
    #[arg(
        long = "no-emoji",
        env = "PROVIDE_NO_EMOJI",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_emoji: bool,
}

impl OutputOptions {
    /// Fold the provided flags into an update.
    ///
    /// Flags only ever switch a mode on; an absent flag leaves a
    /// config-file value in force.
    pub fn apply(&self, update: &mut SettingsUpdate) {
        if self.json {
            update.json_output = Some(true);
        }
        if self.no_color {
            update.no_color = Some(true);
        }
        if self.no_emoji {
            update.no_emoji = Some(true);
        }
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse().map_err(|e: SettingsError| e.to_string())
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse().map_err(|e: SettingsError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_apply_only_sets_given_flags() {
        let options = LoggingOptions {
            log_level: Some(LogLevel::Debug),
            log_file: None,
            log_format: None,
        };

        let mut update = SettingsUpdate::default();
        options.apply(&mut update);
        assert_eq!(update.log_level, Some(LogLevel::Debug));
        assert_eq!(update.log_file, None);
        assert_eq!(update.log_format, None);
    }

    #[test]
    fn output_apply_never_switches_modes_off() {
        let options = OutputOptions {
            json: false,
            no_color: true,
            no_emoji: false,
        };

        let mut update = SettingsUpdate::default();
        options.apply(&mut update);
        assert_eq!(update.json_output, None);
        assert_eq!(update.no_color, Some(true));
        assert_eq!(update.no_emoji, None);
    }

    #[test]
    fn level_parser_reports_the_bad_value() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(err.contains("loud"));
    }
}
