//! CLI bootstrap - the composition root.
//!
//! This is the ONLY place where config file, profile, environment fallbacks,
//! and explicit flags are folded into the shared [`Settings`]. Command
//! handlers receive the composed [`CliContext`]; flag keys are consumed here
//! and never forwarded.
//!
//! Precedence, lowest to highest: built-in defaults, the config file's
//! `[settings]` table, the selected `[profiles.<name>]` overlay, environment
//! variables (resolved by clap at parse time), explicit flags.

use std::path::{Path, PathBuf};

use provide_core::config::{ConfigFile, default_config_path, load_config};
use provide_core::settings::{Settings, SettingsUpdate, validate_settings};
use tracing::debug;

use crate::error::CliError;
use crate::logging::init_logging;
use crate::parser::Cli;

/// Fully composed application context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Effective settings after all sources are folded in.
    pub settings: Settings,
}

impl CliContext {
    /// Access the effective settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the config file (an explicit `--config` path must exist; the
/// default path may be absent), applies the profile overlay, merges the
/// parsed option groups, validates, and initializes logging once.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let (config_file, config_path) = resolve_config_file(cli.config.config.as_deref())?;
    let settings = resolve_settings(cli, &config_file, config_path)?;

    init_logging(&settings)?;
    debug!(
        profile = settings.profile.as_deref().unwrap_or("-"),
        config = ?settings.config_path,
        "bootstrapped CLI context"
    );

    Ok(CliContext { settings })
}

/// Fold the parsed CLI over a config file into effective settings.
///
/// Split out of [`bootstrap`] so tests can compose settings without touching
/// the real filesystem or the global subscriber.
pub fn resolve_settings(
    cli: &Cli,
    config_file: &ConfigFile,
    config_path: Option<PathBuf>,
) -> Result<Settings, CliError> {
    let mut settings = config_file.resolve(cli.config.profile.as_deref())?;
    settings.config_path = config_path;

    let mut update = SettingsUpdate::default();
    cli.logging.apply(&mut update);
    cli.output.apply(&mut update);
    settings.merge(&update);

    validate_settings(&settings)?;
    Ok(settings)
}

fn resolve_config_file(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>), CliError> {
    match explicit {
        // An explicitly requested config file must load.
        Some(path) => Ok((load_config(path)?, Some(path.to_path_buf()))),
        // The default location is optional.
        None => match default_config_path() {
            Some(path) if path.exists() => Ok((load_config(&path)?, Some(path))),
            _ => Ok((ConfigFile::default(), None)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use provide_core::settings::{LogFormat, LogLevel};
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn flags_override_the_config_file() {
        let config =
            toml::from_str::<ConfigFile>("[settings]\nlog_level = \"warn\"").unwrap();
        let cli = parse(&["provide", "--log-level", "DEBUG", "check-deps"]);

        let settings = resolve_settings(&cli, &config, None).unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn profile_overlay_applies_between_file_and_flags() {
        let config = toml::from_str::<ConfigFile>(
            "[settings]\nlog_level = \"info\"\n[profiles.ci]\nlog_level = \"error\"\nno_color = true",
        )
        .unwrap();

        let cli = parse(&["provide", "--profile", "ci", "check-deps"]);
        let settings = resolve_settings(&cli, &config, None).unwrap();
        assert_eq!(settings.log_level, LogLevel::Error);
        assert!(settings.no_color);
        assert_eq!(settings.profile.as_deref(), Some("ci"));

        // A flag still beats the profile.
        let cli = parse(&["provide", "--profile", "ci", "--log-level", "trace"]);
        let settings = resolve_settings(&cli, &config, None).unwrap();
        assert_eq!(settings.log_level, LogLevel::Trace);
    }

    #[test]
    fn unknown_profile_is_a_config_error() {
        let cli = parse(&["provide", "--profile", "nope"]);
        let err = resolve_settings(&cli, &ConfigFile::default(), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn output_flags_land_in_settings() {
        let cli = parse(&["provide", "--json", "--no-color", "--no-emoji", "config", "show"]);
        let settings = resolve_settings(&cli, &ConfigFile::default(), None).unwrap();
        assert!(settings.json_output);
        assert!(settings.no_color);
        assert!(settings.no_emoji);
    }

    #[test]
    fn log_format_flag_applies() {
        let cli = parse(&["provide", "--log-format", "json"]);
        let settings = resolve_settings(&cli, &ConfigFile::default(), None).unwrap();
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn explicit_missing_config_file_fails_bootstrap() {
        let cli = parse(&["provide", "--config", "/definitely/not/here.toml"]);
        let err = bootstrap(&cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn explicit_config_file_is_loaded_and_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[settings]\nlog_level = \"error\"").unwrap();

        let path_str = path.to_str().unwrap();
        let cli = parse(&["provide", "--config", path_str]);
        let ctx = bootstrap(&cli).unwrap();
        assert_eq!(ctx.settings.log_level, LogLevel::Error);
        assert_eq!(ctx.settings.config_path.as_deref(), Some(path.as_path()));
    }
}
