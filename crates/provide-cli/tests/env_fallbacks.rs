//! End-to-end checks for the `PROVIDE_*` environment fallbacks and the
//! flag-over-environment precedence.
//!
//! clap resolves env fallbacks from the real process environment, so these
//! tests serialize mutations behind a lock.

use std::sync::{Mutex, MutexGuard};

use clap::Parser;
use provide_cli::{Cli, resolve_settings};
use provide_core::config::ConfigFile;
use provide_core::settings::{LogFormat, LogLevel};

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvGuard<'a> {
    keys: Vec<&'static str>,
    _lock: MutexGuard<'a, ()>,
}

impl EnvGuard<'_> {
    #[allow(unsafe_code)]
    fn set(vars: &[(&'static str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap();
        for (key, value) in vars {
            // Safe here: mutations are serialized and scoped to the guard.
            unsafe { std::env::set_var(key, value) };
        }
        Self {
            keys: vars.iter().map(|(key, _)| *key).collect(),
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard<'_> {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        for key in &self.keys {
            unsafe { std::env::remove_var(key) };
        }
    }
}

fn settings_for(args: &[&str]) -> provide_core::settings::Settings {
    let cli = Cli::parse_from(args);
    resolve_settings(&cli, &ConfigFile::default(), None).unwrap()
}

#[test]
fn log_level_flag_applies() {
    let settings = settings_for(&["provide", "--log-level", "DEBUG", "check-deps"]);
    assert_eq!(settings.log_level, LogLevel::Debug);
}

#[test]
fn log_level_env_fallback_applies() {
    let _env = EnvGuard::set(&[("PROVIDE_LOG_LEVEL", "ERROR")]);
    let settings = settings_for(&["provide", "check-deps"]);
    assert_eq!(settings.log_level, LogLevel::Error);
}

#[test]
fn flag_beats_environment() {
    let _env = EnvGuard::set(&[("PROVIDE_LOG_LEVEL", "ERROR")]);
    let settings = settings_for(&["provide", "--log-level", "warn", "check-deps"]);
    assert_eq!(settings.log_level, LogLevel::Warn);
}

#[test]
fn output_mode_env_fallbacks_apply() {
    let _env = EnvGuard::set(&[("PROVIDE_JSON", "1"), ("PROVIDE_NO_COLOR", "true")]);
    let settings = settings_for(&["provide", "check-deps"]);
    assert!(settings.json_output);
    assert!(settings.no_color);
    assert!(!settings.no_emoji);
}

#[test]
fn log_format_env_fallback_applies() {
    let _env = EnvGuard::set(&[("PROVIDE_LOG_FORMAT", "compact")]);
    let settings = settings_for(&["provide"]);
    assert_eq!(settings.log_format, LogFormat::Compact);
}

#[test]
fn profile_env_fallback_reaches_config_resolution() {
    let _env = EnvGuard::set(&[("PROVIDE_PROFILE", "ci")]);
    let config = toml::from_str::<ConfigFile>(
        "[profiles.ci]\nlog_level = \"trace\"",
    )
    .unwrap();

    let cli = Cli::parse_from(["provide"]);
    let settings = resolve_settings(&cli, &config, None).unwrap();
    assert_eq!(settings.log_level, LogLevel::Trace);
    assert_eq!(settings.profile.as_deref(), Some("ci"));
}
