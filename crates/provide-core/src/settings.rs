//! Settings domain types and validation.
//!
//! The [`Settings`] struct is the shared data behind the CLI context: it is
//! constructed once during bootstrap from defaults, the config file, and
//! parsed flags, then handed to command handlers read-only.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string for a tracing env-filter.
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(SettingsError::InvalidLogLevel(s.to_string())),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable full format.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
    /// Abbreviated single-line format.
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Compact => "compact",
        };
        f.write_str(name)
    }
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(SettingsError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Application settings shared by all command handlers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Minimum log level to emit.
    pub log_level: LogLevel,

    /// File to append logs to (stderr when unset).
    pub log_file: Option<PathBuf>,

    /// Log output format.
    pub log_format: LogFormat,

    /// Config file the settings were resolved from, when one was used.
    pub config_path: Option<PathBuf>,

    /// Active configuration profile, when one was selected.
    pub profile: Option<String>,

    /// Emit machine-readable JSON instead of human output.
    pub json_output: bool,

    /// Disable ANSI colors in output.
    pub no_color: bool,

    /// Use plain ASCII status markers instead of symbols.
    pub no_emoji: bool,
}

/// Partial settings update.
///
/// Each field is `Some` to set the value and `None` to leave it alone.
/// Flags can only be switched on this way; there is no flag that expresses
/// "reset to default", so a single `Option` level is enough.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsUpdate {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
    pub json_output: Option<bool>,
    pub no_color: Option<bool>,
    pub no_emoji: Option<bool>,
}

impl SettingsUpdate {
    /// True when no field would change anything.
    pub const fn is_empty(&self) -> bool {
        self.log_level.is_none()
            && self.log_file.is_none()
            && self.log_format.is_none()
            && self.json_output.is_none()
            && self.no_color.is_none()
            && self.no_emoji.is_none()
    }
}

impl Settings {
    /// Merge an update into these settings, only touching provided fields.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(level) = update.log_level {
            self.log_level = level;
        }
        if let Some(path) = &update.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(format) = update.log_format {
            self.log_format = format;
        }
        if let Some(json) = update.json_output {
            self.json_output = json;
        }
        if let Some(no_color) = update.no_color {
            self.no_color = no_color;
        }
        if let Some(no_emoji) = update.no_emoji {
            self.no_emoji = no_emoji;
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid log level '{0}' (expected trace, debug, info, warn, or error)")]
    InvalidLogLevel(String),

    #[error("Invalid log format '{0}' (expected text, json, or compact)")]
    InvalidLogFormat(String),

    #[error("Profile name cannot be empty")]
    EmptyProfile,

    #[error("Log file {} is a directory", .0.display())]
    LogFileIsDirectory(PathBuf),

    #[error("Log file directory {} does not exist", .0.display())]
    LogFileParentMissing(PathBuf),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(profile) = &settings.profile {
        if profile.trim().is_empty() {
            return Err(SettingsError::EmptyProfile);
        }
    }

    if let Some(log_file) = &settings.log_file {
        if log_file.is_dir() {
            return Err(SettingsError::LogFileIsDirectory(log_file.clone()));
        }
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(SettingsError::LogFileParentMissing(parent.to_path_buf()));
            }
        }
    }

    Ok(())
}
