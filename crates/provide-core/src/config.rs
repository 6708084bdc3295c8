//! Configuration file loading with profile overlays.
//!
//! A config file is TOML with a `[settings]` table and optional
//! `[profiles.<name>]` tables holding partial overrides:
//!
//! ```toml
//! [settings]
//! log_level = "info"
//!
//! [profiles.dev]
//! log_level = "debug"
//! no_color = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::settings::{Settings, SettingsUpdate};

/// Configuration file error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unknown profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    /// Base settings (the `[settings]` table).
    pub settings: Settings,

    /// Named partial overrides (the `[profiles.<name>]` tables).
    pub profiles: BTreeMap<String, SettingsUpdate>,
}

impl ConfigFile {
    /// Resolve effective settings, overlaying the named profile when given.
    ///
    /// An unknown profile name is an error listing the available names.
    pub fn resolve(&self, profile: Option<&str>) -> Result<Settings, ConfigError> {
        let mut settings = self.settings.clone();

        if let Some(name) = profile {
            let update =
                self.profiles
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownProfile {
                        name: name.to_string(),
                        available: if self.profiles.is_empty() {
                            "none".to_string()
                        } else {
                            self.profiles
                                .keys()
                                .map(String::as_str)
                                .collect::<Vec<_>>()
                                .join(", ")
                        },
                    })?;
            settings.merge(update);
            settings.profile = Some(name.to_string());
        }

        Ok(settings)
    }
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), profiles = config.profiles.len(), "loaded config file");
    Ok(config)
}

/// Default config file location: `<config_dir>/provide/config.toml`.
///
/// Returns `None` when the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("provide").join("config.toml"))
}
