//! Dependency-status records and the probe port.
//!
//! Core owns the trait and types (pure); `provide-probe` owns the
//! implementation (active probing via `Command::new`); the CLI injects the
//! probe at its composition root.

use serde::Serialize;

/// Version sentinel for a dependency that is present but whose version
/// could not be determined.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Represents the status of a system dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DependencyStatus {
    /// Dependency is installed and available.
    Present { version: String },
    /// Dependency is missing.
    Missing,
}

/// Information about a system dependency, produced by a probe and consumed
/// for diagnostic display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Name of the dependency (e.g., "git", "pkg-config").
    pub name: String,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// Description of what this dependency is used for.
    pub description: String,
    /// Whether this dependency is required or optional.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency (initially missing).
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency (initially missing).
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: false,
            install_hint: None,
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the dependency was found.
    pub const fn available(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }

    /// The detected version, `None` when the dependency is missing.
    pub fn version(&self) -> Option<&str> {
        match &self.status {
            DependencyStatus::Present { version } => Some(version),
            DependencyStatus::Missing => None,
        }
    }
}

/// How a dependency should be probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyProbeKind {
    /// An executable on PATH, queried with the given version arguments.
    Binary { version_args: Vec<String> },
    /// A system library known to pkg-config under the given name.
    Library { pkg_config_name: String },
}

/// A registry entry describing how to probe one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub kind: DependencyProbeKind,
    pub description: String,
    pub required: bool,
    pub install_hint: Option<String>,
}

impl DependencySpec {
    /// An executable probed with `--version`.
    pub fn binary(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DependencyProbeKind::Binary {
                version_args: vec!["--version".to_string()],
            },
            description: description.into(),
            required: false,
            install_hint: None,
        }
    }

    /// A system library probed via pkg-config.
    pub fn library(
        name: impl Into<String>,
        description: impl Into<String>,
        pkg_config_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: DependencyProbeKind::Library {
                pkg_config_name: pkg_config_name.into(),
            },
            description: description.into(),
            required: false,
            install_hint: None,
        }
    }

    /// Override the version arguments for a binary probe.
    #[must_use]
    pub fn with_version_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let DependencyProbeKind::Binary { version_args } = &mut self.kind {
            *version_args = args.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Mark the dependency as required.
    #[must_use]
    pub const fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Start a status record for this spec (status filled in by the probe).
    pub fn to_dependency(&self, status: DependencyStatus) -> Dependency {
        Dependency {
            name: self.name.clone(),
            status,
            description: self.description.clone(),
            required: self.required,
            install_hint: self.install_hint.clone(),
        }
    }
}

/// Port for probing system dependencies.
///
/// Implementations perform best-effort detection; probing never errors.
/// Failure of any step degrades to [`DependencyStatus::Missing`] or the
/// [`UNKNOWN_VERSION`] sentinel.
pub trait DependencyProbe: Send + Sync {
    /// Probe a single dependency.
    fn probe(&self, spec: &DependencySpec) -> Dependency;

    /// Probe every entry of a registry.
    fn check_all(&self, specs: &[DependencySpec]) -> Vec<Dependency> {
        specs.iter().map(|spec| self.probe(spec)).collect()
    }
}
