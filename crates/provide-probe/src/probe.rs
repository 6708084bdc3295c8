//! Default implementation of the `DependencyProbe` port.
//!
//! Binary dependencies are located on PATH and queried with their version
//! arguments; library dependencies go through `pkg-config --modversion`.
//! Probing is best-effort by contract: every failure degrades to `Missing`
//! or the `"unknown"` version sentinel, never an error.

use std::process::Command;

use provide_core::deps::{
    Dependency, DependencyProbe, DependencyProbeKind, DependencySpec, DependencyStatus,
    UNKNOWN_VERSION,
};
use tracing::debug;

use crate::version::{banner_text, extract_version};

/// Default probe: active detection via PATH lookup and command execution.
///
/// Construct this at the CLI composition root and pass it to handlers that
/// need dependency information.
#[derive(Debug, Default)]
pub struct DefaultProbe;

impl DefaultProbe {
    pub const fn new() -> Self {
        Self
    }

    fn probe_binary(name: &str, version_args: &[String]) -> DependencyStatus {
        let Ok(path) = which::which(name) else {
            debug!(tool = name, "not found on PATH");
            return DependencyStatus::Missing;
        };

        let version = Command::new(&path)
            .args(version_args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                extract_version(&banner_text(&stdout, &stderr))
            });

        // The binary exists even if the version flag misbehaves.
        DependencyStatus::Present {
            version: version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        }
    }

    fn probe_library(pkg_config_name: &str) -> DependencyStatus {
        let output = Command::new("pkg-config")
            .arg("--modversion")
            .arg(pkg_config_name)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let version = stdout.trim().lines().next().unwrap_or_default().to_string();
                DependencyStatus::Present {
                    version: if version.is_empty() {
                        UNKNOWN_VERSION.to_string()
                    } else {
                        version
                    },
                }
            }
            _ => {
                debug!(library = pkg_config_name, "pkg-config lookup failed");
                DependencyStatus::Missing
            }
        }
    }
}

impl DependencyProbe for DefaultProbe {
    fn probe(&self, spec: &DependencySpec) -> Dependency {
        let status = match &spec.kind {
            DependencyProbeKind::Binary { version_args } => {
                Self::probe_binary(&spec.name, version_args)
            }
            DependencyProbeKind::Library { pkg_config_name } => {
                Self::probe_library(pkg_config_name)
            }
        };
        spec.to_dependency(status)
    }
}
