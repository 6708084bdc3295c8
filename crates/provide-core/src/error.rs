//! Structured process errors with stable error codes.
//!
//! All fields are set at construction (builder style) and never mutated
//! afterwards. `Display` renders a composite diagnostic: the base message
//! followed by sections for whichever of command, exit code, stdout, and
//! stderr are present.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Captured output of a process stream.
///
/// Keeps both the raw bytes and a lossily decoded text form, so callers can
/// inspect binary output while diagnostics stay printable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCapture {
    bytes: Vec<u8>,
    text: String,
}

impl OutputCapture {
    /// The raw captured bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The decoded text form (invalid UTF-8 replaced).
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<Vec<u8>> for OutputCapture {
    fn from(bytes: Vec<u8>) -> Self {
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Self { bytes, text }
    }
}

impl From<&[u8]> for OutputCapture {
    fn from(bytes: &[u8]) -> Self {
        bytes.to_vec().into()
    }
}

impl From<String> for OutputCapture {
    fn from(text: String) -> Self {
        Self {
            bytes: text.clone().into_bytes(),
            text,
        }
    }
}

impl From<&str> for OutputCapture {
    fn from(text: &str) -> Self {
        text.to_string().into()
    }
}

/// The category of a process failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessErrorKind {
    /// The process ran and failed.
    Failed,
    /// The command binary was not found.
    CommandNotFound,
    /// The process exceeded its time limit.
    Timeout {
        /// The limit that was exceeded, when known.
        seconds: Option<f64>,
    },
}

impl ProcessErrorKind {
    /// Stable error-code string for this kind.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Failed => "PROCESS_ERROR",
            Self::CommandNotFound => "COMMAND_NOT_FOUND",
            Self::Timeout { .. } => "PROCESS_TIMEOUT",
        }
    }
}

/// A process failure with structured diagnostic fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessError {
    message: String,
    kind: ProcessErrorKind,
    command: Option<String>,
    exit_code: Option<i32>,
    stdout: Option<OutputCapture>,
    stderr: Option<OutputCapture>,
    context: BTreeMap<String, serde_json::Value>,
}

impl ProcessError {
    /// A generic process failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ProcessErrorKind::Failed,
            command: None,
            exit_code: None,
            stdout: None,
            stderr: None,
            context: BTreeMap::new(),
        }
    }

    /// The command binary could not be found.
    pub fn command_not_found(command: impl Into<String>) -> Self {
        let command = command.into();
        let mut err = Self::new(format!("Command not found: {command}"));
        err.kind = ProcessErrorKind::CommandNotFound;
        err.command = Some(command);
        err
    }

    /// The process exceeded its time limit.
    pub fn timeout(command: impl Into<String>, seconds: Option<f64>) -> Self {
        let command = command.into();
        let message = match seconds {
            Some(secs) => format!("Process timed out after {secs} seconds"),
            None => "Process timed out".to_string(),
        };
        let mut err = Self::new(message);
        err.kind = ProcessErrorKind::Timeout { seconds };
        err.command = Some(command);
        err
    }

    /// Attach the command line that failed.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Attach the exit code.
    #[must_use]
    pub const fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    /// Attach captured stdout.
    #[must_use]
    pub fn with_stdout(mut self, stdout: impl Into<OutputCapture>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }

    /// Attach captured stderr.
    #[must_use]
    pub fn with_stderr(mut self, stderr: impl Into<OutputCapture>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// Attach a structured context entry.
    #[must_use]
    pub fn with_context(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// The base failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure category.
    pub const fn kind(&self) -> &ProcessErrorKind {
        &self.kind
    }

    /// Stable error-code string (`PROCESS_ERROR`, `COMMAND_NOT_FOUND`,
    /// `PROCESS_TIMEOUT`).
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The command line, when recorded.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The exit code, when recorded.
    pub const fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Captured stdout, when recorded.
    pub const fn stdout(&self) -> Option<&OutputCapture> {
        self.stdout.as_ref()
    }

    /// Captured stderr, when recorded.
    pub const fn stderr(&self) -> Option<&OutputCapture> {
        self.stderr.as_ref()
    }

    /// Structured context entries, in key order.
    pub const fn context(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.context
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(command) = &self.command {
            write!(f, "\n  Command: {command}")?;
        }
        if let Some(exit_code) = self.exit_code {
            write!(f, "\n  Exit code: {exit_code}")?;
        }
        if let Some(stdout) = &self.stdout {
            if !stdout.text().trim().is_empty() {
                write!(f, "\n  stdout: {}", stdout.text().trim_end())?;
            }
        }
        if let Some(stderr) = &self.stderr {
            if !stderr.text().trim().is_empty() {
                write!(f, "\n  stderr: {}", stderr.text().trim_end())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ProcessError {}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own error types (CLI exit codes, serialized
/// diagnostics).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Process operation failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Configuration file error.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// CLI hint validation error.
    #[error(transparent)]
    Hint(#[from] crate::params::HintError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
