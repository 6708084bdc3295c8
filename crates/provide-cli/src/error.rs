//! CLI-specific error types and exit-code mapping.
//!
//! Every failure reaching the dispatcher is a `CliError`; `exit_code`
//! keeps the process exit deterministic: 1 for any ordinary failure, 2 for
//! argument misuse, 130 for an interrupt.

use provide_core::config::ConfigError;
use provide_core::error::{CoreError, ProcessError};
use provide_core::params::HintError;
use provide_core::settings::SettingsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing or usage error.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// Configuration error (config file, profile, settings validation).
    #[error("{0}")]
    Config(String),

    /// Process execution error.
    #[error("{0}")]
    Process(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("{0}")]
    Io(String),

    /// The user interrupted the command.
    #[error("Interrupted by user")]
    Interrupted,

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 1: general error
    /// - 2: misuse of the command line (invalid arguments)
    /// - 130: interrupted (128 + SIGINT)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Interrupted => 130,
            Self::Config(_) | Self::Process(_) | Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Process(process_err) => Self::Process(process_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Config(config_err) => Self::Config(config_err.to_string()),
            CoreError::Hint(hint_err) => Self::Usage(hint_err.to_string()),
            CoreError::Validation(msg) => Self::Usage(msg),
            CoreError::Internal(msg) => Self::Other(msg),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ProcessError> for CliError {
    fn from(err: ProcessError) -> Self {
        Self::Process(err.to_string())
    }
}

impl From<HintError> for CliError {
    fn from(err: HintError) -> Self {
        Self::Usage(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            Self::Interrupted
        } else {
            Self::Io(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Other("boom".into()).exit_code(), 1);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 1);
        assert_eq!(CliError::Usage("bad flag".into()).exit_code(), 2);
        assert_eq!(CliError::Interrupted.exit_code(), 130);
    }

    #[test]
    fn interrupted_io_maps_to_interrupted() {
        let io_err = std::io::Error::from(std::io::ErrorKind::Interrupted);
        assert!(matches!(CliError::from(io_err), CliError::Interrupted));

        let other = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(CliError::from(other), CliError::Io(_)));
    }

    #[test]
    fn core_errors_keep_their_message() {
        let err: CliError = CoreError::Internal("Test error".into()).into();
        assert_eq!(err.to_string(), "Test error");
        assert_eq!(err.exit_code(), 1);
    }
}
