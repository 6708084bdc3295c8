#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod deps;
pub mod error;
pub mod params;
pub mod settings;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigFile, default_config_path, load_config};
pub use deps::{
    Dependency, DependencyProbe, DependencyProbeKind, DependencySpec, DependencyStatus,
    UNKNOWN_VERSION,
};
pub use error::{CoreError, OutputCapture, ProcessError, ProcessErrorKind};
pub use params::{
    CliHint, CommandSignature, HintError, ParamKind, ParamSpec, RawParam, TypeAnnotation,
    describe_params, extract_cli_hint,
};
pub use settings::{
    LogFormat, LogLevel, Settings, SettingsError, SettingsUpdate, validate_settings,
};
