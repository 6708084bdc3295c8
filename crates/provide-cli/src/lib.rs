#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use dotenvy as _;

pub mod bootstrap;
pub mod builder;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod options;
pub mod parser;
pub mod run;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, resolve_settings};
pub use builder::{BuildError, command_from_specs};
pub use commands::{Commands, ConfigCommand};
pub use error::CliError;
pub use logging::init_logging;
pub use options::{ConfigOptions, LoggingOptions, OutputOptions};
pub use parser::{Cli, version_string};
pub use run::{render_failure, run};
