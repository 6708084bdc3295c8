//! Runtime clap command generation from parameter descriptors.
//!
//! The consumer of `provide_core::params`: each [`ParamSpec`] becomes a clap
//! `Arg`. A param hinted as `Argument` is positional; `Option` or no hint
//! renders as a `--long` flag. Booleans are always optional flags.

use clap::{Arg, ArgAction, Command, value_parser};
use provide_core::params::{CliHint, ParamKind, ParamSpec};
use thiserror::Error;

/// Command construction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Duplicate parameter name '{0}'")]
    DuplicateParam(String),

    #[error("Boolean parameter '{0}' cannot be a positional argument")]
    BoolArgument(String),
}

/// Build a clap command from resolved parameter descriptors.
pub fn command_from_specs(
    name: &str,
    about: &str,
    specs: &[ParamSpec],
) -> Result<Command, BuildError> {
    let mut seen = std::collections::BTreeSet::new();
    let mut command = Command::new(name.to_string()).about(about.to_string());

    for spec in specs {
        if !seen.insert(spec.name.clone()) {
            return Err(BuildError::DuplicateParam(spec.name.clone()));
        }
        command = command.arg(arg_from_spec(spec)?);
    }

    Ok(command)
}

fn arg_from_spec(spec: &ParamSpec) -> Result<Arg, BuildError> {
    let positional = matches!(spec.hint, Some(CliHint::Argument));
    let mut arg = Arg::new(spec.name.clone());
    if !positional {
        arg = arg.long(spec.name.clone());
    }

    arg = match spec.kind {
        ParamKind::Bool => {
            if positional {
                return Err(BuildError::BoolArgument(spec.name.clone()));
            }
            return Ok(arg.action(ArgAction::SetTrue));
        }
        ParamKind::Str => arg.value_parser(value_parser!(String)),
        ParamKind::Int => arg.value_parser(value_parser!(i64)),
        ParamKind::Float => arg.value_parser(value_parser!(f64)),
        ParamKind::Path => arg.value_parser(value_parser!(std::path::PathBuf)),
    };

    match &spec.default {
        Some(default) => Ok(arg.default_value(render_default(default))),
        None => Ok(arg.required(spec.required)),
    }
}

fn render_default(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
