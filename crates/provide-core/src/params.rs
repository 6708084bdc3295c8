//! Parameter descriptors for CLI generation.
//!
//! A command's parameters are described as plain data: each parameter has a
//! declared annotation (concrete kind, optionality, metadata carrying an
//! optional rendering hint), a default, and a name. [`describe_params`]
//! turns a [`CommandSignature`] into the transient [`ParamSpec`] records the
//! CLI-building layer consumes immediately.

use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Parameter names that carry the shared context rather than user input.
const RESERVED_PARAMS: &[&str] = &["ctx"];

/// Concrete value type used for flag generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
    Float,
    Bool,
    Path,
}

/// How a parameter should be rendered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliHint {
    /// Render as a named `--flag`.
    Option,
    /// Render as a positional argument.
    Argument,
}

/// Hint validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("Invalid CLI hint '{value}' (expected 'option' or 'argument')")]
    InvalidHint { value: String },
}

impl FromStr for CliHint {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "option" => Ok(Self::Option),
            "argument" => Ok(Self::Argument),
            _ => Err(HintError::InvalidHint {
                value: s.to_string(),
            }),
        }
    }
}

/// A declared parameter type: concrete kind, optionality, and metadata.
///
/// Metadata is the annotation-wrapper payload; its first entry, when present,
/// must be a valid rendering hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub kind: ParamKind,
    pub optional: bool,
    pub metadata: Vec<String>,
}

impl TypeAnnotation {
    /// A plain required annotation of the given kind.
    pub const fn new(kind: ParamKind) -> Self {
        Self {
            kind,
            optional: false,
            metadata: Vec::new(),
        }
    }

    /// Mark the annotation as optional (`Option<T>`-shaped).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach metadata entries.
    #[must_use]
    pub fn with_metadata<I, S>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = metadata.into_iter().map(Into::into).collect();
        self
    }
}

/// Extract the concrete kind and rendering hint from an annotation.
///
/// No metadata means no hint. A first metadata entry that is not a valid
/// hint is an error.
pub fn extract_cli_hint(
    annotation: &TypeAnnotation,
) -> Result<(ParamKind, Option<CliHint>), HintError> {
    match annotation.metadata.first() {
        Some(raw) => {
            let hint = raw.parse::<CliHint>()?;
            Ok((annotation.kind, Some(hint)))
        }
        None => Ok((annotation.kind, None)),
    }
}

/// A raw declared parameter of a command signature.
#[derive(Debug, Clone, PartialEq)]
pub struct RawParam {
    pub name: String,
    pub annotation: TypeAnnotation,
    pub default: Option<Value>,
}

impl RawParam {
    pub fn new(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            default: None,
        }
    }

    /// Attach a default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A command signature: name plus ordered declared parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSignature {
    pub name: String,
    pub params: Vec<RawParam>,
}

impl CommandSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a declared parameter.
    #[must_use]
    pub fn param(mut self, param: RawParam) -> Self {
        self.params.push(param);
        self
    }
}

/// Fully resolved parameter descriptor, consumed by the CLI builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub annotation: TypeAnnotation,
    pub kind: ParamKind,
    pub default: Option<Value>,
    pub required: bool,
    pub hint: Option<CliHint>,
}

/// Resolve a command signature into parameter descriptors.
///
/// Skips reserved context-carrier names, resolves the concrete kind, extracts
/// the rendering hint, and marks parameters with a default or an optional
/// annotation as not required.
pub fn describe_params(signature: &CommandSignature) -> Result<Vec<ParamSpec>, HintError> {
    let mut specs = Vec::with_capacity(signature.params.len());

    for param in &signature.params {
        if RESERVED_PARAMS.contains(&param.name.as_str()) {
            continue;
        }

        let (kind, hint) = extract_cli_hint(&param.annotation)?;
        let required = param.default.is_none() && !param.annotation.optional;

        specs.push(ParamSpec {
            name: param.name.clone(),
            annotation: param.annotation.clone(),
            kind,
            default: param.default.clone(),
            required,
            hint,
        });
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_extraction_on_annotated_str() {
        let annotation = TypeAnnotation::new(ParamKind::Str).with_metadata(["option"]);
        assert_eq!(
            extract_cli_hint(&annotation),
            Ok((ParamKind::Str, Some(CliHint::Option)))
        );
    }

    #[test]
    fn invalid_hint_metadata_is_rejected() {
        let annotation = TypeAnnotation::new(ParamKind::Str).with_metadata(["banana"]);
        assert_eq!(
            extract_cli_hint(&annotation),
            Err(HintError::InvalidHint {
                value: "banana".to_string()
            })
        );
    }

    #[test]
    fn bare_annotation_has_no_hint() {
        let annotation = TypeAnnotation::new(ParamKind::Int);
        assert_eq!(extract_cli_hint(&annotation), Ok((ParamKind::Int, None)));
    }

    #[test]
    fn describe_skips_context_carrier() {
        let signature = CommandSignature::new("deploy")
            .param(RawParam::new("ctx", TypeAnnotation::new(ParamKind::Str)))
            .param(RawParam::new("target", TypeAnnotation::new(ParamKind::Str)));

        let specs = describe_params(&signature).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "target");
        assert!(specs[0].required);
    }

    #[test]
    fn defaults_and_optionals_are_not_required() {
        let signature = CommandSignature::new("serve")
            .param(
                RawParam::new("port", TypeAnnotation::new(ParamKind::Int)).with_default(8080),
            )
            .param(RawParam::new(
                "host",
                TypeAnnotation::new(ParamKind::Str).optional(),
            ));

        let specs = describe_params(&signature).unwrap();
        assert!(!specs[0].required);
        assert_eq!(specs[0].default, Some(Value::from(8080)));
        assert!(!specs[1].required);
        assert_eq!(specs[1].default, None);
    }

    #[test]
    fn argument_hint_flows_through() {
        let signature = CommandSignature::new("add").param(RawParam::new(
            "path",
            TypeAnnotation::new(ParamKind::Path).with_metadata(["argument"]),
        ));

        let specs = describe_params(&signature).unwrap();
        assert_eq!(specs[0].hint, Some(CliHint::Argument));
        assert_eq!(specs[0].kind, ParamKind::Path);
    }

    #[test]
    fn invalid_hint_fails_the_whole_description() {
        let signature = CommandSignature::new("bad").param(RawParam::new(
            "x",
            TypeAnnotation::new(ParamKind::Str).with_metadata(["flag"]),
        ));
        assert!(describe_params(&signature).is_err());
    }
}
