//! Cross-module contract tests: process errors surfacing through CoreError,
//! and settings resolved from a config file with a profile overlay.

use provide_core::{
    CoreError, LogFormat, LogLevel, ProcessError, load_config, validate_settings,
};
use std::io::Write;

#[test]
fn process_error_surfaces_through_core_error() {
    let err = ProcessError::command_not_found("terraform")
        .with_context("working_dir", "/srv/deploy");
    let core: CoreError = err.into();

    assert_eq!(core.to_string(), "Command not found: terraform\n  Command: terraform");
    match core {
        CoreError::Process(inner) => {
            assert_eq!(inner.code(), "COMMAND_NOT_FOUND");
            assert_eq!(
                inner.context().get("working_dir"),
                Some(&serde_json::Value::from("/srv/deploy"))
            );
        }
        other => panic!("expected process error, got {other}"),
    }
}

#[test]
fn timeout_error_reports_the_limit() {
    let err = ProcessError::timeout("sleep 60", Some(30.0)).with_exit_code(124);
    assert_eq!(err.code(), "PROCESS_TIMEOUT");
    let rendered = err.to_string();
    assert!(rendered.contains("timed out after 30 seconds"));
    assert!(rendered.contains("Exit code: 124"));
}

#[test]
fn config_file_resolution_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
        [settings]
        log_level = "warn"

        [profiles.ci]
        log_format = "json"
        no_color = true
        "#
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    let settings = config.resolve(Some("ci")).unwrap();

    assert_eq!(settings.log_level, LogLevel::Warn);
    assert_eq!(settings.log_format, LogFormat::Json);
    assert!(settings.no_color);
    assert!(validate_settings(&settings).is_ok());
}
