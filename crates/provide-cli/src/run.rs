//! Command dispatch and failure rendering.
//!
//! Any failure surfaces as a single line: `Error: {message}` (exit code
//! per [`CliError::exit_code`]), or the fixed `Interrupted by user` line
//! with exit 130.

use clap::CommandFactory;

use provide_probe::DefaultProbe;

use crate::bootstrap::bootstrap;
use crate::commands::Commands;
use crate::error::CliError;
use crate::handlers;
use crate::parser::{Cli, version_string};

/// Run a parsed CLI to completion, returning the process exit code.
pub fn run(cli: &Cli) -> i32 {
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", render_failure(&err));
            err.exit_code()
        }
    }
}

/// The user-facing line for a failure.
pub fn render_failure(err: &CliError) -> String {
    match err {
        CliError::Interrupted => "Interrupted by user".to_string(),
        other => format!("Error: {other}"),
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    if cli.version {
        println!("{}", version_string("provide"));
        return Ok(());
    }

    let ctx = bootstrap(cli)?;

    let Some(command) = &cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::CheckDeps => {
            // Probe injected at the composition root only
            let probe = DefaultProbe::new();
            handlers::check_deps::execute(&ctx, &probe)
        }
        Commands::Config { command } => handlers::config::execute(&ctx, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_render_with_the_error_prefix() {
        let err = CliError::Other("Test error".to_string());
        assert_eq!(render_failure(&err), "Error: Test error");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn interrupts_render_the_fixed_line() {
        assert_eq!(render_failure(&CliError::Interrupted), "Interrupted by user");
        assert_eq!(CliError::Interrupted.exit_code(), 130);
    }

    #[test]
    fn version_flag_short_circuits_bootstrap() {
        use clap::Parser;
        // An invalid --config would fail bootstrap; --version must win.
        let cli = Cli::parse_from(["provide", "--version", "--config", "/nope.toml"]);
        assert_eq!(run(&cli), 0);
    }
}
