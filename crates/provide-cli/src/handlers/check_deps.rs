//! Check system dependencies handler.
//!
//! Probes the default dependency registry and displays the results in a
//! formatted, user-friendly way. Under `--json` the raw status records are
//! emitted instead. Missing required dependencies fail the command.

use provide_core::deps::{Dependency, DependencyProbe, DependencyStatus, UNKNOWN_VERSION};
use provide_probe::default_registry;

use crate::bootstrap::CliContext;
use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Output styling derived from the effective settings.
struct Style {
    color: bool,
    plain_markers: bool,
}

impl Style {
    const fn from_context(ctx: &CliContext) -> Self {
        Self {
            color: !ctx.settings.no_color,
            plain_markers: ctx.settings.no_emoji,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn status_text(&self, dep: &Dependency) -> (&'static str, String) {
        match &dep.status {
            DependencyStatus::Present { version } => {
                let text = if version == UNKNOWN_VERSION {
                    if self.plain_markers {
                        "[ok] installed".to_string()
                    } else {
                        "\u{2713} installed".to_string()
                    }
                } else if self.plain_markers {
                    format!("[ok] v{version}")
                } else {
                    format!("\u{2713} v{version}")
                };
                (GREEN, text)
            }
            DependencyStatus::Missing => {
                let code = if dep.required { RED } else { YELLOW };
                let text = if self.plain_markers {
                    "[missing]"
                } else if dep.required {
                    "\u{2717} missing"
                } else {
                    "\u{25cb} missing"
                };
                (code, text.to_string())
            }
        }
    }

    /// Render the status column. The text is padded before painting so the
    /// escape bytes do not count toward the column width.
    fn status_cell(&self, dep: &Dependency) -> String {
        let (code, text) = self.status_text(dep);
        self.paint(code, &format!("{text:<22}"))
    }
}

/// Execute the check-deps command.
///
/// Returns `Ok(())` when all required dependencies are present; an error
/// (exit 1) otherwise.
pub fn execute(ctx: &CliContext, probe: &dyn DependencyProbe) -> Result<(), CliError> {
    let specs = default_registry();
    let deps = probe.check_all(&specs);

    if ctx.settings.json_output {
        let rendered =
            serde_json::to_string_pretty(&deps).map_err(|e| CliError::Other(e.to_string()))?;
        println!("{rendered}");
        return summarize(&deps);
    }

    let style = Style::from_context(ctx);

    println!(
        "{}\n",
        style.paint(BOLD, &style.paint(BLUE, "Checking system dependencies..."))
    );
    println!(
        "{}",
        style.paint(
            BOLD,
            &format!("  {:<14} {:<22} {:<40}", "DEPENDENCY", "STATUS", "NOTES")
        )
    );
    println!("{}", "=".repeat(78));

    for dep in &deps {
        let req_indicator = if dep.required {
            style.paint(RED, "*")
        } else {
            " ".to_string()
        };
        println!(
            "{req_indicator} {:<14} {} {}",
            dep.name,
            style.status_cell(dep),
            dep.description
        );
    }
    println!("{}", "=".repeat(78));

    let missing_required: Vec<&Dependency> = deps
        .iter()
        .filter(|d| d.required && !d.available())
        .collect();
    let present_required = deps.iter().filter(|d| d.required && d.available()).count();
    let total_required = deps.iter().filter(|d| d.required).count();

    if missing_required.is_empty() {
        println!(
            "{} ({present_required}/{total_required})",
            style.paint(GREEN, "All required dependencies are installed!")
        );
    } else {
        println!(
            "{} ({present_required}/{total_required})",
            style.paint(
                RED,
                &format!("{} required dependencies are missing.", missing_required.len())
            )
        );
        println!();
        for dep in &missing_required {
            if let Some(hint) = &dep.install_hint {
                println!("  {}: {hint}", dep.name);
            }
        }
    }

    summarize(&deps)
}

fn summarize(deps: &[Dependency]) -> Result<(), CliError> {
    let missing = deps.iter().filter(|d| d.required && !d.available()).count();
    if missing == 0 {
        Ok(())
    } else {
        Err(CliError::Other(format!(
            "{missing} required dependencies are missing"
        )))
    }
}
