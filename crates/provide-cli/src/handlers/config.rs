//! Configuration inspection handler.

use crate::bootstrap::CliContext;
use crate::commands::ConfigCommand;
use crate::error::CliError;

/// Execute a configuration command.
pub fn execute(ctx: &CliContext, command: &ConfigCommand) -> Result<(), CliError> {
    match command {
        ConfigCommand::Show => show(ctx),
    }
}

/// Print the effective settings after all sources are folded in.
fn show(ctx: &CliContext) -> Result<(), CliError> {
    let settings = &ctx.settings;

    if settings.json_output {
        let rendered =
            serde_json::to_string_pretty(settings).map_err(|e| CliError::Other(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Effective settings:");
    println!("  log_level:  {}", settings.log_level);
    println!(
        "  log_file:   {}",
        settings
            .log_file
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string())
    );
    println!("  log_format: {}", settings.log_format);
    println!(
        "  config:     {}",
        settings
            .config_path
            .as_ref()
            .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string())
    );
    println!(
        "  profile:    {}",
        settings.profile.as_deref().unwrap_or("-")
    );
    println!("  json:       {}", settings.json_output);
    println!("  no_color:   {}", settings.no_color);
    println!("  no_emoji:   {}", settings.no_emoji);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use provide_core::settings::Settings;

    #[test]
    fn show_succeeds_in_both_modes() {
        let ctx = CliContext {
            settings: Settings::default(),
        };
        assert!(execute(&ctx, &ConfigCommand::Show).is_ok());

        let ctx = CliContext {
            settings: Settings {
                json_output: true,
                ..Settings::default()
            },
        };
        assert!(execute(&ctx, &ConfigCommand::Show).is_ok());
    }
}
