//! Tracing subscriber initialization from settings.
//!
//! The filter honors `RUST_LOG` when set, otherwise falls back to the
//! configured level. The fmt layer varies by `log_format`, writes to stderr
//! or an append-mode log file, and drops ANSI codes under `no_color`.
//! A second initialization (common in tests) is ignored.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use provide_core::settings::{LogFormat, Settings};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::CliError;

/// Initialize logging for the process.
pub fn init_logging(settings: &Settings) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_filter()));

    let layer = match &settings.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::Io(format!("Failed to open log file {}: {e}", path.display()))
                })?;
            fmt_layer(settings, Arc::new(file))
        }
        None => fmt_layer(settings, io::stderr as fn() -> io::Stderr),
    };

    // Already-initialized is not an error; keep the first subscriber.
    let _ = tracing_subscriber::registry().with(layer).with(filter).try_init();
    Ok(())
}

fn fmt_layer<W>(settings: &Settings, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(!settings.no_color)
        .with_target(false);

    match settings.log_format {
        LogFormat::Text => base.boxed(),
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}
