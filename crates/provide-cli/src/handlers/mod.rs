//! Command handlers.
//!
//! Handlers receive the composed `CliContext` (and any injected ports) and
//! never parse flags themselves.

pub mod check_deps;
pub mod config;
