//! CLI entry point - the composition root.
//!
//! Environment loading, parsing, and dispatch happen here; everything else
//! receives the composed context.

use clap::Parser;

use provide_cli::{Cli, run};

fn main() {
    // Load environment variables (PROVIDE_* fallbacks may live in .env)
    dotenvy::dotenv().ok();

    // Parse CLI arguments (usage errors exit 2 via clap)
    let cli = Cli::parse();

    std::process::exit(run(&cli));
}
