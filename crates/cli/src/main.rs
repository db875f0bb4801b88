//! Keymapper CLI - headless companion to the TUI.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Execute export/import/check/apply/restart against the daemon
//!   configuration via the shared core library.
//!
//! Does NOT handle:
//! - Interactive editing (see `crates/tui`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Failures exit with a structured code (see `error` module).

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = dispatch::run_command(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(error::exit_code_for(&e).as_i32());
    }
}
