//! Command-line driver for the combat engine.
//!
//! Run with: `skirmish <command>`. Set `RUST_LOG=skirmish_core=debug` to
//! trace every round on stderr.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Run, Stats};
use tracing_subscriber::EnvFilter;

/// Deterministic round-based combat simulator
#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Resolve battles between two teams of characters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run one encounter and print its log
    Run(Run),

    /// Print the stats a template produces
    Stats(Stats),
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Stats(cmd) => cmd.execute(),
    }
}

/// Logs go to stderr so stdout only carries the encounter log.
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
