//! Headless runner for snake levels.
//!
//! Loads a RON level, steps it without rendering, and reports what happened.
//! Run with: `cargo run -p snake-sim -- <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Run};

/// Headless snake level tools
#[derive(Parser)]
#[command(name = "snake-sim")]
#[command(about = "Run and inspect snake AI levels without a renderer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Step a level for a number of frames and print the outcome
    Run(Run),

    /// Describe a level's snakes, walls, and light puzzle
    Inspect(Inspect),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SNAKE_SEED and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
    }
}
