//! Cyclic RPS console game
//!
//! Commits to the computer's move with an HMAC before the user chooses,
//! then reveals the key so the user can check the computer did not cheat.

mod app;
mod cli;
mod config;
mod presentation;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(cmd) => cmd.execute(CliConfig::from_env()),
        Command::Verify(cmd) => {
            if !cmd.execute()? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
