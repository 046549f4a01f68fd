//! Command-line interface.
use crate::app::{run_round, verify_record, verify_reveal, RoundOptions};
use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cyclic_rps_core::{CommitmentEngine, GameRules, GameSession, MoveSet};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Rock-paper-scissors over any odd number of moves, with a verifiable computer move
#[derive(Parser, Debug)]
#[command(name = "cyclic-rps")]
#[command(about = "Rock-paper-scissors over any odd number of moves", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one round against the computer
    Play(Play),

    /// Check a revealed key against a published HMAC
    Verify(Verify),
}

#[derive(Args, Debug)]
pub struct Play {
    /// Move names in cycle order; an odd number, at least 3, all distinct.
    /// Names starting with `-` go after `--`.
    #[arg(required = true, num_args = 1..)]
    pub moves: Vec<String>,

    /// Treat move names that differ only in case as duplicates
    #[arg(long)]
    pub ignore_case: bool,

    /// Width of each column in the help table
    #[arg(long)]
    pub column_width: Option<usize>,

    /// Also print the commitment and the round record as JSON
    #[arg(long)]
    pub json: bool,
}

impl Play {
    pub fn execute(self, config: CliConfig) -> Result<()> {
        let config = config.with_overrides(self.ignore_case, self.column_width);
        let moves = MoveSet::new(self.moves, config.case_policy).context(
            "please provide an odd number (>= 3) of unique moves, e.g. `cyclic-rps play rock paper scissors`",
        )?;

        let mut engine = CommitmentEngine::new();
        let session = GameSession::start(GameRules::new(moves), &mut engine)?;
        info!(game_id = %session.id(), "waiting for user move");

        let options = RoundOptions {
            column_width: config.column_width,
            json: self.json,
        };
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        run_round(session, &options, stdin.lock(), &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct Verify {
    /// Revealed key, 64 hex characters
    #[arg(long, required_unless_present = "record")]
    pub key: Option<String>,

    /// Published HMAC, 64 hex characters
    #[arg(long, required_unless_present = "record")]
    pub digest: Option<String>,

    /// Move name the computer claims to have committed to
    #[arg(value_name = "MOVE", required_unless_present = "record")]
    pub move_name: Option<String>,

    /// JSON round record printed by `play --json`
    #[arg(long, conflicts_with_all = ["key", "digest", "move_name"])]
    pub record: Option<PathBuf>,
}

impl Verify {
    /// Returns whether the commitment checked out.
    pub fn execute(self) -> Result<bool> {
        let mut stdout = io::stdout().lock();

        if let Some(path) = self.record {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return verify_record(&json, &mut stdout);
        }

        match (self.key, self.digest, self.move_name) {
            (Some(key), Some(digest), Some(move_name)) => {
                verify_reveal(&key, &digest, &move_name, &mut stdout)
            }
            _ => anyhow::bail!("--key, --digest and MOVE are required without --record"),
        }
    }
}
