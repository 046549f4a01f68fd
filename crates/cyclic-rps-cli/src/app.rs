//! Interactive round and offline verification.
use crate::presentation::{render_help_table, render_menu, verdict};
use anyhow::{Context, Result};
use cyclic_rps_core::{verify_commitment, CommitKey, GameSession, RoundRecord};
use std::io::{BufRead, Write};
use tracing::debug;

const INVALID_INPUT: &str = "Invalid input. Try again or enter '?' for help.";

/// Output options for one round
#[derive(Clone, Debug)]
pub struct RoundOptions {
    pub column_width: usize,
    /// Also print the commit message and round record as JSON lines
    pub json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Help,
    Exit,
    Move(usize),
    Invalid,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "?" => Input::Help,
        "0" => Input::Exit,
        other => other.parse().map(Input::Move).unwrap_or(Input::Invalid),
    }
}

/// Publish the digest, read moves until one is valid, then reveal the key.
///
/// Returns `None` when the user exits or input ends before a move is played;
/// the key is not disclosed in that case.
pub fn run_round<I, W>(
    session: GameSession,
    options: &RoundOptions,
    mut input: I,
    out: &mut W,
) -> Result<Option<RoundRecord>>
where
    I: BufRead,
    W: Write,
{
    writeln!(out, "HMAC: {}", session.digest())?;
    if options.json {
        writeln!(out, "{}", serde_json::to_string(&session.commit_message())?)?;
    }
    write!(out, "{}", render_menu(session.rules()))?;

    let mut line = String::new();
    loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            debug!(game_id = %session.id(), "input closed before a move was played");
            return Ok(None);
        }

        let index = match parse_input(&line) {
            Input::Help => {
                write!(out, "{}", render_help_table(session.rules(), options.column_width)?)?;
                continue;
            }
            Input::Exit => return Ok(None),
            Input::Move(index) => index,
            Input::Invalid => {
                writeln!(out, "{}", INVALID_INPUT)?;
                continue;
            }
        };

        let choice = match session.choose(index) {
            Ok(choice) => choice,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "rejected move");
                writeln!(out, "{}", INVALID_INPUT)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let record = session.finish(choice)?;
        writeln!(out, "Your move: {}", record.user.name)?;
        writeln!(out, "Computer move: {}", record.computer.name)?;
        writeln!(out, "{}", verdict(record.outcome))?;
        writeln!(out, "HMAC key: {}", record.reveal.key().to_hex())?;
        if options.json {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
        return Ok(Some(record));
    }
}

/// Check a disclosed key against a published digest for one move name.
pub fn verify_reveal<W: Write>(key_hex: &str, digest: &str, move_name: &str, out: &mut W) -> Result<bool> {
    let key = CommitKey::from_hex(key_hex).context("key must be 64 hex characters")?;
    let matches = verify_commitment(key.as_bytes(), move_name.as_bytes(), digest);

    if matches {
        writeln!(out, "OK: HMAC of {:?} under this key matches the digest", move_name)?;
    } else {
        writeln!(out, "MISMATCH: HMAC of {:?} under this key does not match the digest", move_name)?;
    }
    Ok(matches)
}

/// Re-check a round from its JSON record.
pub fn verify_record<W: Write>(json: &str, out: &mut W) -> Result<bool> {
    let record: RoundRecord = serde_json::from_str(json).context("not a round record")?;
    let ok = record.verify();

    if ok {
        writeln!(
            out,
            "OK: game {} committed to {:?} and the outcome is {}",
            record.game_id, record.computer.name, record.outcome
        )?;
    } else {
        writeln!(out, "MISMATCH: record for game {} does not verify", record.game_id)?;
    }
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclic_rps_core::{CasePolicy, CommitmentEngine, GameRules, MoveSet};
    use std::io::Cursor;

    fn session() -> GameSession {
        let rules = GameRules::new(
            MoveSet::new(["rock", "paper", "scissors"], CasePolicy::Sensitive).unwrap(),
        );
        GameSession::start(rules, &mut CommitmentEngine::new()).unwrap()
    }

    fn options(json: bool) -> RoundOptions {
        RoundOptions {
            column_width: 12,
            json,
        }
    }

    fn play(input: &str, json: bool) -> (Option<RoundRecord>, String) {
        let mut out = Vec::new();
        let record = run_round(session(), &options(json), Cursor::new(input), &mut out).unwrap();
        (record, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("?\n"), Input::Help);
        assert_eq!(parse_input(" 0 "), Input::Exit);
        assert_eq!(parse_input("2\n"), Input::Move(2));
        assert_eq!(parse_input("rock"), Input::Invalid);
        assert_eq!(parse_input("-1"), Input::Invalid);
    }

    #[test]
    fn test_round_prints_digest_first_and_key_last() {
        let (record, output) = play("1\n", false);
        let record = record.unwrap();

        let digest_at = output.find("HMAC: ").unwrap();
        let key_at = output.find("HMAC key: ").unwrap();
        assert!(digest_at < output.find("Enter your move: ").unwrap());
        assert!(key_at > digest_at);

        assert!(output.contains(&format!("HMAC: {}", record.reveal.digest())));
        assert!(output.contains(&format!("HMAC key: {}", record.reveal.key().to_hex())));
        assert!(output.contains("Your move: rock"));
        assert!(output.contains(verdict(record.outcome)));
        assert!(record.verify());
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (record, output) = play("banana\n7\n3\n", false);

        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert_eq!(record.unwrap().user.name, "scissors");
    }

    #[test]
    fn test_help_then_move() {
        let (record, output) = play("?\n2\n", false);

        assert!(output.contains("Moves / Results"));
        assert!(record.is_some());
    }

    #[test]
    fn test_exit_does_not_reveal() {
        let (record, output) = play("0\n", false);

        assert!(record.is_none());
        assert!(!output.contains("HMAC key: "));
    }

    #[test]
    fn test_eof_does_not_reveal() {
        let (record, output) = play("", false);

        assert!(record.is_none());
        assert!(!output.contains("HMAC key: "));
    }

    #[test]
    fn test_json_output_is_verifiable() {
        let (record, output) = play("2\n", true);
        let record = record.unwrap();

        let last_json = output.lines().filter(|l| l.starts_with('{')).last().unwrap();
        let mut verdict_out = Vec::new();
        assert!(verify_record(last_json, &mut verdict_out).unwrap());
        assert_eq!(output.lines().filter(|l| l.starts_with('{')).count(), 2);
        assert!(String::from_utf8(verdict_out).unwrap().contains(&record.computer.name));
    }

    #[test]
    fn test_verify_reveal() {
        let (record, _) = play("1\n", false);
        let record = record.unwrap();
        let key = record.reveal.key().to_hex();
        let digest = record.reveal.digest().to_string();
        let mut out = Vec::new();

        assert!(verify_reveal(&key, &digest, &record.computer.name, &mut out).unwrap());
        assert!(verify_reveal(&key.to_lowercase(), &digest.to_lowercase(), &record.computer.name, &mut out).unwrap());
        assert!(!verify_reveal(&key, &digest, "not-a-move", &mut out).unwrap());
        assert!(verify_reveal("abc", &digest, "rock", &mut out).is_err());
    }

    #[test]
    fn test_verify_record_rejects_garbage() {
        let mut out = Vec::new();
        assert!(verify_record("{}", &mut out).is_err());
    }
}
