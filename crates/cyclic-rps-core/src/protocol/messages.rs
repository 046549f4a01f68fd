//! Protocol messages.

use crate::crypto::{CommitDigest, RevealedCommitment};
use crate::games::{CasePolicy, GameRules, MoveSet};
use crate::protocol::{GameId, Outcome};
use serde::{Deserialize, Serialize};

/// Phase 1: published before the user picks a move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub game_id: GameId,
    pub moves: Vec<String>,
    pub digest: CommitDigest,
}

/// A move as played, by 1-based index and name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub index: usize,
    pub name: String,
}

/// Phase 2: everything needed to audit a finished round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub game_id: GameId,
    pub moves: Vec<String>,
    pub user: PlayedMove,
    pub computer: PlayedMove,
    /// From the user's side
    pub outcome: Outcome,
    pub reveal: RevealedCommitment,
}

impl RoundRecord {
    /// Re-check the round from the record alone: the revealed key must open
    /// the digest to the computer's move, both moves must match their
    /// indices, and the outcome must follow from the rules.
    pub fn verify(&self) -> bool {
        if !self.reveal.verify(self.computer.name.as_bytes()) {
            return false;
        }

        let Ok(moves) = MoveSet::new(self.moves.iter().cloned(), CasePolicy::Sensitive) else {
            return false;
        };
        let rules = GameRules::new(moves);

        let names_match = [&self.user, &self.computer]
            .iter()
            .all(|m| rules.name_of(m.index).map_or(false, |name| name == m.name));

        names_match
            && rules
                .compare(self.user.index, self.computer.index)
                .map_or(false, |outcome| outcome == self.outcome)
    }
}
