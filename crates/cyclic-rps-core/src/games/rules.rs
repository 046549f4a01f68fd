//! Cyclic dominance rules for an odd number of moves.
//!
//! Moves sit on a cycle in the order they were given. Each move loses to the
//! `half = n / 2` moves that follow it and beats the `half` moves that
//! precede it, wrapping around. For `rock, paper, scissors` that is the
//! classic game; for larger odd sets every move wins and loses exactly
//! `half` pairings.

use super::moves::MoveSet;
use crate::error::GameError;
use crate::protocol::Outcome;
use tracing::debug;

/// Rule engine bound to one immutable move set
#[derive(Clone, Debug)]
pub struct GameRules {
    moves: MoveSet,
    half: usize,
}

impl GameRules {
    pub fn new(moves: MoveSet) -> Self {
        let half = moves.len() / 2;
        debug!(size = moves.len(), half, "rule engine ready");
        Self { moves, half }
    }

    /// Outcome of move `a` against move `b`, both 1-based, from `a`'s side.
    pub fn compare(&self, a: usize, b: usize) -> Result<Outcome, GameError> {
        let n = self.size();
        self.check_index(a)?;
        self.check_index(b)?;

        if a == b {
            return Ok(Outcome::Draw);
        }

        // The cycle must split evenly into a winning and a losing half.
        if 2 * self.half + 1 != n {
            return Err(GameError::InvariantViolation { a, b, size: n });
        }

        // Steps needed to walk forward from b to a.
        let distance = (a - 1 + n - (b - 1)) % n;

        if (1..=self.half).contains(&distance) {
            Ok(Outcome::Win)
        } else if (self.half + 1..n).contains(&distance) {
            Ok(Outcome::Lose)
        } else {
            Err(GameError::InvariantViolation { a, b, size: n })
        }
    }

    /// Canonical name of a 1-based move index
    pub fn name_of(&self, index: usize) -> Result<&str, GameError> {
        self.moves.get(index).ok_or(GameError::InvalidMoveIndex {
            index,
            size: self.size(),
        })
    }

    pub fn size(&self) -> usize {
        self.moves.len()
    }

    pub fn all_moves(&self) -> &[String] {
        self.moves.names()
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    /// Full results matrix: `table[i][j]` is move `i + 1` against move `j + 1`.
    pub fn outcome_table(&self) -> Result<Vec<Vec<Outcome>>, GameError> {
        let n = self.size();
        (1..=n)
            .map(|a| (1..=n).map(|b| self.compare(a, b)).collect())
            .collect()
    }

    /// Names of the moves that `index` defeats
    pub fn wins_against(&self, index: usize) -> Result<Vec<&str>, GameError> {
        self.opponents_with(index, Outcome::Win)
    }

    /// Names of the moves that defeat `index`
    pub fn loses_to(&self, index: usize) -> Result<Vec<&str>, GameError> {
        self.opponents_with(index, Outcome::Lose)
    }

    fn opponents_with(&self, index: usize, wanted: Outcome) -> Result<Vec<&str>, GameError> {
        let mut names = Vec::with_capacity(self.half);
        for other in 1..=self.size() {
            if self.compare(index, other)? == wanted {
                names.push(self.name_of(other)?);
            }
        }
        Ok(names)
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if (1..=self.size()).contains(&index) {
            Ok(())
        } else {
            Err(GameError::InvalidMoveIndex {
                index,
                size: self.size(),
            })
        }
    }
}
