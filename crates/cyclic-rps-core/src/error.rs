//! Error types shared by the rule engine and the commitment engine.

use thiserror::Error;

/// Reasons a list of move names cannot form a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {count}")]
    TooFew { count: usize },

    #[error("an odd number of moves is required, got {count}")]
    EvenCount { count: usize },

    #[error("move #{position} has an empty name")]
    EmptyName { position: usize },

    #[error("move {name:?} appears more than once (#{first} and #{second})")]
    Duplicate {
        name: String,
        first: usize,
        second: usize,
    },
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    /// A move index outside `[1, size]`.
    #[error("move index {index} is out of range 1..={size}")]
    InvalidMoveIndex { index: usize, size: usize },

    #[error("invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    /// The dominance rule could not resolve a pairing. Only reachable when
    /// the odd-count precondition was bypassed upstream.
    #[error("dominance rule cannot resolve moves {a} and {b} in a set of {size}")]
    InvariantViolation { a: usize, b: usize, size: usize },

    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("keyed hash unavailable: {0}")]
    HashUnavailable(String),
}

impl GameError {
    /// Whether the caller can recover by supplying different input.
    ///
    /// Invalid arguments never touch engine state, so re-prompting is safe.
    /// Everything else is a broken contract or a platform failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidMoveIndex { .. } | GameError::InvalidMoveSet(_)
        )
    }
}
