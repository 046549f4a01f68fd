//! Cyclic RPS Core Library
//!
//! Rock-paper-scissors generalised to any odd number of moves, with the
//! computer's move fixed up front by an HMAC commitment that the user can
//! check once the key is revealed.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{
    verify_commitment, CommitDigest, CommitKey, Commitment, CommitmentEngine, HmacSha256,
    KeyedHasher, RevealedCommitment,
};
pub use error::{GameError, MoveSetError};
pub use games::{CasePolicy, GameRules, MoveSet};
pub use protocol::{CommitMessage, GameId, GameSession, Outcome, PlayedMove, RoundRecord, UserChoice};
