//! Cryptographic commitment for the computer's move.
//!
//! This module provides:
//! - CommitKey and CommitDigest, the two halves of a commitment
//! - Commitment (sealed) and RevealedCommitment (disclosed)
//! - CommitmentEngine over a pluggable secure RNG and KeyedHasher

mod commitment;
mod engine;
mod hasher;

pub use commitment::{CommitDigest, CommitKey, Commitment, RevealedCommitment, COMMITMENT_LEN};
pub use engine::{verify_commitment, CommitmentEngine};
pub use hasher::{HmacSha256, KeyedHasher};
