//! Two-phase commit/reveal engine.
//!
//! `commit` draws a fresh key and publishes `HMAC(key, value)`; the caller
//! later reveals the key so the other party can recompute the digest.
//! Ordering (digest out before the opponent moves, key out after the round)
//! is the caller's job; the engine only supplies the primitives.

use super::{CommitDigest, CommitKey, Commitment, HmacSha256, KeyedHasher};
use crate::error::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Commitment engine over an injected secure RNG and keyed hash
#[derive(Clone, Debug)]
pub struct CommitmentEngine<R = OsRng, H = HmacSha256> {
    rng: R,
    hasher: H,
}

impl CommitmentEngine {
    /// OS entropy with HMAC-SHA-256
    pub fn new() -> Self {
        Self::with_parts(OsRng, HmacSha256)
    }
}

impl Default for CommitmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> CommitmentEngine<R, HmacSha256> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_parts(rng, HmacSha256)
    }
}

impl<R, H> CommitmentEngine<R, H> {
    pub fn with_parts(rng: R, hasher: H) -> Self {
        Self { rng, hasher }
    }
}

impl<R: RngCore + CryptoRng, H: KeyedHasher> CommitmentEngine<R, H> {
    /// Commit to `secret` under a key generated for this call only.
    pub fn commit(&mut self, secret: &[u8]) -> Result<Commitment, GameError> {
        let key = CommitKey::generate(&mut self.rng)?;
        let digest = CommitDigest::from_bytes(self.hasher.keyed_digest(key.as_bytes(), secret)?);
        debug!(%digest, "commitment created");
        Ok(Commitment::seal(key, digest))
    }
}

impl<R, H: KeyedHasher> CommitmentEngine<R, H> {
    /// Recompute the keyed hash of `secret` and compare it to a hex digest.
    ///
    /// Hex case is ignored. A malformed digest or a hash failure yields `false`.
    pub fn verify(&self, key: &[u8], secret: &[u8], digest: &str) -> bool {
        let Ok(expected) = digest.parse::<CommitDigest>() else {
            debug!("digest is not 64 hex characters");
            return false;
        };
        match self.hasher.verify_digest(key, secret, expected.as_bytes()) {
            Ok(matches) => matches,
            Err(e) => {
                debug!(error = %e, "verification hash failed");
                false
            }
        }
    }
}

/// Verify with HMAC-SHA-256, the default commitment hash
pub fn verify_commitment(key: &[u8], secret: &[u8], digest: &str) -> bool {
    CommitmentEngine::new().verify(key, secret, digest)
}
