//! Commitment key, digest, and the sealed/revealed commitment pair.

use super::{HmacSha256, KeyedHasher};
use crate::error::GameError;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// Size in bytes of both the key and the digest
pub const COMMITMENT_LEN: usize = 32;

/// Secret key for one commitment
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitKey(#[serde(with = "hex_bytes")] [u8; COMMITMENT_LEN]);

impl CommitKey {
    /// Draw a fresh key from a secure random source. Failure is not retried.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, GameError> {
        let mut bytes = [0u8; COMMITMENT_LEN];
        rng.try_fill_bytes(&mut bytes).map_err(|e| {
            error!(error = %e, "secure random source failed");
            GameError::EntropyUnavailable(e.to_string())
        })?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse hex in either case
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; COMMITMENT_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Uppercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for CommitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitKey(<redacted>)")
    }
}

/// Keyed hash of the committed value, public from the moment it is created
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitDigest(#[serde(with = "hex_bytes")] [u8; COMMITMENT_LEN]);

impl CommitDigest {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }
}

impl fmt::Debug for CommitDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitDigest({})", hex::encode_upper(&self.0[..8]))
    }
}

impl fmt::Display for CommitDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for CommitDigest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; COMMITMENT_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

/// A commitment before disclosure: the digest can be published, the key
/// stays inside until [`Commitment::reveal`] consumes it.
pub struct Commitment {
    key: CommitKey,
    digest: CommitDigest,
}

impl Commitment {
    pub(crate) fn seal(key: CommitKey, digest: CommitDigest) -> Self {
        Self { key, digest }
    }

    pub fn digest(&self) -> &CommitDigest {
        &self.digest
    }

    /// Disclose the key. Takes `self`, so a commitment can be revealed once.
    pub fn reveal(self) -> RevealedCommitment {
        RevealedCommitment {
            key: self.key,
            digest: self.digest,
        }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// A disclosed commitment that anyone can check against the claimed value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCommitment {
    key: CommitKey,
    digest: CommitDigest,
}

impl RevealedCommitment {
    pub fn new(key: CommitKey, digest: CommitDigest) -> Self {
        Self { key, digest }
    }

    pub fn key(&self) -> &CommitKey {
        &self.key
    }

    pub fn digest(&self) -> &CommitDigest {
        &self.digest
    }

    /// Check that `secret` is the value committed to, using HMAC-SHA-256
    pub fn verify(&self, secret: &[u8]) -> bool {
        self.verify_with(&HmacSha256, secret)
    }

    pub fn verify_with<H: KeyedHasher>(&self, hasher: &H, secret: &[u8]) -> bool {
        hasher
            .verify_digest(self.key.as_bytes(), secret, self.digest.as_bytes())
            .unwrap_or(false)
    }
}

mod hex_bytes {
    use super::COMMITMENT_LEN;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; COMMITMENT_LEN], s: S) -> Result<S::Ok, S::Error> {
        hex::encode_upper(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; COMMITMENT_LEN], D::Error> {
        let hex_str = String::deserialize(d)?;
        let mut arr = [0u8; COMMITMENT_LEN];
        hex::decode_to_slice(&hex_str, &mut arr).map_err(serde::de::Error::custom)?;
        Ok(arr)
    }
}
