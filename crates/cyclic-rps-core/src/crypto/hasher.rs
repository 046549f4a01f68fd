//! Keyed hash capability used to bind a commitment to its key.

use crate::error::GameError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// A keyed hash producing a 256-bit digest.
///
/// The commitment engine only talks to this trait, so a different MAC can
/// be swapped in without touching the commit/verify logic.
pub trait KeyedHasher {
    fn keyed_digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32], GameError>;

    /// Check `expected` against the keyed hash of `message`.
    ///
    /// The default compares every byte regardless of where the first
    /// mismatch is, so timing does not depend on the digest contents.
    fn verify_digest(&self, key: &[u8], message: &[u8], expected: &[u8; 32]) -> Result<bool, GameError> {
        let actual = self.keyed_digest(key, message)?;
        let diff = actual
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));
        Ok(diff == 0)
    }
}

/// HMAC-SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    fn mac(key: &[u8], message: &[u8]) -> Result<Hmac<Sha256>, GameError> {
        let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
            .map_err(|e| GameError::HashUnavailable(e.to_string()))?;
        mac.update(message);
        Ok(mac)
    }
}

impl KeyedHasher for HmacSha256 {
    fn keyed_digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32], GameError> {
        Ok(Self::mac(key, message)?.finalize().into_bytes().into())
    }

    fn verify_digest(&self, key: &[u8], message: &[u8], expected: &[u8; 32]) -> Result<bool, GameError> {
        Ok(Self::mac(key, message)?.verify_slice(expected).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2
    #[test]
    fn test_hmac_sha256_known_vector() {
        let digest = HmacSha256
            .keyed_digest(b"Jefe", b"what do ya want for nothing?")
            .unwrap();
        assert_eq!(
            hex::encode(digest),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    /// Plain SHA-256 over key and message, relying on the default check
    struct Concat;

    impl KeyedHasher for Concat {
        fn keyed_digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32], GameError> {
            use sha2::Digest;
            Ok(<Sha256 as Digest>::new().chain_update(key).chain_update(message).finalize().into())
        }
    }

    #[test]
    fn test_hmac_verify_digest() {
        let key = [9u8; 32];
        let mut digest = HmacSha256.keyed_digest(&key, b"rock").unwrap();

        assert!(HmacSha256.verify_digest(&key, b"rock", &digest).unwrap());
        assert!(!HmacSha256.verify_digest(&key, b"paper", &digest).unwrap());
        digest[31] ^= 0x80;
        assert!(!HmacSha256.verify_digest(&key, b"rock", &digest).unwrap());
    }

    #[test]
    fn test_default_verify_digest() {
        let mut digest = Concat.keyed_digest(b"k", b"rock").unwrap();

        assert!(Concat.verify_digest(b"k", b"rock", &digest).unwrap());
        digest[0] ^= 0x01;
        assert!(!Concat.verify_digest(b"k", b"rock", &digest).unwrap());
    }

    #[test]
    fn test_key_changes_digest() {
        let a = HmacSha256.keyed_digest(&[1u8; 32], b"rock").unwrap();
        let b = HmacSha256.keyed_digest(&[2u8; 32], b"rock").unwrap();
        assert_ne!(a, b);
    }
}
