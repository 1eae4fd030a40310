//! Secret key for the commit-reveal scheme.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-shot MAC key, 32 bytes from a secure random source.
///
/// Generated fresh for each round, kept private until the player's move is
/// fixed, then revealed so the player can recompute the commitment.
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Draw a fresh key from the given secure RNG.
    ///
    /// Fails only if the random source itself fails, which is a fatal
    /// environment error.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full key as lowercase hex, for the reveal printout.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_keys_are_distinct() {
        let k1 = SecretKey::generate(&mut OsRng).unwrap();
        let k2 = SecretKey::generate(&mut OsRng).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let k1 = SecretKey::generate(&mut StdRng::seed_from_u64(7)).unwrap();
        let k2 = SecretKey::generate(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_hex_rendering() {
        let key = SecretKey::from_bytes([0xab; 32]);
        assert_eq!(key.to_hex(), "ab".repeat(32));
        assert_eq!(key.to_hex().len(), 64);
    }

    #[test]
    fn test_debug_redacts() {
        let key = SecretKey::from_bytes([0xab; 32]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&"ab".repeat(32)));
    }
}
