//! Commitment tag for the commit-reveal scheme.

use super::SecretKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA-256(key, move name)
///
/// Published before the player picks a move; binding because the key and
/// move are fixed at commit time, hiding because the key stays secret
/// until the reveal. Deterministic in (move, key), so the player can
/// recompute the tag after the reveal and compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Compute the commitment for a move name under a secret key.
    pub fn new(move_name: &str, key: &SecretKey) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given move and key produce this commitment.
    pub fn verify(&self, move_name: &str, key: &SecretKey) -> bool {
        *self == Self::new(move_name, key)
    }

    /// Tag as lowercase hex, the published form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
