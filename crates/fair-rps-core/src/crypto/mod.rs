//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey: the one-shot MAC key revealed after the player moves
//! - Commitment: the HMAC-SHA-256 tag published before the player moves

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::SecretKey;
