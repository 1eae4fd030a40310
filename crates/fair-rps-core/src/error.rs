//! Error types for the fair-rps core.

use thiserror::Error;

/// Errors surfaced by the core library.
///
/// Precondition violations (out-of-range indices once a [`crate::MoveSet`]
/// exists) are caller defects and panic instead of returning a variant.
#[derive(Debug, Error)]
pub enum Error {
    /// The secure random source is unavailable. Fatal environment error.
    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    /// Fewer than three moves were supplied.
    #[error("need at least 3 moves, got {0}")]
    TooFewMoves(usize),

    /// An even number of moves was supplied.
    #[error("need an odd number of moves, got {0}")]
    EvenMoveCount(usize),

    /// The same move name appears more than once.
    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

pub type Result<T> = std::result::Result<T, Error>;
