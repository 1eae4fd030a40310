//! Fair RPS Core Library
//!
//! This crate provides the fairness protocol (commit-reveal over an HMAC
//! key and the computer's move) and the generalized cyclic outcome
//! algorithm for rock-paper-scissors over any odd number of moves.

pub mod crypto;
pub mod error;
pub mod moves;
pub mod outcome;
pub mod round;
pub mod table;

pub use crypto::{Commitment, SecretKey};
pub use error::{Error, Result};
pub use moves::MoveSet;
pub use outcome::{resolve, Outcome, Verdict};
pub use round::{CommittedRound, FairRound, RoundResult};
pub use table::OutcomeTable;
