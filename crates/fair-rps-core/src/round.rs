//! One round of the fairness protocol.
//!
//! The protocol order is the fairness guarantee: the computer's move and
//! the MAC key are fixed and the commitment published before the player
//! picks, and the reveal lets the player recompute the commitment to
//! confirm nothing changed in between. Each state transition consumes the
//! previous state, so a round can neither re-commit nor re-reveal; a new
//! round means a new [`FairRound`] with a fresh key and move draw.

use crate::crypto::{Commitment, SecretKey};
use crate::error::Result;
use crate::moves::MoveSet;
use crate::outcome::{resolve, Verdict};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A round before the computer has committed.
pub struct FairRound {
    moves: MoveSet,
}

impl FairRound {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    /// Draw the key and the computer's move, compute the commitment.
    ///
    /// The RNG is injected so tests can seed it; production callers pass
    /// `OsRng`. Fails only if the random source fails.
    pub fn commit<R: RngCore + CryptoRng>(self, rng: &mut R) -> Result<CommittedRound> {
        let key = SecretKey::generate(rng)?;
        let computer_index = rng.gen_range(0..self.moves.len());
        let commitment = Commitment::new(self.moves.name(computer_index), &key);

        Ok(CommittedRound {
            moves: self.moves,
            key,
            computer_index,
            commitment,
        })
    }
}

/// A round whose commitment is published and whose key and computer move
/// are still private.
pub struct CommittedRound {
    moves: MoveSet,
    key: SecretKey,
    computer_index: usize,
    commitment: Commitment,
}

impl CommittedRound {
    /// The published commitment, the only externally observable state.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Reveal the key and computer move and settle the round.
    ///
    /// `player_index` must be a valid index into the move set; the input
    /// boundary validates the player's choice before it reaches here, so
    /// an out-of-range index is a caller bug and panics.
    pub fn reveal(self, player_index: usize) -> RoundResult {
        assert!(
            player_index < self.moves.len(),
            "player move index {player_index} out of range for {} moves",
            self.moves.len()
        );

        let verdict = resolve(player_index, self.computer_index, self.moves.len()).verdict();

        RoundResult {
            verdict,
            player_move: self.moves.name(player_index).to_string(),
            computer_move: self.moves.name(self.computer_index).to_string(),
            key: self.key,
            commitment: self.commitment,
        }
    }
}

/// Everything revealed at the end of a round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    pub verdict: Verdict,
    pub player_move: String,
    pub computer_move: String,
    pub key: SecretKey,
    pub commitment: Commitment,
}

impl RoundResult {
    /// Recompute the commitment from the revealed key and computer move
    /// and compare with the published one.
    pub fn verified(&self) -> bool {
        self.commitment.verify(&self.computer_move, &self.key)
    }
}
