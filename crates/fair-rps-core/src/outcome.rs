//! Cyclic outcome algorithm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Cell label for the outcome table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Reframe as a round verdict, the perspective move being the player's.
    pub fn verdict(self) -> Verdict {
        match self {
            Outcome::Win => Verdict::PlayerWins,
            Outcome::Lose => Verdict::ComputerWins,
            Outcome::Draw => Verdict::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round verdict in the player/computer framing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::PlayerWins => "Player wins",
            Verdict::ComputerWins => "Computer wins",
            Verdict::Draw => "Draw",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decide move `a` against move `b` in a cycle of `n` moves.
///
/// `delta = (a - b) mod n`, kept non-negative by adding `n` before the
/// reduction. A zero delta is a draw; a delta of at most `n / 2` means `a`
/// is within the half-cycle it beats; anything larger loses. With `n` odd
/// every move beats exactly `n / 2` others and loses to exactly as many.
///
/// Indices must be in `[0, n)` and `n` odd and at least 3; violating
/// this is a caller bug.
pub fn resolve(a: usize, b: usize, n: usize) -> Outcome {
    debug_assert!(n >= 3 && n % 2 == 1, "move count must be odd and >= 3");
    debug_assert!(a < n && b < n, "move index out of range");

    let delta = (n + a - b) % n;
    if delta == 0 {
        Outcome::Draw
    } else if delta <= n / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
