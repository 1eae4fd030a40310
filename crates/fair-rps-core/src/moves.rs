//! Move set: the ordered vocabulary of a game.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of distinct move names, odd length, at least three.
///
/// The list order is the rules of the game: each move beats the
/// `(n-1)/2` moves that follow it cyclically and loses to the `(n-1)/2`
/// that precede it. No semantic relationships exist beyond position, so
/// callers supplying non-classic move sets define the outcome themselves
/// through the order they pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Rejects fewer than three names, even counts, and duplicates. Past
    /// construction the core assumes these invariants hold.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < 3 {
            return Err(Error::TooFewMoves(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(Error::EvenMoveCount(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(Error::DuplicateMove(name.clone()));
            }
        }
        Ok(Self(names))
    }

    /// Number of moves. Always odd, always >= 3.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set; present for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many moves each move beats: `(n-1)/2`.
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Name of the move at `index`.
    ///
    /// Panics if `index` is out of range; indices come from this set.
    pub fn name(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// Position of `name` in the set, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Iterate the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
