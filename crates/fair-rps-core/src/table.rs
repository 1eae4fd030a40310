//! Outcome table for the help display.

use crate::moves::MoveSet;
use crate::outcome::resolve;
use std::fmt;

const CORNER_LABEL: &str = "Moves";

/// Full pairwise outcome grid: `(n+1) x (n+1)` labels.
///
/// Row 0 and column 0 carry the move names with a fixed corner label;
/// cell `(i+1, j+1)` is the outcome of move `i` against move `j` from
/// the row mover's perspective. Rebuilt from scratch on every call,
/// O(n^2) over the (small) move count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeTable {
    rows: Vec<Vec<String>>,
}

impl OutcomeTable {
    /// Build the table for a move set.
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let mut rows = Vec::with_capacity(n + 1);

        let mut header = Vec::with_capacity(n + 1);
        header.push(CORNER_LABEL.to_string());
        header.extend(moves.iter().map(String::from));
        rows.push(header);

        for i in 0..n {
            let mut row = Vec::with_capacity(n + 1);
            row.push(moves.name(i).to_string());
            for j in 0..n {
                row.push(resolve(i, j, n).as_str().to_string());
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// The raw label grid, header row first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.rows[0].len();
        let widths: Vec<usize> = (0..cols)
            .map(|c| self.rows.iter().map(|r| r[c].len()).max().unwrap_or(0))
            .collect();

        for row in &self.rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
