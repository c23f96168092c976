//! Bingo cards and cell coordinates.
//!
//! A `BingoCard` is a fixed 4x4 grid of distinct words, laid out row-major.
//! Cards are created once per session and never change afterwards.

use serde::{Deserialize, Serialize};

use crate::core::BingoError;

/// Rows (and columns) on a card.
pub const GRID_SIZE: usize = 4;

/// Cells on a card.
pub const CARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A cell coordinate on a 4x4 grid. Rows and columns are 0-based.
///
/// Only [`Cell::new`] builds cells, so every cell is on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Create a cell, failing if either coordinate is off the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, BingoError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(BingoError::InvalidCell { row, col })
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major position, 0..16.
    #[must_use]
    pub const fn position(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CARD_CELLS).map(|i| Cell {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A group's card: 16 distinct words in a 4x4 grid.
///
/// Only [`generate_card`](super::generate_card) builds cards, so every card
/// upholds the no-repeat invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BingoCard {
    rows: [[String; GRID_SIZE]; GRID_SIZE],
}

impl BingoCard {
    /// Lay out the first 16 words row-major.
    ///
    /// Callers guarantee `words` holds at least `CARD_CELLS` entries.
    pub(crate) fn from_row_major(words: &[&str]) -> Self {
        debug_assert!(words.len() >= CARD_CELLS);
        Self {
            rows: std::array::from_fn(|r| {
                std::array::from_fn(|c| words[r * GRID_SIZE + c].to_string())
            }),
        }
    }

    /// Word at a cell.
    #[must_use]
    pub fn word(&self, cell: Cell) -> &str {
        &self.rows[cell.row][cell.col]
    }

    /// Rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[String; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// All words in row-major order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}
