//! Win detection over a mark matrix.
//!
//! A group wins when any of the ten lines on the 4x4 grid is fully marked:
//! one of the four rows, one of the four columns, the main diagonal, or the
//! anti-diagonal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::marks::MarkMatrix;
use crate::cards::GRID_SIZE;

/// A line that completes a bingo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    /// Row index, top to bottom.
    Row(usize),
    /// Column index, left to right.
    Column(usize),
    /// Top-left to bottom-right, cells `[i][i]`.
    Diagonal,
    /// Top-right to bottom-left, cells `[i][3 - i]`.
    AntiDiagonal,
}

impl WinLine {
    /// Every line on the grid.
    pub fn all() -> impl Iterator<Item = WinLine> {
        (0..GRID_SIZE)
            .map(WinLine::Row)
            .chain((0..GRID_SIZE).map(WinLine::Column))
            .chain([WinLine::Diagonal, WinLine::AntiDiagonal])
    }

    /// Check whether every cell on this line is marked.
    #[must_use]
    pub fn is_complete(self, marks: &MarkMatrix) -> bool {
        let rows = marks.rows();
        match self {
            WinLine::Row(r) => rows[r].iter().all(|&m| m),
            WinLine::Column(c) => rows.iter().all(|row| row[c]),
            WinLine::Diagonal => (0..GRID_SIZE).all(|i| rows[i][i]),
            WinLine::AntiDiagonal => (0..GRID_SIZE).all(|i| rows[i][GRID_SIZE - 1 - i]),
        }
    }
}

/// Check whether a mark matrix contains a bingo.
///
/// Pure; looks at each of the 16 cells at most a few times.
///
/// ```
/// use classroom_bingo::rules::{check_win, MarkMatrix};
///
/// assert!(!check_win(&MarkMatrix::new()));
/// ```
#[must_use]
pub fn check_win(marks: &MarkMatrix) -> bool {
    WinLine::all().any(|line| line.is_complete(marks))
}

/// Every completed line, in row, column, diagonal order.
#[must_use]
pub fn winning_lines(marks: &MarkMatrix) -> SmallVec<[WinLine; 4]> {
    WinLine::all().filter(|line| line.is_complete(marks)).collect()
}
