//! Per-group mark matrices.

use serde::{Deserialize, Serialize};

use crate::cards::{Cell, GRID_SIZE};

/// Which cells of a card a group has marked.
///
/// Starts all-false. Toggling is the only mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMatrix {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl MarkMatrix {
    /// Create an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from raw rows.
    #[must_use]
    pub const fn from_rows(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a matrix with exactly the given cells marked.
    #[must_use]
    pub fn with_marked(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut matrix = Self::new();
        for cell in cells {
            matrix.cells[cell.row()][cell.col()] = true;
        }
        matrix
    }

    /// Check whether a cell is marked.
    #[must_use]
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.cells[cell.row()][cell.col()]
    }

    /// Flip a cell. Returns the new value.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        let slot = &mut self.cells[cell.row()][cell.col()];
        *slot = !*slot;
        *slot
    }

    /// Unmark every cell.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&m| m).count()
    }

    /// Raw rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}
