// Grid data model
// Owns the flat cell array and provides bounds-checked access and neighbor enumeration

use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A single cell on the minesweeper board
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Cell {
    pub mine: bool,     // Contains a mine
    pub adjacent: u8,   // Adjacent mine count (0-8); stays 0 for mine cells
    pub revealed: bool, // Has been revealed
    pub flagged: bool,  // Carries a '?' mark
}

/// A coordinate outside the grid extent.
/// Always a caller-contract violation: the frontend validates user
/// coordinates before they reach the core.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position ({}, {}) is outside the grid", self.row, self.col)
    }
}

impl Error for OutOfBounds {}

/// Rectangular board of cells, stored row-major.
/// The grid is the sole owner of its cells; neighbor traversal hands out
/// positions, never references, so reveal cascades cannot hold stale
/// aliases into the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a rows x cols grid of unmined, unrevealed, unflagged cells
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid must be at least 1x1");
        Grid {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether (row, col) lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Convert (row, col) coordinates to flat array index
    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if self.contains(row, col) {
            Ok(self.index_of(row, col))
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, OutOfBounds> {
        self.checked_index(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, OutOfBounds> {
        let i = self.checked_index(row, col)?;
        Ok(&mut self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBounds> {
        let i = self.checked_index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Positions of the up to 8 neighbors of (row, col), clipped to the
    /// grid bounds. No wraparound.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(8);
        for r in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                if !(r == row && c == col) {
                    positions.push((r, c));
                }
            }
        }
        positions
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

// Panicking indexed access for positions already known to be valid
// (generation and cascade internals). The checked get/get_mut/set above
// are the contract surface for callers holding user coordinates.
impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        &self.cells[self.index_of(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        let i = self.index_of(row, col);
        &mut self.cells[i]
    }
}
