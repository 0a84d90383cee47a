// Core game state
// Reveal engine, flag toggle and win evaluation on top of the grid

use log::debug;

use crate::lns_grid::{Grid, OutOfBounds};

/// Game result so far. Once terminal, the board no longer mutates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// One game over one grid. The game is the sole owner of the grid for
/// its whole lifetime.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    status: Status,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Game {
            grid,
            status: Status::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Reveal the cell at (row, col).
    /// - An already revealed or flagged cell is left alone (idempotent no-op)
    /// - A mine ends the game immediately; no other cell changes
    /// - A zero-count cell cascades through its zero region and that
    ///   region's numbered border; flagged cells are skipped
    ///
    /// The cascade runs on an explicit work list and marks cells revealed
    /// when they are queued, so each cell is processed at most once and
    /// large open regions cannot exhaust the call stack.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<Status, OutOfBounds> {
        let cell = *self.grid.get(row, col)?;
        if self.status.is_terminal() || cell.revealed || cell.flagged {
            return Ok(self.status);
        }

        self.grid[(row, col)].revealed = true;
        if cell.mine {
            debug!("mine hit at ({row}, {col})");
            self.status = Status::Lost;
            return Ok(self.status);
        }

        if cell.adjacent == 0 {
            let mut work = vec![(row, col)];
            let mut cascaded = 0usize;
            while let Some((r, c)) = work.pop() {
                // Numbered border cells are revealed but never expanded.
                // A zero cell has no mined neighbor, so the cascade can
                // never touch a mine.
                if self.grid[(r, c)].adjacent != 0 {
                    continue;
                }
                for pos in self.grid.neighbors(r, c) {
                    let neighbor = &mut self.grid[pos];
                    if neighbor.revealed || neighbor.flagged {
                        continue;
                    }
                    neighbor.revealed = true;
                    cascaded += 1;
                    work.push(pos);
                }
            }
            debug!("cascade from ({row}, {col}) revealed {cascaded} more cells");
        }

        if self.is_won() {
            self.status = Status::Won;
        }
        Ok(self.status)
    }

    /// Flip the '?' mark on an unrevealed cell. Revealed cells are left alone.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Result<(), OutOfBounds> {
        let terminal = self.status.is_terminal();
        let cell = self.grid.get_mut(row, col)?;
        if terminal || cell.revealed {
            return Ok(());
        }
        cell.flagged = !cell.flagged;
        Ok(())
    }

    /// Win condition: every non-mine cell has been revealed.
    /// Flags play no part in it.
    pub fn is_won(&self) -> bool {
        self.grid.cells().all(|c| c.mine || c.revealed)
    }
}
