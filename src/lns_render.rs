// Board display symbols
// Pure mapping from cell state to the characters the frontend prints

use crate::lns_grid::{Cell, Grid};

/// Display symbol for a single cell.
///
/// `reveal_mines` is the end-of-game disclosure switch: it shows
/// unrevealed mines as `*`. A `?` mark takes precedence over disclosure,
/// so a flagged mine stays behind its mark even on the final board.
pub fn symbol_for(cell: &Cell, reveal_mines: bool) -> char {
    if cell.revealed {
        if cell.mine {
            '*'
        } else {
            (b'0' + cell.adjacent) as char
        }
    } else if cell.flagged {
        '?'
    } else if reveal_mines && cell.mine {
        '*'
    } else {
        '.'
    }
}

/// Full-board snapshot as ordered rows of symbols
pub fn snapshot(grid: &Grid, reveal_mines: bool) -> Vec<Vec<char>> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| symbol_for(&grid[(row, col)], reveal_mines))
                .collect()
        })
        .collect()
}
