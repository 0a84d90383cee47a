// Board generation
// Samples a mine count in the fixed density range and places mines uniformly at random

use log::debug;
use rand::Rng;

use crate::lns_grid::Grid;

/// Mine density bounds, in percent of total cells
pub const MIN_MINE_PERCENT: usize = 10;
pub const MAX_MINE_PERCENT: usize = 20;

/// Pick a mine count uniformly between 10% and 20% of the board size,
/// both bounds rounded down. The bounds are clamped to a well-formed
/// `0 <= low <= high <= total` range so that tiny boards (where flooring
/// collapses the percentages) still get a valid draw.
pub fn mine_count<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> usize {
    let total = rows * cols;
    let low = (total * MIN_MINE_PERCENT / 100).min(total);
    let high = (total * MAX_MINE_PERCENT / 100).min(total).max(low);
    rng.gen_range(low..=high)
}

/// Generate a rows x cols grid with `num_mines` mines placed uniformly at
/// random without replacement, all cells unrevealed and unflagged, and
/// adjacency counts filled in. The caller must keep
/// `num_mines <= rows * cols`.
pub fn generate<R: Rng>(rows: usize, cols: usize, num_mines: usize, rng: &mut R) -> Grid {
    assert!(num_mines <= rows * cols, "more mines than cells");
    let mut grid = Grid::new(rows, cols);

    // Rejection sampling; density stays at or below 20%, so retries are rare
    let mut placed = 0;
    while placed < num_mines {
        let pos = (rng.gen_range(0..rows), rng.gen_range(0..cols));
        if !grid[pos].mine {
            grid[pos].mine = true;
            placed += 1;
        }
    }
    debug!("placed {placed} mines on a {rows}x{cols} board");

    fill_adjacency(&mut grid);
    grid
}

/// Generate a grid with mines at fixed positions. Positions must be
/// distinct and within bounds. Used by tests and deterministic setups.
pub fn generate_with_mines(rows: usize, cols: usize, mines: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for &(row, col) in mines {
        assert!(grid.contains(row, col), "mine ({row}, {col}) out of bounds");
        assert!(!grid[(row, col)].mine, "duplicate mine at ({row}, {col})");
        grid[(row, col)].mine = true;
    }
    fill_adjacency(&mut grid);
    grid
}

/// Set every non-mine cell's adjacency to its mined-neighbor count.
/// Mine cells keep 0.
fn fill_adjacency(grid: &mut Grid) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid[(row, col)].mine {
                continue;
            }
            let adjacent = grid
                .neighbors(row, col)
                .into_iter()
                .filter(|&pos| grid[pos].mine)
                .count() as u8;
            grid[(row, col)].adjacent = adjacent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mine_count_stays_in_density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for &(rows, cols) in &[(10, 10), (16, 16), (9, 5), (30, 16)] {
            let total = rows * cols;
            let low = total * MIN_MINE_PERCENT / 100;
            let high = total * MAX_MINE_PERCENT / 100;
            for _ in 0..200 {
                let n = mine_count(rows, cols, &mut rng);
                assert!(n >= low && n <= high, "{n} outside [{low}, {high}]");
            }
        }
    }

    #[test]
    fn mine_count_handles_degenerate_boards() {
        // Boards with fewer than 5 cells floor both bounds to zero
        let mut rng = StdRng::seed_from_u64(7);
        for &(rows, cols) in &[(1, 1), (1, 2), (2, 2), (1, 4)] {
            for _ in 0..50 {
                assert_eq!(0, mine_count(rows, cols, &mut rng));
            }
        }
        // 5 to 9 cells give the single-value range [0, 1]
        for _ in 0..50 {
            assert!(mine_count(3, 3, &mut rng) <= 1);
        }
    }

    #[test]
    fn generate_places_exact_mine_quota() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = generate(16, 16, 40, &mut rng);
        assert_eq!(40, grid.cells().filter(|c| c.mine).count());
        assert!(grid.cells().all(|c| !c.revealed && !c.flagged));
    }

    #[test]
    fn generate_saturated_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(2, 2, 4, &mut rng);
        assert!(grid.cells().all(|c| c.mine));
    }

    #[test]
    fn adjacency_matches_neighbor_scan() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = generate(9, 9, 10, &mut rng);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let cell = grid[(row, col)];
                if cell.mine {
                    assert_eq!(0, cell.adjacent);
                    continue;
                }
                let expected = grid
                    .neighbors(row, col)
                    .into_iter()
                    .filter(|&pos| grid[pos].mine)
                    .count() as u8;
                assert_eq!(expected, cell.adjacent, "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn adjacency_clips_at_edges() {
        // Single mine in a corner touches exactly three cells
        let grid = generate_with_mines(3, 3, &[(0, 0)]);
        assert_eq!(1, grid[(0, 1)].adjacent);
        assert_eq!(1, grid[(1, 0)].adjacent);
        assert_eq!(1, grid[(1, 1)].adjacent);
        assert_eq!(0, grid[(0, 2)].adjacent);
        assert_eq!(0, grid[(2, 2)].adjacent);
    }

    #[test]
    fn adjacency_counts_multiple_neighbors() {
        let grid = generate_with_mines(2, 2, &[(0, 0), (1, 1)]);
        assert_eq!(2, grid[(0, 1)].adjacent);
        assert_eq!(2, grid[(1, 0)].adjacent);
        // Mine cells keep a zero count
        assert_eq!(0, grid[(0, 0)].adjacent);
        assert_eq!(0, grid[(1, 1)].adjacent);
    }
}
