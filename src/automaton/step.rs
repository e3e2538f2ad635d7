//! Next-generation computation
//!
//! `step` reads one generation and produces the next. The grid is bounded
//! and edge-clamped: an offset that falls outside the rectangle is simply
//! not a neighbor, so edge cells see at most 5 candidates and corner cells
//! at most 3. Nothing wraps.

use crate::grid::{Cell, GridState};

/// Conway's rule table for a single cell.
///
/// A live cell survives with 2 or 3 live neighbors; a dead cell becomes
/// alive with exactly 3; every other combination is dead.
pub fn life_rule(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Count live neighbors of `(row, col)`, excluding out-of-bounds offsets.
fn count_neighbors(grid: &GridState, row: usize, col: usize) -> u8 {
    let columns = grid.columns() as i64;
    let rows = grid.rows() as i64;
    let cells = grid.cells();

    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if nr < 0 || nc < 0 || nr >= rows || nc >= columns {
                continue;
            }
            if cells[(nr * columns + nc) as usize].is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Compute the next generation of `grid`.
///
/// Pure with respect to its input: every new value is derived from the
/// input generation only, the input is never mutated, and the output has
/// identical dimensions. An all-dead grid is a fixed point.
pub fn step(grid: &GridState) -> GridState {
    let mut next = grid.clone();
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let index = row * grid.columns() + col;
            let neighbors = count_neighbors(grid, row, col);
            next.cells_mut()[index] = life_rule(grid.cells()[index], neighbors);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(columns: usize, rows: usize, alive: &[(usize, usize)]) -> GridState {
        let mut grid = GridState::new(columns, rows).unwrap();
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(life_rule(Cell::Alive, 2), Cell::Alive);
        assert_eq!(life_rule(Cell::Alive, 3), Cell::Alive);
        assert_eq!(life_rule(Cell::Alive, 1), Cell::Dead);
        assert_eq!(life_rule(Cell::Alive, 4), Cell::Dead);
        assert_eq!(life_rule(Cell::Dead, 3), Cell::Alive);
        assert_eq!(life_rule(Cell::Dead, 2), Cell::Dead);
        assert_eq!(life_rule(Cell::Dead, 8), Cell::Dead);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with(6, 6, &[(2, 1), (2, 2), (2, 3), (4, 4)]);
        let before = grid.clone();
        let _next = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_all_dead_is_a_fixed_point() {
        let grid = GridState::new(9, 4).unwrap();
        let next = step(&grid);
        assert_eq!(next.dimensions(), (9, 4));
        assert!(next.is_empty());
    }

    #[test]
    fn test_block_still_life() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let next = step(&grid);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let after_one = step(&horizontal);
        assert_eq!(after_one, vertical);

        let after_two = step(&after_one);
        assert_eq!(after_two, horizontal);
    }

    #[test]
    fn test_lone_corner_cell_dies_without_wrapping() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        let next = step(&grid);
        // Edge clamping: the corner cell has no live neighbors and nothing
        // wraps around to keep it alive or to birth cells elsewhere.
        assert!(next.is_empty());
    }

    #[test]
    fn test_edge_row_counts_do_not_wrap() {
        // Three cells along the top edge form a blinker whose vertical phase
        // pokes into row 1, not around to the bottom row.
        let grid = grid_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        let next = step(&grid);
        assert_eq!(next, grid_with(5, 5, &[(0, 2), (1, 2)]));
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = grid_with(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = step(&grid);
        }
        // After four generations a glider reappears shifted one cell down
        // and one cell right.
        let shifted = grid_with(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(grid, shifted);
    }

    #[test]
    fn test_step_preserves_dimensions_on_single_row_grid() {
        let grid = grid_with(5, 1, &[(0, 1), (0, 2), (0, 3)]);
        let next = step(&grid);
        assert_eq!(next.dimensions(), (5, 1));
        // With only one row, every cell has at most 2 neighbors: all die.
        assert!(next.is_empty());
    }
}
