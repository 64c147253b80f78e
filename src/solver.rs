//! This module contains the logic for solving Sudoku.
//!
//! Solving is done by a plain backtracking search: cells are visited in
//! row-major order, the first empty cell is speculatively filled with the
//! lowest legal number, and the placement is undone if the rest of the grid
//! cannot be completed. There is no constraint propagation and no timeout.
//! The worst case is exponential, but for the 9x9 grids handled by this
//! crate, which are carved from known-solvable grids, practical runtimes are
//! small.

use crate::{SIZE, SudokuGrid};
use crate::validator;

fn solve_rec(grid: &mut SudokuGrid, column: usize, row: usize) -> bool {
    if row == SIZE {
        // Walked past the last cell, so the grid is full and valid.
        return true;
    }

    let next_column = (column + 1) % SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if grid.get_cell(column, row).unwrap().is_some() {
        return solve_rec(grid, next_column, next_row);
    }

    for number in 1..=SIZE {
        if validator::is_placement_valid(grid, column, row, number) {
            grid.set_cell(column, row, number).unwrap();

            if solve_rec(grid, next_column, next_row) {
                return true;
            }

            grid.clear_cell(column, row).unwrap();
        }
    }

    false
}

/// Fills all empty cells of the given grid with numbers that satisfy the
/// classic rules, by recursively testing all valid numbers for each cell in
/// row-major order and in ascending order of numbers.
///
/// Returns `true` if a completion was found, in which case the grid is full
/// and valid afterwards. Returns `false` if no completion exists, in which
/// case every speculative placement has been undone and the grid is exactly
/// in its state at call time. An unsolvable grid is an expected outcome, not
/// an error.
///
/// A grid with no empty cells is reported as solved without any search, even
/// if it violates the rules; use [validator::is_grid_valid] to check filled
/// cells.
pub fn solve(grid: &mut SudokuGrid) -> bool {
    solve_rec(grid, 0, 0)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn sample_puzzle() -> SudokuGrid {
        SudokuGrid::from_rows([
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9]
        ]).unwrap()
    }

    #[test]
    fn solves_well_known_puzzle_to_unique_solution() {
        let mut grid = sample_puzzle();

        assert!(solve(&mut grid));

        let expected = SudokuGrid::from_rows([
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9]
        ]).unwrap();

        assert_eq!(expected, grid);
    }

    #[test]
    fn solution_is_superset_of_puzzle() {
        let puzzle = sample_puzzle();
        let mut grid = puzzle.clone();

        assert!(solve(&mut grid));
        assert!(puzzle.is_subset(&grid));
    }

    #[test]
    fn full_grid_solved_without_search() {
        let mut grid = sample_puzzle();
        assert!(solve(&mut grid));

        let before = grid.clone();

        assert!(solve(&mut grid));
        assert_eq!(before, grid);
    }

    #[test]
    fn empty_grid_solved_to_valid_completion() {
        let mut grid = SudokuGrid::new();

        assert!(solve(&mut grid));
        assert!(grid.is_full());
        assert!(crate::validator::is_grid_valid(&grid));
    }

    #[test]
    fn unsolvable_grid_reported_and_restored() {
        // Row 0 holds 1 to 8, and the 9 needed at (8, 0) is blocked by the 9
        // in the same column.
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        grid.set_cell(8, 1, 9).unwrap();
        let before = grid.clone();

        assert!(!solve(&mut grid));
        assert_eq!(before, grid);
    }
}
