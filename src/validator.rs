//! This module contains the constraint checking logic for classic Sudoku
//! rules: no duplicate number in any row, column, or 3x3 block.
//!
//! All functions here are free functions over an explicit grid reference and
//! have no side effects on it, so they can be used on grids owned by
//! concurrent sessions without any coordination.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};

/// Indicates whether the given `number` could be placed in the cell
/// specified by `column` and `row` without violating the classic rules.
/// That is the case if `number` does not already appear in the same row, the
/// same column, or the containing 3x3 block.
///
/// This performs at most 27 cell reads and does not mutate the grid. Note
/// that the content of the checked cell itself is *not* excluded from the
/// scan, so this function is meant to be asked about empty cells.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The number to check whether it could be placed in the
/// specified cell. Must be in the range `[1, 9]`.
///
/// # Panics
///
/// If `column` or `row` are out of bounds.
pub fn is_placement_valid(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for i in 0..SIZE {
        if grid.has_number(i, row, number).unwrap() ||
                grid.has_number(column, i, number).unwrap() {
            return false;
        }
    }

    let block_column = BLOCK_SIZE * (column / BLOCK_SIZE);
    let block_row = BLOCK_SIZE * (row / BLOCK_SIZE);

    for r in block_row..(block_row + BLOCK_SIZE) {
        for c in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_number(c, r, number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the entire grid matches the classic rules, that is,
/// every filled cell could legally be placed into the grid formed by all
/// other cells. Empty cells are always considered valid, so a partially
/// filled grid can be valid.
///
/// The scan works on a scratch copy in which the checked cell is cleared and
/// restored around each placement check, so the input grid is never mutated.
/// Scanning stops at the first violation.
pub fn is_grid_valid(grid: &SudokuGrid) -> bool {
    let mut scratch = grid.clone();

    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                scratch.clear_cell(column, row).unwrap();

                if !is_placement_valid(&scratch, column, row, number) {
                    return false;
                }

                scratch.set_cell(column, row, number).unwrap();
            }
        }
    }

    true
}

/// Indicates whether a user-supplied solution is correct. A solution is an
/// array of rows of claimed values for every cell. It is correct if every
/// value is in the range `[1, 9]` and the resulting full grid matches the
/// classic rules. Any out-of-range value immediately invalidates the whole
/// check.
///
/// The solution is checked on its own; it is *not* compared against the
/// puzzle it supposedly solves. Use [SudokuGrid::is_subset] for that.
pub fn is_solution_valid(candidate: &[[usize; SIZE]; SIZE]) -> bool {
    for row_values in candidate.iter() {
        for &value in row_values.iter() {
            if value < 1 || value > SIZE {
                return false;
            }
        }
    }

    // All values in range, so from_rows cannot fail.
    let grid = SudokuGrid::from_rows(*candidate).unwrap();
    is_grid_valid(&grid)
}
