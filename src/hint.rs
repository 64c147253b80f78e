//! This module contains the derivation of single-cell hints.
//!
//! A hint is a single legal placement for one empty cell, found without
//! solving the rest of the grid. It reflects only local legality: on a grid
//! with multiple solutions, the hinted number is not guaranteed to match any
//! particular full solution, it is simply the first legal candidate in
//! ascending order for the first empty cell in scan order.

use crate::{SIZE, SudokuGrid};
use crate::validator;

use serde::{Deserialize, Serialize};

/// A single placement of a number into a cell, as produced by [next_hint].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {

    /// The column (x-coordinate) of the cell the number is placed in.
    pub column: usize,

    /// The row (y-coordinate) of the cell the number is placed in.
    pub row: usize,

    /// The placed number, in the range `[1, 9]`.
    pub number: usize
}

/// Scans the grid in row-major order for an empty cell that admits a legal
/// number and fills it with the lowest such number. The applied placement is
/// returned; note that filling the cell is a deliberate side effect, the
/// grid already contains the hint when this function returns.
///
/// Returns `None` if the grid is already full, or if no empty cell admits
/// any legal number (which cannot happen on a solvable grid).
pub fn next_hint(grid: &mut SudokuGrid) -> Option<Placement> {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.get_cell(column, row).unwrap().is_some() {
                continue;
            }

            for number in 1..=SIZE {
                if validator::is_placement_valid(grid, column, row, number) {
                    grid.set_cell(column, row, number).unwrap();

                    return Some(Placement {
                        column,
                        row,
                        number
                    });
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::generator::Generator;

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
    fn hint_fills_first_empty_cell_with_lowest_legal_number() {
        let mut grid = sample_puzzle();
        let hint = next_hint(&mut grid).unwrap();

        // The first empty cell is (2, 0). Its row holds 5, 3, and 7, its
        // column holds 8, and its block holds 5, 3, 6, 9, and 8, so the
        // lowest legal number is 1, even though the actual solution has a 4
        // there. Hints are locally legal, not globally consistent.
        assert_eq!(Placement { column: 2, row: 0, number: 1 }, hint);
        assert_eq!(Some(1), grid.get_cell(2, 0).unwrap());
    }

    #[test]
    fn hint_on_full_grid_is_none() {
        let mut grid = sample_puzzle();
        assert!(crate::solver::solve(&mut grid));

        let before = grid.clone();

        assert_eq!(None, next_hint(&mut grid));
        assert_eq!(before, grid);
    }

    #[test]
    fn hint_on_single_hole_grid_fills_it() {
        let mut generator = Generator::new_default();
        let mut grid = generator.generate();
        let removed = grid.get_cell(4, 6).unwrap().unwrap();
        grid.clear_cell(4, 6).unwrap();

        let hint = next_hint(&mut grid).unwrap();

        assert_eq!(Placement { column: 4, row: 6, number: removed }, hint);
        assert!(grid.is_full());
        assert_eq!(0, grid.count_empty());
    }
}
