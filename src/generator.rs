//! This module contains logic for generating random Sudoku.
//!
//! Generation of Sudoku puzzles is done by first generating a full grid with
//! a [Generator] and then removing a difficulty-dependent number of cells
//! using a [Carver].

use crate::{SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::solver;
use crate::validator;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An enumeration of the difficulty tiers at which puzzles can be carved.
/// Each tier maps to a fixed number of cells that the [Carver] removes from
/// a full grid of 81 cells. This mapping is a fixed configuration table, not
/// derived from any property of the grid.
///
/// The tiers parse from exactly the lowercase literals `easy`, `medium`,
/// `hard`, and `expert`; anything else is rejected with
/// [SudokuError::InvalidDifficulty].
///
/// ```
/// use sudoku_classic::generator::Difficulty;
///
/// let difficulty: Difficulty = "hard".parse().unwrap();
/// assert_eq!(Difficulty::Hard, difficulty);
/// assert_eq!(55, difficulty.cells_to_remove());
/// assert!("impossible".parse::<Difficulty>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// 35 of the 81 cells are removed.
    Easy,

    /// 45 of the 81 cells are removed.
    Medium,

    /// 55 of the 81 cells are removed.
    Hard,

    /// 60 of the 81 cells are removed.
    Expert
}

impl Difficulty {

    /// Gets the number of cells the [Carver] removes from a full grid at
    /// this difficulty.
    pub fn cells_to_remove(self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
            Difficulty::Expert => 60
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert")
        }
    }
}

impl FromStr for Difficulty {
    type Err = SudokuError;

    fn from_str(s: &str) -> SudokuResult<Difficulty> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(SudokuError::InvalidDifficulty)
        }
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SIZE) {
            if validator::is_placement_valid(grid, column, row, number) {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that satisfy the
    /// classic rules and match all already present digits. Returns `true` on
    /// success. If there is no such completion, `false` is returned and the
    /// grid remains unchanged.
    ///
    /// This uses the same recursion as [solver::solve], except that the
    /// candidate numbers are shuffled independently at every cell, which is
    /// what makes different calls produce different grids.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> bool {
        self.fill_rec(grid, 0, 0)
    }

    /// Generates a new full random [SudokuGrid]. It is guaranteed that
    /// [validator::is_grid_valid] returns `true` on the result and that the
    /// result is full.
    ///
    /// Randomized backtracking over an empty grid can, with low probability,
    /// exhaust its search space without finding a completion. In that case
    /// the partial grid is discarded and the fill is retried from scratch
    /// until one succeeds.
    pub fn generate(&mut self) -> SudokuGrid {
        loop {
            let mut grid = SudokuGrid::new();

            if self.fill(&mut grid) {
                return grid;
            }
        }
    }
}

/// A carver removes cells from the output of a [Generator] to derive a
/// puzzle at a given [Difficulty]. A random number generator decides which
/// cells are removed; before committing each removal, the
/// [solver](crate::solver) is used as an oracle to confirm that the
/// remaining grid still admits at least one solution.
///
/// Note that this checks that *a* solution exists after each removal, not
/// that the solution is *unique*. A carved puzzle, particularly at high
/// difficulties, may admit multiple legal completions. This is a deliberate
/// scope limitation.
pub struct Carver<R: Rng> {
    rng: R
}

impl Carver<ThreadRng> {

    /// Creates a new carver that uses a [ThreadRng] to decide which cells
    /// are removed.
    pub fn new_default() -> Carver<ThreadRng> {
        Carver::new(rand::thread_rng())
    }
}

impl<R: Rng> Carver<R> {

    /// Creates a new carver that uses the given random number generator to
    /// decide which cells are removed.
    pub fn new(rng: R) -> Carver<R> {
        Carver {
            rng
        }
    }

    /// Derives a puzzle from the given full `solution` grid by removing
    /// exactly [Difficulty::cells_to_remove] cells. Cells are picked
    /// uniformly at random; picking an already empty cell does not count
    /// towards progress. A removal is only committed if the remaining grid
    /// is still solvable, otherwise the removed number is put back and
    /// another cell is picked.
    ///
    /// Each solvability probe runs on a clone of the carved grid, so the
    /// solver's completed grid never leaks into the returned puzzle.
    ///
    /// It is expected that the given `solution` is full, i.e. contains no
    /// empty cells; otherwise the requested number of removals may not be
    /// reachable and this method may not terminate.
    pub fn carve(&mut self, solution: &SudokuGrid, difficulty: Difficulty)
            -> SudokuGrid {
        let mut puzzle = solution.clone();
        let mut remaining = difficulty.cells_to_remove();

        while remaining > 0 {
            let column = self.rng.gen_range(0..SIZE);
            let row = self.rng.gen_range(0..SIZE);
            let number = match puzzle.get_cell(column, row).unwrap() {
                Some(number) => number,
                None => continue
            };

            puzzle.clear_cell(column, row).unwrap();
            let mut probe = puzzle.clone();

            if solver::solve(&mut probe) {
                remaining -= 1;
            }
            else {
                puzzle.set_cell(column, row, number).unwrap();
            }
        }

        puzzle
    }
}
