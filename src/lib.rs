// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Storing, printing, and persisting Sudoku grids
//! * Checking validity of individual placements, entire grids, and
//! user-supplied solutions according to standard rules
//! * Solving Sudoku using a backtracking algorithm
//! * Generating full random grids and carving puzzles out of them at a
//! chosen difficulty
//! * Deriving single-cell hints for a partially filled grid
//!
//! # Grids
//!
//! The central data structure is the [SudokuGrid], a 9x9 grid of cells which
//! each may or may not be occupied by a number from 1 to 9. In the persisted
//! text format, an empty cell is written as `0` (see the [io] module).
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(2, 0, 4).unwrap();
//! assert_eq!(Some(4), grid.get_cell(2, 0).unwrap());
//! assert_eq!(80, grid.count_empty());
//! ```
//!
//! # Checking validity
//!
//! The [validator] module checks placements and grids against the standard
//! rules: no duplicate number in any row, column, or 3x3 block.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::validator;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 4).unwrap();
//!
//! // 4 is already present in row 0, so it cannot go to column 5.
//! assert!(!validator::is_placement_valid(&grid, 5, 0, 4));
//! assert!(validator::is_placement_valid(&grid, 5, 0, 7));
//! ```
//!
//! # Solving Sudoku
//!
//! The [solver] module fills all empty cells of a grid by recursively
//! testing all valid numbers for each cell, or reports that no completion
//! exists. An unsolvable grid is an ordinary `false` result, not an error.
//!
//! # Generating puzzles
//!
//! Generation of puzzles is done in two steps: generating a full grid with a
//! [Generator](generator::Generator) and then removing a
//! difficulty-dependent number of cells with a [Carver](generator::Carver).
//! Both need a random number generator, for which we use the `Rng` trait
//! from the [rand](https://rust-random.github.io/rand/rand/index.html)
//! crate.
//!
//! ```
//! use sudoku_classic::generator::{Carver, Difficulty, Generator};
//! use sudoku_classic::{solver, validator};
//!
//! // new_default yields a generator/carver backed by rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let mut carver = Carver::new_default();
//!
//! let solution = generator.generate();
//! assert!(solution.is_full());
//! assert!(validator::is_grid_valid(&solution));
//!
//! let puzzle = carver.carve(&solution, Difficulty::Easy);
//! assert_eq!(35, puzzle.count_empty());
//!
//! // The carved puzzle always admits at least one completion.
//! let mut completion = puzzle.clone();
//! assert!(solver::solve(&mut completion));
//! ```
//!
//! Note that the carver only checks that the puzzle remains solvable after
//! each removal, not that its solution is unique. Puzzles carved at high
//! difficulties may admit multiple completions.
//!
//! # Sessions
//!
//! The [session] module bundles a working grid with an immutable snapshot of
//! the puzzle as it was carved or loaded, which supports resetting user
//! edits. This is the state a text or graphical front end would hold, one
//! instance per player.

pub mod error;
pub mod generator;
pub mod hint;
pub mod io;
pub mod session;
pub mod solver;
pub mod validator;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of a [SudokuGrid]. This is fixed to 9,
/// since this crate only deals with classic Sudoku.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a block, that is, one of the nine
/// non-overlapping 3x3 subgrids partitioning the grid.
pub const BLOCK_SIZE: usize = 3;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid composed of cells that are organized into 3x3 blocks.
/// Each cell may or may not be occupied by a number from 1 to 9. Numbers
/// outside that range are rejected by [SudokuGrid::set_cell], so they can
/// never be stored.
///
/// `SudokuGrid` implements `Display` with the human-readable layout below,
/// where empty cells are printed as `0`. This layout is for presentation
/// only; the persisted format is the plain one defined in the [io] module.
///
/// ```text
/// 5 3 0 | 0 7 0 | 0 0 0
/// 6 0 0 | 1 9 5 | 0 0 0
/// 0 9 8 | 0 0 0 | 0 6 0
/// - - - - - - - - - - -
/// 8 0 0 | 0 6 0 | 0 0 3
/// ...
/// ```
///
/// Serialization with [serde](https://serde.rs/) goes through the persisted
/// text format, so a grid serializes to a single string.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SIZE * SIZE]
        }
    }

    /// Creates a grid from an array of rows, where each entry is a number
    /// from 0 to 9 and 0 denotes an empty cell. This is mostly useful for
    /// constructing fixed grids in code and tests.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidNumber` if any entry is greater than 9.
    pub fn from_rows(rows: [[usize; SIZE]; SIZE]) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for (row, row_values) in rows.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value > 0 {
                    grid.set_cell(column, row, value)?;
                }
            }
        }

        Ok(grid)
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Counts the number of empty cells in this grid. This is always equal
    /// to `81 - count_clues()`.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(_) => self_cell == other_cell,
                    None => true
                }
            })
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    let mut line = String::new();

    for column in 0..SIZE {
        if column != 0 && column % BLOCK_SIZE == 0 {
            line.push_str("| ");
        }

        let number = grid.get_cell(column, row).unwrap().unwrap_or(0);
        line.push_str(&number.to_string());
        line.push(' ');
    }

    line.trim_end().to_owned()
}

fn separator_row() -> String {
    "- ".repeat(SIZE + BLOCK_SIZE - 1).trim_end().to_owned()
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row != 0 && row % BLOCK_SIZE == 0 {
                f.write_str(separator_row().as_str())?;
                f.write_str("\n")?;
            }

            f.write_str(content_row(self, row).as_str())?;

            if row != SIZE - 1 {
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        io::to_grid_string(&grid)
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(s: String) -> SudokuParseResult<SudokuGrid> {
        io::parse_grid(&s)
    }
}
