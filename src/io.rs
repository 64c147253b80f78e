//! This module contains the text persistence of [SudokuGrid]s and the
//! append-only action journal.
//!
//! # Persisted format
//!
//! The canonical persisted format is deliberately plain: 9 lines, each with
//! 9 space-separated integers, where `0` denotes an empty cell.
//!
//! ```text
//! 5 3 0 0 7 0 0 0 0
//! 6 0 0 1 9 5 0 0 0
//! ...
//! ```
//!
//! This is the only format this crate reads or writes to files. The
//! decorated layout with `|` and `- ` block separators that
//! [SudokuGrid]'s `Display` implementation produces is presentation output
//! only and is not accepted by [parse_grid]. Loading is all-or-nothing: a
//! malformed input yields an error and never a partially assigned grid.

use crate::{SIZE, SudokuGrid};
use crate::error::{LoadError, SudokuParseError, SudokuParseResult};

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Parses a grid from the canonical persisted format (see the
/// [module documentation](self)). Lines beyond the ninth are ignored, which
/// tolerates trailing newlines.
///
/// # Errors
///
/// Any specialization of `SudokuParseError` (see that documentation).
pub fn parse_grid(text: &str) -> SudokuParseResult<SudokuGrid> {
    let mut grid = SudokuGrid::new();
    let mut lines = text.lines();

    for row in 0..SIZE {
        let line = lines.next()
            .ok_or(SudokuParseError::WrongNumberOfRows)?;
        let entries: Vec<&str> = line.split_whitespace().collect();

        if entries.len() != SIZE {
            return Err(SudokuParseError::WrongNumberOfColumns);
        }

        for (column, entry) in entries.iter().enumerate() {
            let number = entry.parse::<usize>()?;

            if number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            if number > 0 {
                grid.set_cell(column, row, number).unwrap();
            }
        }
    }

    Ok(grid)
}

/// Converts the grid into a `String` in the canonical persisted format, in a
/// way that is consistent with [parse_grid]. That is, a grid that is
/// converted to a string and parsed again will not change.
///
/// ```
/// use sudoku_classic::SudokuGrid;
/// use sudoku_classic::io;
///
/// let mut grid = SudokuGrid::new();
/// grid.set_cell(1, 1, 4).unwrap();
///
/// let text = io::to_grid_string(&grid);
/// let parsed = io::parse_grid(&text).unwrap();
/// assert_eq!(grid, parsed);
/// ```
pub fn to_grid_string(grid: &SudokuGrid) -> String {
    let mut lines = Vec::with_capacity(SIZE);

    for row in 0..SIZE {
        let line = (0..SIZE)
            .map(|column|
                grid.get_cell(column, row).unwrap().unwrap_or(0).to_string())
            .collect::<Vec<String>>()
            .join(" ");
        lines.push(line);
    }

    lines.join("\n")
}

/// Loads a grid from the file at the given path, which must contain the
/// canonical persisted format.
///
/// # Errors
///
/// * `LoadError::Io` if the file cannot be read.
/// * `LoadError::Parse` if its content is not a valid grid.
pub fn load_grid(path: impl AsRef<Path>) -> Result<SudokuGrid, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_grid(&text)?)
}

/// Saves a grid to the file at the given path in the canonical persisted
/// format, overwriting any previous content.
pub fn save_grid(path: impl AsRef<Path>, grid: &SudokuGrid)
        -> io::Result<()> {
    let mut text = to_grid_string(grid);
    text.push('\n');
    fs::write(path, text)
}

/// An append-only text log of user-facing actions, one `action: details`
/// line per entry. The journal is purely observational; nothing in this
/// crate ever reads it back.
pub struct Journal {
    file: File
}

impl Journal {

    /// Opens the journal at the given path for appending, creating the file
    /// if it does not exist. Entries already in the file are kept.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Journal> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Journal {
            file
        })
    }

    /// Appends one `action: details` line to the journal.
    pub fn record(&mut self, action: &str, details: &str) -> io::Result<()> {
        writeln!(self.file, "{}: {}", action, details)
    }
}
