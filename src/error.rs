//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing a persisted grid, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if they are greater than or equal to 9.
    OutOfBounds,

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that a requested difficulty tier is not one of the
    /// recognized literals `easy`, `medium`, `hard`, and `expert`. The
    /// literals are matched case-sensitively.
    InvalidDifficulty
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates lie outside the 9x9 grid"),
            SudokuError::InvalidNumber =>
                write!(f, "number is outside the range [1, 9]"),
            SudokuError::InvalidDifficulty =>
                write!(f, "difficulty must be one of 'easy', 'medium', \
                    'hard', and 'expert'")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a persisted
/// [SudokuGrid](crate::SudokuGrid). Parsing is all-or-nothing, so none of
/// these errors can leave a partially assigned grid behind.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the input contains less than the 9 lines required to
    /// describe a grid.
    WrongNumberOfRows,

    /// Indicates that a line does not contain exactly 9 whitespace-separated
    /// entries.
    WrongNumberOfColumns,

    /// Indicates that one of the entries could not be parsed as an integer.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (greater than
    /// 9). Note that 0 is legal in the persisted format, where it denotes an
    /// empty cell.
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfRows =>
                write!(f, "expected 9 lines of cells"),
            SudokuParseError::WrongNumberOfColumns =>
                write!(f, "expected 9 space-separated entries per line"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell entry is not an integer"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell entry is outside the range [0, 9]")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

/// An enumeration of the errors that may occur when loading a persisted
/// [SudokuGrid](crate::SudokuGrid) from a file.
#[derive(Debug)]
pub enum LoadError {

    /// The file could not be read at all.
    Io(io::Error),

    /// The file was read, but its content is not a valid grid.
    Parse(SudokuParseError)
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::Parse(e) => write!(f, "{}", e)
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<SudokuParseError> for LoadError {
    fn from(e: SudokuParseError) -> Self {
        LoadError::Parse(e)
    }
}
