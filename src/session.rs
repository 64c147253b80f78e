//! This module contains the state a front end holds while one player works
//! on one puzzle.
//!
//! A [Session] owns the working grid together with an immutable snapshot of
//! the puzzle as it was carved or loaded, which supports resetting user
//! edits. Each session owns its grids exclusively; the engine keeps no
//! shared mutable state, so a server-style deployment can simply hold one
//! session per player.

use crate::{SIZE, SudokuGrid};
use crate::error::LoadError;
use crate::generator::{Carver, Difficulty, Generator};
use crate::hint::{self, Placement};
use crate::io;
use crate::solver;
use crate::validator;

use rand::Rng;

use std::path::Path;

/// One player's puzzle state: the working grid plus the original puzzle it
/// started from.
pub struct Session {
    grid: SudokuGrid,
    original: SudokuGrid
}

impl Session {

    /// Creates a session around an existing puzzle grid, of which a snapshot
    /// is taken as the original state.
    pub fn from_grid(grid: SudokuGrid) -> Session {
        Session {
            original: grid.clone(),
            grid
        }
    }

    /// Creates a session with a freshly generated puzzle at the given
    /// difficulty, using `rand::thread_rng()` for all random decisions.
    pub fn new_random(difficulty: Difficulty) -> Session {
        Session::with_rng(rand::thread_rng(), difficulty)
    }

    /// Creates a session with a freshly generated puzzle at the given
    /// difficulty. A full grid is generated, a puzzle is carved from it, and
    /// the carved puzzle becomes both the working grid and the original
    /// snapshot.
    pub fn with_rng(mut rng: impl Rng, difficulty: Difficulty) -> Session {
        let solution = Generator::new(&mut rng).generate();
        let puzzle = Carver::new(&mut rng).carve(&solution, difficulty);
        Session::from_grid(puzzle)
    }

    /// Gets a reference to the working grid.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the working grid, through which a front
    /// end applies the player's entries.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the original puzzle grid, as it was directly
    /// after carving or loading. This snapshot is never mutated.
    pub fn original(&self) -> &SudokuGrid {
        &self.original
    }

    /// Discards all edits by assigning the original snapshot back to the
    /// working grid.
    pub fn reset(&mut self) {
        self.grid.assign(&self.original);
    }

    /// Fills all empty cells of the working grid with a valid completion,
    /// revealing a full solution. Returns `false` if the working grid is
    /// unsolvable, in which case it remains unchanged. See [solver::solve].
    pub fn solve(&mut self) -> bool {
        solver::solve(&mut self.grid)
    }

    /// Fills one empty cell of the working grid with a legal number and
    /// returns the applied placement, or `None` if the grid is full. See
    /// [hint::next_hint].
    pub fn hint(&mut self) -> Option<Placement> {
        hint::next_hint(&mut self.grid)
    }

    /// Indicates whether a user-supplied solution is correct according to
    /// the classic rules. The candidate is only checked, never merged into
    /// the working grid. See [validator::is_solution_valid].
    pub fn check_solution(&self, candidate: &[[usize; SIZE]; SIZE]) -> bool {
        validator::is_solution_valid(candidate)
    }

    /// Replaces both the working grid and the original snapshot with a grid
    /// loaded from the file at the given path. If loading fails, the session
    /// is left completely unchanged.
    ///
    /// # Errors
    ///
    /// * `LoadError::Io` if the file cannot be read.
    /// * `LoadError::Parse` if its content is not a valid grid.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let grid = io::load_grid(path)?;
        self.original = grid.clone();
        self.grid = grid;
        Ok(())
    }

    /// Saves the working grid to the file at the given path in the
    /// canonical persisted format.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        io::save_grid(path, &self.grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("sudoku-classic-session-{}-{}",
            std::process::id(), name));
        path
    }

    fn easy_session() -> Session {
        Session::with_rng(ChaCha8Rng::seed_from_u64(1337), Difficulty::Easy)
    }

    #[test]
    fn new_session_starts_at_original() {
        let session = easy_session();

        assert_eq!(session.original(), session.grid());
        assert_eq!(Difficulty::Easy.cells_to_remove(),
            session.grid().count_empty());
        assert!(validator::is_grid_valid(session.grid()));
    }

    #[test]
    fn reset_discards_edits() {
        let mut session = easy_session();
        let hint = session.hint().unwrap();

        assert!(session.grid().has_number(hint.column, hint.row, hint.number)
            .unwrap());
        assert_ne!(session.original(), session.grid());

        session.reset();

        assert_eq!(session.original(), session.grid());
    }

    #[test]
    fn solve_fills_working_grid_only() {
        let mut session = easy_session();

        assert!(session.solve());
        assert!(session.grid().is_full());
        assert!(validator::is_grid_valid(session.grid()));
        assert!(!session.original().is_full());
        assert!(session.original().is_subset(session.grid()));
    }

    #[test]
    fn solved_grid_passes_solution_check() {
        let mut session = easy_session();
        assert!(session.solve());

        let mut candidate = [[0usize; SIZE]; SIZE];

        for row in 0..SIZE {
            for column in 0..SIZE {
                candidate[row][column] =
                    session.grid().get_cell(column, row).unwrap().unwrap();
            }
        }

        session.reset();

        assert!(session.check_solution(&candidate));

        candidate[0][0] = candidate[0][1];

        assert!(!session.check_solution(&candidate));
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("round-trip");
        let session = easy_session();
        session.save(&path).unwrap();

        let mut loaded = Session::from_grid(SudokuGrid::new());
        loaded.load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(session.grid(), loaded.grid());
        assert_eq!(loaded.grid(), loaded.original());
    }

    #[test]
    fn failed_load_leaves_session_unchanged() {
        let mut session = easy_session();
        let before = session.grid().clone();

        assert!(session.load(temp_path("missing")).is_err());
        assert_eq!(&before, session.grid());
        assert_eq!(&before, session.original());
    }
}
