//! Fixed-size board and grade grids
//!
//! Both grids are plain `Copy` arrays indexed by (row, column). Accessors on
//! the session hand out copies, so a renderer never holds a reference into
//! state that a later transition will overwrite.

use crate::core::WORD_LEN;

/// Number of guess attempts, one per board row
pub const MAX_GUESSES: usize = 5;

/// Grade code for a single submitted letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Grade {
    /// Not graded (empty cell or unsubmitted row)
    #[default]
    None = 0,
    /// Letter matches the target at this position
    RightSpot = 1,
    /// Letter exists in the target at a different position
    WrongSpot = 2,
}

/// The 5×5 letter grid: row = attempt index, column = letter index
///
/// Column 0 of the active row is pre-filled with the target's first letter
/// and is never user-editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<char>; WORD_LEN]; MAX_GUESSES],
}

impl Board {
    /// Get the cell at (row, column)
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, column: usize) -> Option<char> {
        self.cells[row][column]
    }

    /// Write a letter into a cell
    pub const fn set(&mut self, row: usize, column: usize, value: char) {
        self.cells[row][column] = Some(value);
    }

    /// Clear a cell
    pub const fn clear_cell(&mut self, row: usize, column: usize) {
        self.cells[row][column] = None;
    }

    /// Ready a row for input: column 0 pre-filled, columns 1-4 empty
    pub const fn prepare_row(&mut self, row: usize, first_letter: char) {
        self.cells[row][0] = Some(first_letter);
        let mut column = 1;
        while column < WORD_LEN {
            self.cells[row][column] = None;
            column += 1;
        }
    }

    /// Assemble the row into a word, or None while any cell is empty
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.cells[row].iter().copied().collect()
    }

    /// True when every cell of the row holds a letter
    #[must_use]
    pub fn row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(Option::is_some)
    }
}

/// The 5×5 grade grid parallel to the board
///
/// Only rows at or below the last submitted line carry non-`None` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeMatrix {
    grades: [[Grade; WORD_LEN]; MAX_GUESSES],
}

impl GradeMatrix {
    /// Get the grade at (row, column)
    #[inline]
    #[must_use]
    pub const fn grade(&self, row: usize, column: usize) -> Grade {
        self.grades[row][column]
    }

    /// Set the grade at (row, column)
    pub const fn set(&mut self, row: usize, column: usize, grade: Grade) {
        self.grades[row][column] = grade;
    }

    /// One row of grades
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> [Grade; WORD_LEN] {
        self.grades[row]
    }
}
