//! Cells and candidate notes.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single cell of a board.
///
/// `value == 0` means the cell is empty. `locked` distinguishes immutable
/// givens from user-editable cells.
///
/// The [`Display`] implementation renders the cell position in the `r{n}c{n}`
/// notation used by hint messages (1-based).
///
/// # Examples
///
/// ```
/// use placewise_core::Cell;
///
/// let cell = Cell::new(0, 2, 4);
/// assert_eq!(cell.to_string(), "r1c3");
/// assert!(!cell.locked);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row coordinate, `0..size`.
    pub row: u8,
    /// Column coordinate, `0..size`.
    pub col: u8,
    /// Cell value, `0` when empty.
    pub value: u8,
    /// Whether the cell is an immutable given.
    pub locked: bool,
}

impl Cell {
    /// Creates an unlocked cell.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8, value: u8) -> Self {
        Self {
            row,
            col,
            value,
            locked: false,
        }
    }

    /// Creates a locked (given) cell.
    #[must_use]
    #[inline]
    pub const fn given(row: u8, col: u8, value: u8) -> Self {
        Self {
            row,
            col,
            value,
            locked: true,
        }
    }

    /// Returns `true` if the cell has no value.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

/// A candidate annotation: one surviving candidate value at one position.
///
/// Multiple notes may share a position, one per surviving candidate. Notes
/// are derived data (see [`candidates::compute_notes`]) unless explicitly
/// supplied by the host, in which case they are trusted as-is.
///
/// [`candidates::compute_notes`]: crate::candidates::compute_notes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Row coordinate, `0..size`.
    pub row: u8,
    /// Column coordinate, `0..size`.
    pub col: u8,
    /// Candidate value, `1..=size`.
    pub value: u8,
}

impl Note {
    /// Creates a note.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8, value: u8) -> Self {
        Self { row, col, value }
    }
}
