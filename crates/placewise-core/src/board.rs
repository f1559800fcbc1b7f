//! Board state and its textual codec.

use std::fmt::{self, Display, Write as _};

use crate::{Cell, GameType};

/// A `size × size` row-major arrangement of [`Cell`]s.
///
/// Two boards typically coexist during hinting: the *current* board (possibly
/// partially solved, possibly containing an incorrect entry) and the *solved*
/// board, which serves as the oracle for hint values and is never mutated.
/// The hint engine treats both as read-only; mutation methods exist only so a
/// host can construct board state.
///
/// # Text codec
///
/// [`Board::parse`] and the [`Display`] implementation form a total, lossless,
/// deterministic round-trip. One character per cell, row-major: `0` (or `.` or
/// `_` on input) for empty, `1`-`9` then `a`-`g` for values 10-16. Whitespace
/// is ignored on input.
///
/// # Examples
///
/// ```
/// use placewise_core::{Board, GameType};
///
/// let text =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
/// let board = Board::parse(GameType::DEFAULT_9X9, text)?;
/// assert_eq!(board.value(0, 0), 5);
/// assert_eq!(board.to_string(), text);
/// # Ok::<(), placewise_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    game_type: GameType,
    cells: Vec<Cell>,
}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text does not contain exactly `size²` cell characters.
    #[display("expected {expected} cell characters, found {found}")]
    BadLength {
        /// Number of cell characters expected.
        expected: usize,
        /// Number of cell characters found.
        found: usize,
    },
    /// A character is not a valid cell value.
    #[display("invalid cell character {character:?}")]
    BadCharacter {
        /// The offending character.
        character: char,
    },
    /// A parsed value exceeds the grid size.
    #[display("cell value {value} exceeds grid size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The grid size.
        size: u8,
    },
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn empty(game_type: GameType) -> Self {
        let size = game_type.size();
        let mut cells = Vec::with_capacity(game_type.cell_count());
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(row, col, 0));
            }
        }
        Self { game_type, cells }
    }

    /// Parses board text into a board.
    ///
    /// All parsed cells are unlocked; use [`mark_givens`](Self::mark_givens)
    /// to lock the filled cells of a freshly parsed puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if the text does not contain exactly
    /// `size²` valid cell characters.
    pub fn parse(game_type: GameType, text: &str) -> Result<Self, ParseBoardError> {
        let size = game_type.size();
        let mut board = Self::empty(game_type);
        let mut index = 0usize;
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                continue;
            }
            if index >= board.cells.len() {
                index += 1;
                continue;
            }
            let value = match c {
                '.' | '_' => 0,
                _ => {
                    let digit = c
                        .to_digit(17)
                        .ok_or(ParseBoardError::BadCharacter { character: c })?;
                    u8::try_from(digit)
                        .map_err(|_| ParseBoardError::BadCharacter { character: c })?
                }
            };
            if value > size {
                return Err(ParseBoardError::ValueOutOfRange { value, size });
            }
            board.cells[index].value = value;
            index += 1;
        }
        if index != board.cells.len() {
            return Err(ParseBoardError::BadLength {
                expected: board.cells.len(),
                found: index,
            });
        }
        Ok(board)
    }

    /// Returns the board's geometry.
    #[must_use]
    #[inline]
    pub const fn game_type(&self) -> GameType {
        self.game_type
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not a valid grid coordinate.
    #[must_use]
    #[inline]
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns the value at `(row, col)`, `0` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not a valid grid coordinate.
    #[must_use]
    #[inline]
    pub fn value(&self, row: u8, col: u8) -> u8 {
        self.cell(row, col).value
    }

    /// Sets the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range or `value > size`.
    pub fn set_value(&mut self, row: u8, col: u8, value: u8) {
        assert!(value <= self.game_type.size());
        let index = self.index(row, col);
        self.cells[index].value = value;
    }

    /// Marks every filled cell as a locked given.
    ///
    /// Intended for boards freshly parsed from a puzzle definition, before
    /// user entries are applied.
    pub fn mark_givens(&mut self) {
        for cell in &mut self.cells {
            cell.locked = cell.value != 0;
        }
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Returns `true` if every cell has a value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.value != 0)
    }

    fn index(&self, row: u8, col: u8) -> usize {
        let size = self.game_type.size();
        assert!(row < size && col < size);
        usize::from(row) * usize::from(size) + usize::from(col)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = char::from_digit(u32::from(cell.value), 17).ok_or(fmt::Error)?;
            f.write_char(c)?;
        }
        Ok(())
    }
}
