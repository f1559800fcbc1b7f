//! Grid geometry configuration.

use serde::{Deserialize, Serialize};

/// Geometry of a Sudoku variant.
///
/// A `GameType` is a plain configuration value: the grid size together with
/// the width and height of a section (box). Different puzzle variants (4×4,
/// 6×6, 9×9, ...) are values of this type, not separate types.
///
/// # Invariants
///
/// * `section_width * section_height == size`
/// * `size % section_width == 0` and `size % section_height == 0`
/// * `1 <= size <= 16` (the board text codec encodes one cell per character)
///
/// # Examples
///
/// ```
/// use placewise_core::GameType;
///
/// let classic = GameType::DEFAULT_9X9;
/// assert_eq!(classic.size(), 9);
/// assert_eq!(classic.box_index(4, 7), 5);
///
/// let small = GameType::new(6, 3, 2)?;
/// assert_eq!(small.boxes_per_row(), 2);
/// # Ok::<(), placewise_core::GameTypeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameType")]
pub struct GameType {
    size: u8,
    section_width: u8,
    section_height: u8,
}

/// Error returned when a [`GameType`] would violate its geometry invariants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
pub enum GameTypeError {
    /// The grid size is outside the supported range.
    #[display("grid size {size} is outside the supported range 1-16")]
    SizeOutOfRange {
        /// The rejected size.
        size: u8,
    },
    /// The section dimensions do not tile the grid.
    #[display(
        "sections of {section_width}x{section_height} do not tile a grid of size {size}"
    )]
    SectionMismatch {
        /// The grid size.
        size: u8,
        /// The rejected section width.
        section_width: u8,
        /// The rejected section height.
        section_height: u8,
    },
}

impl GameType {
    /// The classic 9×9 grid with 3×3 sections.
    pub const DEFAULT_9X9: Self = Self {
        size: 9,
        section_width: 3,
        section_height: 3,
    };

    /// A 6×6 grid with 3×2 sections.
    pub const DEFAULT_6X6: Self = Self {
        size: 6,
        section_width: 3,
        section_height: 2,
    };

    /// A 12×12 grid with 4×3 sections.
    pub const DEFAULT_12X12: Self = Self {
        size: 12,
        section_width: 4,
        section_height: 3,
    };

    /// Creates a game type, validating the geometry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GameTypeError`] if the size is outside 1-16 or the sections
    /// do not tile the grid.
    pub fn new(size: u8, section_width: u8, section_height: u8) -> Result<Self, GameTypeError> {
        if !(1..=16).contains(&size) {
            return Err(GameTypeError::SizeOutOfRange { size });
        }
        if section_width == 0
            || section_height == 0
            || u16::from(section_width) * u16::from(section_height) != u16::from(size)
            || size % section_width != 0
            || size % section_height != 0
        {
            return Err(GameTypeError::SectionMismatch {
                size,
                section_width,
                section_height,
            });
        }
        Ok(Self {
            size,
            section_width,
            section_height,
        })
    }

    /// Returns the grid size (the number of rows, columns, and boxes).
    #[must_use]
    #[inline]
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Returns the width of a section (box).
    #[must_use]
    #[inline]
    pub const fn section_width(self) -> u8 {
        self.section_width
    }

    /// Returns the height of a section (box).
    #[must_use]
    #[inline]
    pub const fn section_height(self) -> u8 {
        self.section_height
    }

    /// Returns the number of boxes per box row.
    #[must_use]
    #[inline]
    pub const fn boxes_per_row(self) -> u8 {
        self.size / self.section_width
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Returns the box index of the cell at `(row, col)`.
    ///
    /// Boxes are numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not a valid grid coordinate.
    #[must_use]
    pub fn box_index(self, row: u8, col: u8) -> u8 {
        assert!(row < self.size && col < self.size);
        (row / self.section_height) * self.boxes_per_row() + col / self.section_width
    }
}

#[derive(Debug, Deserialize)]
struct RawGameType {
    size: u8,
    section_width: u8,
    section_height: u8,
}

impl TryFrom<RawGameType> for GameType {
    type Error = GameTypeError;

    fn try_from(raw: RawGameType) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.section_width, raw.section_height)
    }
}
