//! Core data structures for the Placewise hint engine.
//!
//! This crate provides the board model shared by hint detection components:
//! grid geometry, cells, candidate notes, and the textual codecs used to
//! exchange board state with a host application.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Geometry** - [`game_type`]: the size and section (box) dimensions of a
//!    puzzle variant, modeled as a plain configuration value.
//! 2. **Board state** - [`cell`] and [`board`]: a `size × size` row-major
//!    arrangement of cells, plus candidate annotations ([`Note`]).
//! 3. **Derived views** - [`candidates`]: the legal candidate values for every
//!    empty cell; [`groups`]: the row / column / box partitions that deduction
//!    techniques reason about.
//!
//! Textual round-trip codecs for boards and notes live in [`board`] and
//! [`notes`] respectively.
//!
//! # Examples
//!
//! ```
//! use placewise_core::{Board, GameType, candidates};
//!
//! let board = Board::parse(
//!     GameType::DEFAULT_9X9,
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//!
//! // Every empty cell gets a note per legal candidate value.
//! let notes = candidates::compute_notes(&board);
//! assert!(notes.iter().all(|note| board.value(note.row, note.col) == 0));
//! # Ok::<(), placewise_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod candidates;
pub mod cell;
pub mod game_type;
pub mod groups;
pub mod notes;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseBoardError},
    cell::{Cell, Note},
    game_type::{GameType, GameTypeError},
    notes::{ParseNotesError, format_notes, parse_notes},
};
