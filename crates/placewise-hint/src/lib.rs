//! Hint generation for placewise puzzles.
//!
//! Given the current board and its solved counterpart, [`HintEngine`] runs a
//! fixed-priority chain of detectors and returns the single most fundamental
//! hint as a structured [`HintResult`]. Rendering the explanation text is the
//! host's job; the engine only emits template identifiers and arguments.
//!
//! ```
//! use placewise_core::{Board, GameType};
//! use placewise_hint::{HintEngine, HintKind};
//!
//! let solved = Board::parse(
//!     GameType::DEFAULT_9X9,
//!     "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
//! )?;
//! let mut board = solved.clone();
//! board.set_value(4, 4, 0);
//!
//! let engine = HintEngine::new(board, solved)?;
//! let hint = engine.find_hint().unwrap();
//! assert_eq!(hint.kind, HintKind::FullHouse);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub use self::{engine::*, result::*, settings::*};

pub mod detector;
mod engine;
pub mod locked;
mod result;
mod settings;
pub mod testing;
