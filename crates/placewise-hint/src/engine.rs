use log::{debug, trace};
use placewise_core::{Board, GameType, Note, candidates};

use crate::{
    HintResult, HintSettings,
    detector::{self, HintContext},
};

/// The hint engine: finds the easiest logically-justified next move.
///
/// Constructed once per hint request from a current board and its unique
/// solution; both are read-only for the engine's duration and the engine
/// holds no state across calls, so [`find_hint`](Self::find_hint) is
/// idempotent and safe to invoke from any worker context. Every detector
/// performs only bounded grid-sized scans, so a call returns promptly; a
/// caller cancels simply by discarding the result.
///
/// # Examples
///
/// ```
/// use placewise_core::{Board, GameType};
/// use placewise_hint::HintEngine;
///
/// let solved = Board::parse(
///     GameType::DEFAULT_9X9,
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
/// )?;
/// let mut board = solved.clone();
/// board.set_value(4, 4, 0);
///
/// let engine = HintEngine::new(board, solved)?;
/// let hint = engine.find_hint().expect("one cell is trivially forced");
/// assert_eq!(hint.target_cell.unwrap().value, 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct HintEngine {
    board: Board,
    solved: Board,
    notes: Option<Vec<Note>>,
    settings: HintSettings,
}

/// Error returned when engine inputs violate the caller contract.
///
/// These are programming-contract violations by the caller, not recoverable
/// engine conditions; failing fast here beats producing a misleading hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The two boards have different geometries.
    #[display("current and solved boards have different geometries")]
    GeometryMismatch,
    /// The solved board has an empty cell.
    #[display("solved board is incomplete at r{}c{}", row + 1, col + 1)]
    SolvedBoardIncomplete {
        /// Row of the first empty cell.
        row: u8,
        /// Column of the first empty cell.
        col: u8,
    },
    /// A locked given of the current board disagrees with the solved board.
    #[display("given at r{}c{} contradicts the solved board", row + 1, col + 1)]
    GivenContradictsSolution {
        /// Row of the contradicting given.
        row: u8,
        /// Column of the contradicting given.
        col: u8,
    },
}

impl HintEngine {
    /// Creates an engine for one hint request.
    ///
    /// Candidate notes are derived from the current board on demand unless
    /// supplied via [`with_notes`](Self::with_notes).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the boards disagree on geometry, the solved
    /// board is not fully filled, or a locked given contradicts the solved
    /// board.
    pub fn new(board: Board, solved: Board) -> Result<Self, EngineError> {
        if board.game_type() != solved.game_type() {
            return Err(EngineError::GeometryMismatch);
        }
        for cell in solved.cells() {
            if cell.value == 0 {
                return Err(EngineError::SolvedBoardIncomplete {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
        for cell in board.cells() {
            if cell.locked && cell.value != 0 && cell.value != solved.value(cell.row, cell.col) {
                return Err(EngineError::GivenContradictsSolution {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
        Ok(Self {
            board,
            solved,
            notes: None,
            settings: HintSettings::default(),
        })
    }

    /// Supplies pre-existing notes, e.g. restored from saved state.
    ///
    /// Supplied notes are trusted as-is and candidate derivation is skipped.
    #[must_use]
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Replaces the default settings.
    #[must_use]
    pub fn with_settings(mut self, settings: HintSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the engine's settings.
    #[must_use]
    pub fn settings(&self) -> HintSettings {
        self.settings
    }

    /// Returns the grid geometry.
    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.board.game_type()
    }

    /// Finds the easiest applicable hint, if any.
    ///
    /// Walks the configured detector chain in priority order and returns the
    /// first hit. `None` means no hint is available at the configured
    /// difficulty ceiling; this is a normal outcome, not an error.
    #[must_use]
    pub fn find_hint(&self) -> Option<HintResult> {
        let derived;
        let notes: &[Note] = match &self.notes {
            Some(notes) => notes,
            None => {
                derived = candidates::compute_notes(&self.board);
                &derived
            }
        };

        trace!(
            "hint request: {} notes, settings {:?}",
            notes.len(),
            self.settings
        );
        let ctx = HintContext::new(&self.board, &self.solved, notes);
        for detector in detector::chain_for(self.settings) {
            if let Some(hint) = detector.detect(&ctx) {
                debug!("hint found by detector {:?}", detector.name());
                return Some(hint);
            }
        }
        debug!("no hint available at the configured difficulty ceiling");
        None
    }
}

#[cfg(test)]
mod tests {
    use placewise_core::Cell;

    use super::*;
    use crate::{
        HintKind,
        testing::{HintTester, classic_puzzle, classic_solution},
    };

    #[test]
    fn test_wrong_value_bypasses_everything() {
        // The board contains both a full house and a wrong value; the wrong
        // value wins regardless of the other detectors.
        let solved = classic_solution();
        let mut board = solved.clone();
        board.set_value(4, 4, 0);
        board.set_value(8, 8, 1); // solved value is 9

        HintTester::new(board, solved)
            .assert_kind(HintKind::WrongValue)
            .assert_target(8, 8, 1);
    }

    #[test]
    fn test_full_house_before_singles() {
        let solved = classic_solution();
        let mut board = solved.clone();
        board.set_value(4, 4, 0);

        // The blank cell is also a naked single, but full house is the more
        // visible classification.
        HintTester::new(board, solved)
            .assert_kind(HintKind::FullHouse)
            .assert_target(4, 4, 5);
    }

    #[test]
    fn test_solved_board_yields_no_hint() {
        let solved = classic_solution();

        for settings in [
            HintSettings::default(),
            HintSettings {
                locked_candidates: false,
                ..HintSettings::default()
            },
            HintSettings {
                check_wrong_value: false,
                full_house: false,
                ..HintSettings::default()
            },
        ] {
            HintTester::new(solved.clone(), solved.clone())
                .with_settings(settings)
                .assert_no_hint();
        }
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let engine = HintEngine::new(classic_puzzle(), classic_solution()).unwrap();
        assert_eq!(engine.find_hint(), engine.find_hint());
    }

    #[test]
    fn test_disabled_detectors_are_skipped() {
        let solved = classic_solution();
        let mut board = solved.clone();
        board.set_value(4, 4, 0);

        // With full house off, the same move surfaces as a single instead.
        let hint = HintTester::new(board, solved)
            .with_settings(HintSettings {
                full_house: false,
                ..HintSettings::default()
            })
            .hint()
            .unwrap();
        assert_eq!(hint.kind, HintKind::HiddenSingle);
        assert_eq!(hint.target_cell, Some(Cell::new(4, 4, 5)));
    }

    #[test]
    fn test_locked_candidates_toggle() {
        use crate::testing::{empty_board, escalation_notes};

        // No raw single exists in the fixture, so everything hinges on the
        // locked-candidate escalation.
        HintTester::new(empty_board(), classic_solution())
            .with_notes(escalation_notes())
            .with_settings(HintSettings {
                locked_candidates: false,
                ..HintSettings::default()
            })
            .assert_no_hint();

        HintTester::new(empty_board(), classic_solution())
            .with_notes(escalation_notes())
            .assert_kind(HintKind::HiddenSingle)
            .assert_target(3, 0, 8)
            .assert_via_locked_candidates(true);
    }

    #[test]
    fn test_supplied_notes_skip_derivation() {
        // The board would derive plenty of notes, but the supplied (empty)
        // set is trusted as-is, so no single can be found.
        HintTester::new(classic_puzzle(), classic_solution())
            .with_notes(Vec::new())
            .assert_no_hint();
    }

    #[test]
    fn test_geometry_mismatch_fails_fast() {
        use placewise_core::{Board, GameType};

        let board = Board::empty(GameType::DEFAULT_6X6);
        let solved = classic_solution();
        assert_eq!(
            HintEngine::new(board, solved).unwrap_err(),
            EngineError::GeometryMismatch
        );
    }

    #[test]
    fn test_incomplete_solution_fails_fast() {
        let mut solved = classic_solution();
        solved.set_value(3, 7, 0);
        assert_eq!(
            HintEngine::new(classic_puzzle(), solved).unwrap_err(),
            EngineError::SolvedBoardIncomplete { row: 3, col: 7 }
        );
    }

    #[test]
    fn test_contradicting_given_fails_fast() {
        let mut board = classic_puzzle();
        board.mark_givens();
        board.set_value(0, 0, 1); // given was 5
        assert_eq!(
            HintEngine::new(board, classic_solution()).unwrap_err(),
            EngineError::GivenContradictsSolution { row: 0, col: 0 }
        );
    }
}
