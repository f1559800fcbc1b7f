//! Test utilities for hint detection.
//!
//! This module provides [`HintTester`], a fluent harness for verifying engine
//! behavior, plus the classic board fixtures shared by detector tests.
//!
//! # Example
//!
//! ```
//! use placewise_hint::{HintKind, testing::{HintTester, classic_solution}};
//!
//! let solved = classic_solution();
//! let mut board = solved.clone();
//! board.set_value(0, 0, 0);
//!
//! HintTester::new(board, solved)
//!     .assert_kind(HintKind::FullHouse)
//!     .assert_target(0, 0, 5);
//! ```

use placewise_core::{Board, GameType, Note};

use crate::{HintEngine, HintKind, HintResult, HintSettings, MessageTemplate};

/// The well-known 9×9 puzzle used as a fixture throughout the test suite.
#[must_use]
pub fn classic_puzzle() -> Board {
    Board::parse(
        GameType::DEFAULT_9X9,
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    )
    .expect("fixture board text is valid")
}

/// The unique solution of [`classic_puzzle`].
#[must_use]
pub fn classic_solution() -> Board {
    Board::parse(
        GameType::DEFAULT_9X9,
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    )
    .expect("fixture board text is valid")
}

/// An empty 9×9 board, a neutral current board for custom-note scenarios.
#[must_use]
pub fn empty_board() -> Board {
    Board::empty(GameType::DEFAULT_9X9)
}

/// A note set with no raw single anywhere, built to exercise
/// locked-candidate escalation.
///
/// Every (box, value), (row, value), and (column, value) grouping counts
/// two or more, and every position carries two candidates. Box 0 confines
/// value 5 to row 0, so type-1 elimination removes the row-0 fives outside
/// box 0; box 1 confines value 5 to row 0 as well, removing the box-0 pair
/// in turn. The first single to surface afterwards is value 5 by column
/// grouping, at (3, 0).
#[must_use]
pub fn escalation_notes() -> Vec<Note> {
    vec![
        // Value 5.
        Note::new(0, 0, 5),
        Note::new(0, 1, 5),
        Note::new(0, 4, 5),
        Note::new(0, 5, 5),
        Note::new(3, 0, 5),
        Note::new(3, 1, 5),
        Note::new(4, 4, 5),
        Note::new(4, 5, 5),
        // Value 7.
        Note::new(0, 4, 7),
        Note::new(0, 5, 7),
        Note::new(1, 4, 7),
        Note::new(1, 5, 7),
        // Value 1.
        Note::new(0, 0, 1),
        Note::new(0, 1, 1),
        Note::new(3, 0, 1),
        Note::new(3, 1, 1),
        // Value 2.
        Note::new(1, 4, 2),
        Note::new(1, 5, 2),
        Note::new(4, 4, 2),
        Note::new(4, 5, 2),
    ]
}

/// A test harness for verifying hint results.
///
/// Wraps a [`HintEngine`] and exposes chainable, panicking assertions. The
/// engine is stateless, so every assertion re-runs the full detector chain;
/// a passing chain therefore also exercises idempotence.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct HintTester {
    engine: HintEngine,
}

impl HintTester {
    /// Creates a tester from a current and a solved board.
    ///
    /// # Panics
    ///
    /// Panics if the boards violate the engine's caller contract.
    #[track_caller]
    #[must_use]
    pub fn new(board: Board, solved: Board) -> Self {
        let engine = HintEngine::new(board, solved).expect("tester boards satisfy the contract");
        Self { engine }
    }

    /// Supplies a trusted note set instead of deriving one.
    #[must_use]
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.engine = self.engine.with_notes(notes);
        self
    }

    /// Replaces the default settings.
    #[must_use]
    pub fn with_settings(mut self, settings: HintSettings) -> Self {
        self.engine = self.engine.with_settings(settings);
        self
    }

    /// Runs the engine once and returns the raw result.
    #[must_use]
    pub fn hint(&self) -> Option<HintResult> {
        self.engine.find_hint()
    }

    /// Asserts that a hint is found and returns it.
    #[track_caller]
    #[must_use]
    pub fn expect_hint(&self) -> HintResult {
        self.hint().expect("expected a hint, found none")
    }

    /// Asserts that no hint is available.
    #[track_caller]
    pub fn assert_no_hint(&self) {
        let hint = self.hint();
        assert!(hint.is_none(), "expected no hint, found {hint:?}");
    }

    /// Asserts the classification of the found hint.
    #[track_caller]
    pub fn assert_kind(self, kind: HintKind) -> Self {
        let hint = self.expect_hint();
        assert_eq!(hint.kind, kind, "unexpected hint kind: {hint:?}");
        self
    }

    /// Asserts the message template of the found hint.
    #[track_caller]
    pub fn assert_template(self, template: MessageTemplate) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.message.template, template,
            "unexpected message template: {hint:?}"
        );
        self
    }

    /// Asserts the target cell position and value of the found hint.
    #[track_caller]
    pub fn assert_target(self, row: u8, col: u8, value: u8) -> Self {
        let hint = self.expect_hint();
        let target = hint
            .target_cell
            .unwrap_or_else(|| panic!("hint has no target cell: {hint:?}"));
        assert_eq!(
            (target.row, target.col, target.value),
            (row, col, value),
            "unexpected target cell: {hint:?}"
        );
        self
    }

    /// Asserts whether the hint carries the locked-candidate context.
    #[track_caller]
    pub fn assert_via_locked_candidates(self, expected: bool) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.via_locked_candidates, expected,
            "unexpected locked-candidate context: {hint:?}"
        );
        self
    }

    /// Asserts the number of supporting cells of the found hint.
    #[track_caller]
    pub fn assert_help_cells_len(self, expected: usize) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.help_cells.len(),
            expected,
            "unexpected supporting cells: {hint:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_consistent() {
        let puzzle = classic_puzzle();
        let solution = classic_solution();
        assert!(solution.is_filled());
        for cell in puzzle.cells() {
            if cell.value != 0 {
                assert_eq!(cell.value, solution.value(cell.row, cell.col));
            }
        }
    }

    #[test]
    fn test_tester_round_trip() {
        let solved = classic_solution();
        let mut board = solved.clone();
        board.set_value(8, 0, 0);

        HintTester::new(board, solved)
            .assert_kind(HintKind::FullHouse)
            .assert_target(8, 0, 3)
            .assert_via_locked_candidates(false)
            .assert_help_cells_len(8);
    }
}
