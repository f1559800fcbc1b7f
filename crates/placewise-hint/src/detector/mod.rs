//! Hint detectors.
//!
//! Each detector implements the [`Detector`] trait: a pure check of the hint
//! context that either produces a fully explained [`HintResult`] or reports
//! absence. The engine walks an ordered chain of detectors and returns the
//! first hit, so adding a technique means inserting a detector at the right
//! priority position rather than rewriting control flow.

use std::fmt::Debug;

use placewise_core::{Board, GameType, Note};

pub use self::{
    full_house::FullHouse, hidden_single::HiddenSingle, locked_singles::LockedSingles,
    naked_single::NakedSingle, wrong_value::WrongValue,
};
use crate::{HintResult, HintSettings};

mod full_house;
mod hidden_single;
mod locked_singles;
mod naked_single;
mod wrong_value;

/// Read-only inputs shared by all detectors.
///
/// The solved board is the oracle for hint values and is never mutated.
/// Detectors that run against a filtered note set receive a context copy with
/// the notes swapped via [`HintContext::with_notes`].
#[derive(Debug, Clone, Copy)]
pub struct HintContext<'a> {
    /// The grid geometry.
    pub game_type: GameType,
    /// The current, possibly partially solved board.
    pub board: &'a Board,
    /// The unique correct solution.
    pub solved: &'a Board,
    /// The candidate note set under examination.
    pub notes: &'a [Note],
}

impl<'a> HintContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(board: &'a Board, solved: &'a Board, notes: &'a [Note]) -> Self {
        Self {
            game_type: board.game_type(),
            board,
            solved,
            notes,
        }
    }

    /// Returns a copy of this context examining a different note set.
    #[must_use]
    pub fn with_notes(&self, notes: &'a [Note]) -> Self {
        Self { notes, ..*self }
    }
}

/// A hint detection technique.
///
/// Detectors are pure functions of the context: they never mutate shared
/// state, which keeps them trivially testable in isolation and safe to
/// reorder or extend.
pub trait Detector: Debug + Send + Sync {
    /// Returns the name of the detector.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the detector.
    fn clone_box(&self) -> BoxedDetector;

    /// Checks whether this technique currently applies.
    ///
    /// Returns `None` when it does not; absence is a normal outcome, not an
    /// error. Detectors must be total over well-formed input: an empty note
    /// collection yields `None`, never a fault.
    fn detect(&self, ctx: &HintContext<'_>) -> Option<HintResult>;
}

/// A boxed detector.
pub type BoxedDetector = Box<dyn Detector>;

impl Clone for BoxedDetector {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Builds the detector chain for the given settings.
///
/// Detectors are ordered from most to least visible to a human solver:
/// wrong value, full house, hidden single, naked single, then the
/// locked-candidate escalation of the single detectors. Advanced techniques
/// (subsets, wings, fish, chains) are future insertions at the end of this
/// chain.
#[must_use]
pub fn chain_for(settings: HintSettings) -> Vec<BoxedDetector> {
    let mut chain: Vec<BoxedDetector> = Vec::new();
    if settings.check_wrong_value {
        chain.push(Box::new(WrongValue::new()));
    }
    if settings.full_house {
        chain.push(Box::new(FullHouse::new()));
    }
    if settings.hidden_single {
        chain.push(Box::new(HiddenSingle::new()));
    }
    if settings.naked_single {
        chain.push(Box::new(NakedSingle::new()));
    }
    if settings.locked_candidates && (settings.hidden_single || settings.naked_single) {
        chain.push(Box::new(LockedSingles::new(
            settings.hidden_single,
            settings.naked_single,
        )));
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_respects_settings() {
        let full: Vec<&str> = chain_for(HintSettings::default())
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(
            full,
            [
                "wrong value",
                "full house",
                "hidden single",
                "naked single",
                "locked candidate singles",
            ]
        );

        let no_singles = chain_for(HintSettings {
            hidden_single: false,
            naked_single: false,
            ..HintSettings::default()
        });
        // Locked-candidate escalation is pointless without single detection.
        assert_eq!(no_singles.len(), 2);
    }
}
