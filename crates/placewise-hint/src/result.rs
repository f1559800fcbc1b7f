//! The hint explanation payload.

use placewise_core::{Cell, Note};
use serde::{Deserialize, Serialize};

/// Classification of a hint.
///
/// Absence of an applicable hint is expressed as `Option<HintResult>` being
/// `None`, not as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintKind {
    /// A filled cell disagrees with the solved board.
    WrongValue,
    /// A group with all but one cell filled forces the last cell.
    FullHouse,
    /// A candidate value with exactly one possible cell in a group.
    HiddenSingle,
    /// A cell with exactly one surviving candidate.
    NakedSingle,
}

/// Identifier of a human-readable message template.
///
/// The engine never renders prose; the host's localization layer resolves the
/// template and interpolates [`HintMessage::args`] in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTemplate {
    /// "The value {0} at {1} is wrong."
    WrongValueDetail,
    /// "{0} is the last empty cell of its group; it must be {1}."
    FullHouseDetail,
    /// "Within its box, only {0} can hold {1}."
    HiddenSingleBoxDetail,
    /// "Within its row, only {0} can hold {1}."
    HiddenSingleRowDetail,
    /// "Within its column, only {0} can hold {1}."
    HiddenSingleColumnDetail,
    /// "{0} has a single remaining candidate, {1}."
    NakedSingleDetail,
}

/// A message template identifier plus its ordered interpolation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintMessage {
    /// Which template to render.
    pub template: MessageTemplate,
    /// Positional string arguments for the template.
    pub args: Vec<String>,
}

impl HintMessage {
    /// Creates a message.
    #[must_use]
    pub fn new<I, S>(template: MessageTemplate, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template,
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// A structured hint explanation.
///
/// One-shot value returned to the caller; the engine holds no state across
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResult {
    /// Classification of the hint.
    pub kind: HintKind,
    /// `true` when the hint only became detectable after locked-candidate
    /// filtering of the note set.
    pub via_locked_candidates: bool,
    /// The explanation template and its arguments.
    pub message: HintMessage,
    /// The cell the hint recommends filling, read from the solved board
    /// (for [`HintKind::WrongValue`], the offending cell of the current
    /// board).
    pub target_cell: Option<Cell>,
    /// Notes targeted by note-only hints. Unused by the shipped detectors;
    /// reserved for techniques that adjust notation instead of placing a
    /// value.
    pub target_notes: Option<Vec<Note>>,
    /// Cells that visually justify the hint, e.g. the group that is one cell
    /// from completion.
    pub help_cells: Vec<Cell>,
}

impl HintResult {
    /// Creates a hint targeting a cell, with no supporting cells.
    #[must_use]
    pub fn placement(kind: HintKind, message: HintMessage, target_cell: Cell) -> Self {
        Self {
            kind,
            via_locked_candidates: false,
            message,
            target_cell: Some(target_cell),
            target_notes: None,
            help_cells: Vec::new(),
        }
    }

    /// Returns a copy carrying the locked-candidate classification context.
    #[must_use]
    pub fn via_locked_candidates(self) -> Self {
        Self {
            via_locked_candidates: true,
            ..self
        }
    }

    /// Returns a copy with the given supporting cells.
    #[must_use]
    pub fn with_help_cells(self, help_cells: Vec<Cell>) -> Self {
        Self { help_cells, ..self }
    }
}
