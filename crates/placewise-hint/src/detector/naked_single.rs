use super::{BoxedDetector, Detector, HintContext};
use crate::{HintKind, HintMessage, HintResult, MessageTemplate};

const NAME: &str = "naked single";

/// Finds a position with exactly one surviving candidate.
///
/// Notes are grouped by position; positions are scanned in row-major order,
/// so the result is deterministic even for note sets supplied in arbitrary
/// order. Runs against whatever note set the context supplies, raw or
/// locked-candidate-filtered.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` detector.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Detector for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDetector {
        Box::new(*self)
    }

    fn detect(&self, ctx: &HintContext<'_>) -> Option<HintResult> {
        if ctx.notes.is_empty() {
            return None;
        }

        let size = usize::from(ctx.game_type.size());
        let mut counts = vec![0u32; size * size];
        for note in ctx.notes {
            counts[usize::from(note.row) * size + usize::from(note.col)] += 1;
        }

        let index = counts.iter().position(|&count| count == 1)?;
        let row = u8::try_from(index / size).ok()?;
        let col = u8::try_from(index % size).ok()?;
        let target = ctx.solved.cell(row, col);
        let message = HintMessage::new(
            MessageTemplate::NakedSingleDetail,
            [target.to_string(), target.value.to_string()],
        );
        Some(HintResult::placement(HintKind::NakedSingle, message, target))
    }
}
