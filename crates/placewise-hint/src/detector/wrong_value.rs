use super::{BoxedDetector, Detector, HintContext};
use crate::{HintKind, HintMessage, HintResult, MessageTemplate};

const NAME: &str = "wrong value";

/// Reports the first filled cell whose value differs from the solved board.
///
/// This models "you made a mistake" feedback and runs before every deduction
/// detector: there is no point suggesting a logical move while the board
/// contradicts the solution. Scans row-major and returns the first mismatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct WrongValue;

impl WrongValue {
    /// Creates a new `WrongValue` detector.
    #[must_use]
    pub const fn new() -> Self {
        WrongValue
    }
}

impl Detector for WrongValue {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDetector {
        Box::new(*self)
    }

    fn detect(&self, ctx: &HintContext<'_>) -> Option<HintResult> {
        let size = ctx.game_type.size();
        for row in 0..size {
            for col in 0..size {
                let cell = ctx.board.cell(row, col);
                if cell.value != 0 && cell.value != ctx.solved.value(row, col) {
                    let message = HintMessage::new(
                        MessageTemplate::WrongValueDetail,
                        [cell.value.to_string(), cell.to_string()],
                    );
                    // The offending cell of the current board, not the
                    // solved one; the host highlights the mistake itself.
                    return Some(HintResult::placement(HintKind::WrongValue, message, cell));
                }
            }
        }
        None
    }
}
