use placewise_core::{Cell, groups};

use super::{BoxedDetector, Detector, HintContext};
use crate::{HintKind, HintMessage, HintResult, MessageTemplate};

const NAME: &str = "full house";

/// Finds a group with all but one cell filled.
///
/// The single empty cell's value is forced by elimination. Group types are
/// scanned boxes first, then rows, then columns; within a group type the
/// first qualifying group wins. The group's filled cells become the
/// supporting cells of the hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullHouse;

impl FullHouse {
    /// Creates a new `FullHouse` detector.
    #[must_use]
    pub const fn new() -> Self {
        FullHouse
    }

    fn check_groups(ctx: &HintContext<'_>, groups: &[Vec<Cell>]) -> Option<HintResult> {
        let size = usize::from(ctx.game_type.size());
        for group in groups {
            let filled = group.iter().filter(|cell| cell.value != 0).count();
            if filled != size - 1 {
                continue;
            }
            let empty = group.iter().find(|cell| cell.value == 0)?;
            let target = ctx.solved.cell(empty.row, empty.col);
            let message = HintMessage::new(
                MessageTemplate::FullHouseDetail,
                [empty.to_string(), target.value.to_string()],
            );
            let help_cells = group
                .iter()
                .filter(|cell| cell.value != 0)
                .copied()
                .collect();
            return Some(
                HintResult::placement(HintKind::FullHouse, message, target)
                    .with_help_cells(help_cells),
            );
        }
        None
    }
}

impl Detector for FullHouse {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDetector {
        Box::new(*self)
    }

    fn detect(&self, ctx: &HintContext<'_>) -> Option<HintResult> {
        let partitions = [
            groups::boxes(ctx.board),
            groups::rows(ctx.board),
            groups::columns(ctx.board),
        ];
        partitions
            .iter()
            .find_map(|partition| Self::check_groups(ctx, partition))
    }
}

#[cfg(test)]
mod tests {
    use placewise_core::Cell;

    use super::*;
    use crate::testing::classic_solution;

    #[test]
    fn test_box_one_cell_from_completion() {
        let solved = classic_solution();
        let mut board = solved.clone();
        board.set_value(4, 4, 0);

        let ctx = HintContext::new(&board, &solved, &[]);
        let hint = FullHouse::new().detect(&ctx).unwrap();

        assert_eq!(hint.kind, HintKind::FullHouse);
        assert_eq!(hint.target_cell, Some(Cell::new(4, 4, 5)));
        assert_eq!(hint.message.template, MessageTemplate::FullHouseDetail);
        assert_eq!(hint.message.args, ["r5c5", "5"]);
        // The eight filled cells of box 4 justify the hint.
        assert_eq!(hint.help_cells.len(), 8);
        assert!(hint.help_cells.iter().all(|cell| cell.value != 0));
    }

    #[test]
    fn test_box_takes_priority_over_row() {
        let solved = classic_solution();

        // Row 0 is one cell from completion, but so is box 4; both involve
        // distinct cells, and the box detection must win.
        let mut board = solved.clone();
        board.set_value(0, 7, 0);
        board.set_value(4, 4, 0);
        // Break box 0..=2 completeness so row 0's box is not itself a hit.
        board.set_value(1, 7, 0);
        board.set_value(2, 6, 0);

        let ctx = HintContext::new(&board, &solved, &[]);
        let hint = FullHouse::new().detect(&ctx).unwrap();
        assert_eq!(hint.target_cell, Some(Cell::new(4, 4, 5)));
    }

    #[test]
    fn test_no_group_close_to_completion() {
        let solved = classic_solution();
        let mut board = solved.clone();
        // Remove two cells from every box.
        for band in 0..3u8 {
            for stack in 0..3u8 {
                board.set_value(band * 3, stack * 3, 0);
                board.set_value(band * 3 + 1, stack * 3 + 1, 0);
            }
        }

        let ctx = HintContext::new(&board, &solved, &[]);
        assert!(FullHouse::new().detect(&ctx).is_none());
    }
}
