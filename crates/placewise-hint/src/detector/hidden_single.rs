use placewise_core::{Note, groups};
use tinyvec::TinyVec;

use super::{BoxedDetector, Detector, HintContext};
use crate::{HintKind, HintMessage, HintResult, MessageTemplate};

const NAME: &str = "hidden single";

/// Finds a candidate value with exactly one possible cell within a group.
///
/// The cell may carry other candidates too; the value is "hidden" among them.
/// Box detections take priority over row detections, which take priority over
/// column detections:
///
/// * per box, the first candidate value (in order of first appearance in that
///   box's notes) occurring in exactly one note is that box's single; across
///   boxes the single with the lowest value wins;
/// * per row and per column, `(line, value)` groups with exactly one note are
///   candidates, and the occurrence with the minimum value wins.
///
/// Runs against whatever note set the context supplies, which may be raw or
/// locked-candidate-filtered.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

/// Accumulator entry: a candidate value, how often it occurs, and its first
/// occurrence.
#[derive(Debug, Default, Clone, Copy)]
struct ValueGroup {
    value: u8,
    count: u32,
    first: Note,
}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` detector.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }

    /// Returns the first candidate value of the box occurring exactly once,
    /// in order of first appearance.
    fn box_single(box_notes: &[Note]) -> Option<Note> {
        let mut value_groups: TinyVec<[ValueGroup; 16]> = TinyVec::new();
        for &note in box_notes {
            if let Some(group) = value_groups.iter_mut().find(|g| g.value == note.value) {
                group.count += 1;
            } else {
                value_groups.push(ValueGroup {
                    value: note.value,
                    count: 1,
                    first: note,
                });
            }
        }
        value_groups
            .iter()
            .find(|group| group.count == 1)
            .map(|group| group.first)
    }

    /// Returns the lowest-valued `(line, value)` singleton, where `line` is
    /// the row or column coordinate selected by `line_of`.
    fn line_single(notes: &[Note], line_of: fn(Note) -> u8) -> Option<Note> {
        let mut line_groups: Vec<(u8, ValueGroup)> = Vec::new();
        for &note in notes {
            let line = line_of(note);
            if let Some((_, group)) = line_groups
                .iter_mut()
                .find(|(l, g)| *l == line && g.value == note.value)
            {
                group.count += 1;
            } else {
                line_groups.push((
                    line,
                    ValueGroup {
                        value: note.value,
                        count: 1,
                        first: note,
                    },
                ));
            }
        }
        // First minimal value in encounter order among singletons.
        let mut best: Option<Note> = None;
        for (_, group) in &line_groups {
            if group.count != 1 {
                continue;
            }
            if best.is_none_or(|b| group.value < b.value) {
                best = Some(group.first);
            }
        }
        best
    }

    fn build_hint(ctx: &HintContext<'_>, single: Note, template: MessageTemplate) -> HintResult {
        let target = ctx.solved.cell(single.row, single.col);
        let message =
            HintMessage::new(template, [target.to_string(), target.value.to_string()]);
        HintResult::placement(HintKind::HiddenSingle, message, target)
    }
}

impl Detector for HiddenSingle {
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

        let note_boxes = groups::note_boxes(ctx.notes, ctx.game_type);
        let mut box_singles: TinyVec<[Note; 16]> = note_boxes
            .iter()
            .filter_map(|notes| Self::box_single(notes))
            .collect();
        box_singles.sort_by_key(|note| note.value);

        if let Some(&single) = box_singles.first() {
            return Some(Self::build_hint(
                ctx,
                single,
                MessageTemplate::HiddenSingleBoxDetail,
            ));
        }
        if let Some(single) = Self::line_single(ctx.notes, |note| note.row) {
            return Some(Self::build_hint(
                ctx,
                single,
                MessageTemplate::HiddenSingleRowDetail,
            ));
        }
        if let Some(single) = Self::line_single(ctx.notes, |note| note.col) {
            return Some(Self::build_hint(
                ctx,
                single,
                MessageTemplate::HiddenSingleColumnDetail,
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use placewise_core::Cell;

    use super::*;
    use crate::testing::{classic_solution, empty_board};

    fn detect(notes: &[Note]) -> Option<HintResult> {
        let board = empty_board();
        let solved = classic_solution();
        let ctx = HintContext::new(&board, &solved, notes);
        HiddenSingle::new().detect(&ctx)
    }

    #[test]
    fn test_box_single_beats_row_single() {
        // Value 3 has exactly one candidate position within box 0, while
        // value 4 is a row-only single in row 5 (it occurs twice in box 4).
        let notes = [
            Note::new(0, 0, 3),
            Note::new(0, 0, 9),
            Note::new(5, 3, 4),
            Note::new(3, 4, 4),
        ];
        let hint = detect(&notes).unwrap();
        assert_eq!(hint.kind, HintKind::HiddenSingle);
        assert_eq!(
            hint.message.template,
            MessageTemplate::HiddenSingleBoxDetail
        );
        // Target is read from the solved board at the single's position.
        assert_eq!(hint.target_cell, Some(Cell::new(0, 0, 5)));
        assert_eq!(hint.message.args, ["r1c1", "5"]);
    }

    #[test]
    fn test_box_single_is_first_encountered_value() {
        // Box 0 has two singleton values. The first one encountered in the
        // box's note order (7) wins over the numerically smaller 3.
        let notes = [Note::new(0, 0, 7), Note::new(1, 1, 3)];
        let hint = detect(&notes).unwrap();
        assert_eq!(hint.target_cell.unwrap().row, 0);
        assert_eq!(hint.target_cell.unwrap().col, 0);
    }

    #[test]
    fn test_lowest_value_wins_across_boxes() {
        // Box 0's single is 7, box 1's is 2; the lower value wins.
        let notes = [
            Note::new(0, 0, 7),
            Note::new(0, 3, 2),
        ];
        let hint = detect(&notes).unwrap();
        assert_eq!(hint.target_cell.unwrap().col, 3);
    }

    #[test]
    fn test_row_single_beats_column_single() {
        // Value 6 occurs twice in box 4 but only once in row 3; value 2 is a
        // column single in column 0 (twice in column... once). Make the row
        // candidate value higher to prove priority is structural, not by
        // value.
        let notes = [
            Note::new(3, 3, 6),
            Note::new(4, 4, 6),
            Note::new(4, 3, 6),
            Note::new(5, 5, 6),
            // Column single with a lower value, also duplicated within its
            // box and row so only the column grouping finds it.
            Note::new(6, 0, 2),
            Note::new(6, 1, 2),
            Note::new(8, 1, 2),
        ];
        // Row groups: (3,6) count 1 at (3,3); rows 4 has two 6s; rows 6 and
        // 8 have multiple/single 2s -- (8,2) is also a row single but 6 < ...
        // no: row singles are (3,6)=6 and (8,2)=2, minimum value wins.
        let hint = detect(&notes).unwrap();
        assert_eq!(
            hint.message.template,
            MessageTemplate::HiddenSingleRowDetail
        );
        assert_eq!(hint.target_cell.unwrap().row, 8);
        assert_eq!(hint.target_cell.unwrap().col, 1);
    }

    #[test]
    fn test_column_single_found_last() {
        // Every box, and every row, sees value 5 twice; column 0 sees it
        // once.
        let notes = [
            Note::new(0, 0, 5),
            Note::new(0, 1, 5),
            Note::new(4, 4, 5),
            Note::new(4, 5, 5),
        ];
        // Column groups: (0,5) count 1, (1,5) count 1, (4,5) count 1,
        // (5,5) count 1 -- all value 5; the first encountered wins.
        let hint = detect(&notes).unwrap();
        assert_eq!(
            hint.message.template,
            MessageTemplate::HiddenSingleColumnDetail
        );
        assert_eq!(hint.target_cell.unwrap().row, 0);
        assert_eq!(hint.target_cell.unwrap().col, 0);
    }

    #[test]
    fn test_empty_notes_yield_nothing() {
        assert!(detect(&[]).is_none());
    }
}
