//! Candidate derivation.
//!
//! Derives, for every empty cell, the set of legal candidate values given the
//! row, column, and box constraints of the current board. This is the baseline
//! notation a human solver would write when annotating a puzzle fully, and the
//! "legal moves" oracle underpinning every single-detection technique.

use crate::{Board, Note};

/// Computes a note for every legal candidate of every empty cell.
///
/// A value `v` in `1..=size` is a candidate at `(row, col)` when the cell is
/// empty and `v` does not already occur in that cell's row, column, or box.
/// Pure function of the board; the output is ordered row-major by position,
/// ascending by value within a position.
///
/// # Examples
///
/// ```
/// use placewise_core::{Board, GameType, Note, candidates};
///
/// let mut board = Board::empty(GameType::DEFAULT_9X9);
/// board.set_value(0, 0, 5);
///
/// let notes = candidates::compute_notes(&board);
/// // 5 is no longer a candidate anywhere in row 0.
/// assert!(!notes.contains(&Note::new(0, 3, 5)));
/// assert!(notes.contains(&Note::new(0, 3, 4)));
/// ```
#[must_use]
pub fn compute_notes(board: &Board) -> Vec<Note> {
    let game_type = board.game_type();
    let size = game_type.size();

    // One bitmask of used values per row, column, and box.
    let mut row_used = vec![0u32; usize::from(size)];
    let mut col_used = vec![0u32; usize::from(size)];
    let mut box_used = vec![0u32; usize::from(size)];
    for cell in board.cells() {
        if cell.value == 0 {
            continue;
        }
        let bit = 1u32 << cell.value;
        row_used[usize::from(cell.row)] |= bit;
        col_used[usize::from(cell.col)] |= bit;
        box_used[usize::from(game_type.box_index(cell.row, cell.col))] |= bit;
    }

    let mut notes = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if board.value(row, col) != 0 {
                continue;
            }
            let used = row_used[usize::from(row)]
                | col_used[usize::from(col)]
                | box_used[usize::from(game_type.box_index(row, col))];
            for value in 1..=size {
                if used & (1u32 << value) == 0 {
                    notes.push(Note::new(row, col, value));
                }
            }
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GameType;

    #[test]
    fn test_empty_board_has_all_candidates() {
        let board = Board::empty(GameType::DEFAULT_9X9);
        let notes = compute_notes(&board);
        assert_eq!(notes.len(), 81 * 9);
        assert_eq!(notes[0], Note::new(0, 0, 1));
        assert_eq!(notes[8], Note::new(0, 0, 9));
        assert_eq!(notes[9], Note::new(0, 1, 1));
    }

    #[test]
    fn test_peers_constrain_candidates() {
        let mut board = Board::empty(GameType::DEFAULT_9X9);
        board.set_value(0, 0, 5);

        let notes = compute_notes(&board);
        // No notes at the filled cell itself.
        assert!(!notes.iter().any(|n| n.row == 0 && n.col == 0));
        // 5 eliminated along the row, column, and box.
        assert!(!notes.contains(&Note::new(0, 8, 5)));
        assert!(!notes.contains(&Note::new(8, 0, 5)));
        assert!(!notes.contains(&Note::new(2, 2, 5)));
        // Unrelated cells keep 5.
        assert!(notes.contains(&Note::new(4, 4, 5)));
    }

    #[test]
    fn test_rectangular_sections() {
        let mut board = Board::empty(GameType::DEFAULT_6X6);
        board.set_value(0, 0, 3);

        let notes = compute_notes(&board);
        // Box 0 spans rows 0-1, columns 0-2.
        assert!(!notes.contains(&Note::new(1, 2, 3)));
        // (2, 2) is in box 2, outside box 0, row 0, and column 0.
        assert!(notes.contains(&Note::new(2, 2, 3)));
    }

    proptest! {
        // A derived note's value never already occurs in its row, column,
        // or box of the current board, regardless of board validity.
        #[test]
        fn prop_notes_never_conflict_with_peers(
            values in prop::collection::vec(0u8..=9, 81),
        ) {
            let gt = GameType::DEFAULT_9X9;
            let mut board = Board::empty(gt);
            for (i, value) in values.iter().enumerate() {
                board.set_value(u8::try_from(i / 9).unwrap(), u8::try_from(i % 9).unwrap(), *value);
            }

            for note in compute_notes(&board) {
                for cell in board.cells() {
                    if cell.value != note.value {
                        continue;
                    }
                    let same_row = cell.row == note.row;
                    let same_col = cell.col == note.col;
                    let same_box = gt.box_index(cell.row, cell.col)
                        == gt.box_index(note.row, note.col);
                    prop_assert!(!(same_row || same_col || same_box));
                }
            }
        }
    }
}
