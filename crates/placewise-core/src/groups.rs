//! Row, column, and box partitions of boards and notes.
//!
//! Deduction techniques reason about the three partitions of the grid: rows
//! (identity), columns (transposed), and boxes (determined by the section
//! dimensions). Notes get an analogous box partition.

use crate::{Board, Cell, GameType, Note};

/// Returns the rows of the board, each a group of `size` cells.
#[must_use]
pub fn rows(board: &Board) -> Vec<Vec<Cell>> {
    let size = board.game_type().size();
    (0..size)
        .map(|row| (0..size).map(|col| board.cell(row, col)).collect())
        .collect()
}

/// Returns the columns of the board; group `i` holds `board[*][i]` in row
/// order.
#[must_use]
pub fn columns(board: &Board) -> Vec<Vec<Cell>> {
    let size = board.game_type().size();
    (0..size)
        .map(|col| (0..size).map(|row| board.cell(row, col)).collect())
        .collect()
}

/// Returns the boxes of the board, numbered left to right, top to bottom.
///
/// Cells within a box appear in row-major order.
#[must_use]
pub fn boxes(board: &Board) -> Vec<Vec<Cell>> {
    let game_type = board.game_type();
    let mut boxes: Vec<Vec<Cell>> = vec![Vec::new(); usize::from(game_type.size())];
    for cell in board.cells() {
        boxes[usize::from(game_type.box_index(cell.row, cell.col))].push(cell);
    }
    boxes
}

/// Partitions a flat note collection by box.
///
/// A note belongs to box `i` iff its position does; notes keep their relative
/// order within each box. The same box-index formula is used for notes as for
/// cells, so the partition is correct for rectangular sections as well as
/// square ones.
#[must_use]
pub fn note_boxes(notes: &[Note], game_type: GameType) -> Vec<Vec<Note>> {
    let mut boxes: Vec<Vec<Note>> = vec![Vec::new(); usize::from(game_type.size())];
    for &note in notes {
        boxes[usize::from(game_type.box_index(note.row, note.col))].push(note);
    }
    boxes
}
