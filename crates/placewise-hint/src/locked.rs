//! Locked-candidate eliminations over note sets.
//!
//! A candidate value is *locked* when its possible positions within one group
//! are confined to the intersection with another group, permitting
//! eliminations in the second group outside the intersection. All functions
//! here are pure transformations: input note set in, locked groups or a
//! filtered copy out, never in-place mutation.

use placewise_core::{GameType, Note, groups};

/// Locked note groups, split by the line the candidate is confined to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedGroups {
    /// Groups whose notes all share one row.
    pub rows: Vec<Vec<Note>>,
    /// Groups whose notes all share one column.
    pub columns: Vec<Vec<Note>>,
}

/// Computes type-1 (pointing) locked groups.
///
/// For each box and candidate value: if every occurrence of the value within
/// the box shares the same row, the value can be eliminated from the rest of
/// that row outside the box; symmetric for columns. A value occurring once in
/// a box qualifies for both lists.
#[must_use]
pub fn type1_eliminations(notes: &[Note], game_type: GameType) -> LockedGroups {
    let mut locked = LockedGroups::default();
    for box_notes in groups::note_boxes(notes, game_type) {
        for group in value_groups(&box_notes) {
            if group.iter().all(|note| note.row == group[0].row) {
                locked.rows.push(group.clone());
            }
            if group.iter().all(|note| note.col == group[0].col) {
                locked.columns.push(group);
            }
        }
    }
    locked
}

/// Computes type-2 (claiming) locked groups.
///
/// For each row and candidate value: if every occurrence of the value within
/// the row falls in the same box, the value could be eliminated from the rest
/// of that box; symmetric for columns. Computed for extension only: no
/// shipped detector consumes these eliminations.
#[must_use]
pub fn type2_eliminations(notes: &[Note], game_type: GameType) -> LockedGroups {
    let section_width = game_type.section_width();
    let section_height = game_type.section_height();

    let mut locked = LockedGroups::default();
    for line in line_groups(notes, |note| note.row) {
        for group in value_groups(&line) {
            if group
                .iter()
                .all(|note| note.col / section_width == group[0].col / section_width)
            {
                locked.rows.push(group);
            }
        }
    }
    for line in line_groups(notes, |note| note.col) {
        for group in value_groups(&line) {
            if group
                .iter()
                .all(|note| note.row / section_height == group[0].row / section_height)
            {
                locked.columns.push(group);
            }
        }
    }
    locked
}

/// Returns a copy of the note set with type-1 eliminations applied.
///
/// For every row-locked group, notes sharing the group's row and value but
/// not belonging to the group are dropped; symmetric for column-locked
/// groups. Single detection can then be re-run against the filtered set.
#[must_use]
pub fn apply_type1(notes: &[Note], game_type: GameType) -> Vec<Note> {
    let locked = type1_eliminations(notes, game_type);
    notes
        .iter()
        .copied()
        .filter(|note| {
            let eliminated_by_row = locked.rows.iter().any(|group| {
                note.row == group[0].row && note.value == group[0].value && !group.contains(note)
            });
            let eliminated_by_col = locked.columns.iter().any(|group| {
                note.col == group[0].col && note.value == group[0].value && !group.contains(note)
            });
            !(eliminated_by_row || eliminated_by_col)
        })
        .collect()
}

/// Groups notes by candidate value, preserving first-appearance order.
fn value_groups(notes: &[Note]) -> Vec<Vec<Note>> {
    let mut value_order: Vec<u8> = Vec::new();
    for note in notes {
        if !value_order.contains(&note.value) {
            value_order.push(note.value);
        }
    }
    value_order
        .into_iter()
        .map(|value| {
            notes
                .iter()
                .filter(|note| note.value == value)
                .copied()
                .collect()
        })
        .collect()
}

/// Groups notes by a line coordinate, preserving first-appearance order.
fn line_groups(notes: &[Note], line_of: fn(&Note) -> u8) -> Vec<Vec<Note>> {
    let mut line_order: Vec<u8> = Vec::new();
    for note in notes {
        let line = line_of(note);
        if !line_order.contains(&line) {
            line_order.push(line);
        }
    }
    line_order
        .into_iter()
        .map(|line| {
            notes
                .iter()
                .filter(|note| line_of(note) == line)
                .copied()
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use placewise_core::GameType;

    use super::*;

    const GT: GameType = GameType::DEFAULT_9X9;

    #[test]
    fn test_type1_detects_row_confined_value() {
        // Value 5 occurs in box 0 only on row 0.
        let notes = [
            Note::new(0, 0, 5),
            Note::new(0, 1, 5),
            Note::new(1, 0, 6),
        ];
        let locked = type1_eliminations(&notes, GT);
        assert!(
            locked
                .rows
                .contains(&vec![Note::new(0, 0, 5), Note::new(0, 1, 5)])
        );
        // The lone 6 is trivially confined to both its row and its column.
        assert!(locked.rows.contains(&vec![Note::new(1, 0, 6)]));
        assert!(locked.columns.contains(&vec![Note::new(1, 0, 6)]));
    }

    #[test]
    fn test_apply_type1_eliminates_along_the_row() {
        // Box 0 confines value 5 to row 0, so the 5s elsewhere in row 0 go;
        // the 7 at the same position survives.
        let notes = [
            Note::new(0, 0, 5),
            Note::new(0, 1, 5),
            Note::new(0, 4, 5),
            Note::new(0, 4, 7),
            Note::new(2, 4, 5),
        ];
        let filtered = apply_type1(&notes, GT);
        assert!(!filtered.contains(&Note::new(0, 4, 5)));
        assert!(filtered.contains(&Note::new(0, 4, 7)));
        // A 5 outside row 0 is untouched.
        assert!(filtered.contains(&Note::new(2, 4, 5)));
        // The locked group itself survives.
        assert!(filtered.contains(&Note::new(0, 0, 5)));
        assert!(filtered.contains(&Note::new(0, 1, 5)));
    }

    #[test]
    fn test_apply_type1_eliminates_along_the_column() {
        // Box 0 confines value 3 to column 2.
        let notes = [
            Note::new(0, 2, 3),
            Note::new(2, 2, 3),
            Note::new(6, 2, 3),
            Note::new(6, 2, 8),
        ];
        let filtered = apply_type1(&notes, GT);
        assert!(!filtered.contains(&Note::new(6, 2, 3)));
        assert!(filtered.contains(&Note::new(6, 2, 8)));
    }

    #[test]
    fn test_apply_type1_without_locked_groups_is_identity() {
        // Value 4 spans two rows and two columns of box 0, and no other box
        // sees it: nothing is locked, nothing is eliminated. Notes outside
        // box 0 would form singleton groups of their own, which are
        // line-confined and eliminate along their row and column.
        let notes = [
            Note::new(0, 0, 4),
            Note::new(0, 1, 4),
            Note::new(1, 0, 4),
            Note::new(1, 1, 4),
        ];
        assert_eq!(apply_type1(&notes, GT), notes);
    }

    #[test]
    fn test_singleton_groups_eliminate_both_ways() {
        // A value occurring once in a box is confined to both its row and
        // its column, so it eliminates same-value notes along each.
        let notes = [
            Note::new(0, 0, 4),
            Note::new(1, 1, 4),
            Note::new(0, 5, 4),
            Note::new(5, 0, 4),
        ];
        let filtered = apply_type1(&notes, GT);
        // (0, 0) falls to the row-0 singleton in box 1 and the column-0
        // singleton in box 6; (1, 1) shares no line with another 4.
        assert_eq!(
            filtered,
            [Note::new(1, 1, 4), Note::new(0, 5, 4), Note::new(5, 0, 4)]
        );
    }

    #[test]
    fn test_type2_detects_box_confined_line_values() {
        // In row 4, value 9 occurs only within the middle box stack.
        let notes = [
            Note::new(4, 3, 9),
            Note::new(4, 5, 9),
            Note::new(4, 0, 2),
            Note::new(4, 8, 2),
        ];
        let locked = type2_eliminations(&notes, GT);
        assert!(
            locked
                .rows
                .contains(&vec![Note::new(4, 3, 9), Note::new(4, 5, 9)])
        );
        // Value 2 spans two box stacks and is not locked.
        assert!(
            !locked
                .rows
                .iter()
                .any(|group| group[0].value == 2 && group.len() == 2)
        );
    }

    #[test]
    fn test_type2_detects_box_confined_column_values() {
        // In column 7, value 1 occurs only within the top box band.
        let notes = [Note::new(0, 7, 1), Note::new(2, 7, 1)];
        let locked = type2_eliminations(&notes, GT);
        assert!(
            locked
                .columns
                .contains(&vec![Note::new(0, 7, 1), Note::new(2, 7, 1)])
        );
    }
}
