//! Textual codec for candidate notes.
//!
//! Notes are persisted as `;`-separated `row,col,value` triples with 0-based
//! coordinates and 1-based values, e.g. `0,2,5;4,4,1;`. The codec round-trips
//! any set of valid triples for the given [`GameType`].

use std::fmt::Write as _;

use crate::{GameType, Note};

/// Error returned when notes text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseNotesError {
    /// A segment is not a `row,col,value` triple.
    #[display("malformed note segment {segment:?}")]
    BadSegment {
        /// The offending segment.
        segment: String,
    },
    /// A coordinate or value is outside the grid.
    #[display("note ({row},{col}) value {value} is outside a grid of size {size}")]
    OutOfRange {
        /// Row of the note.
        row: u8,
        /// Column of the note.
        col: u8,
        /// Candidate value of the note.
        value: u8,
        /// The grid size.
        size: u8,
    },
}

/// Parses notes text into a flat note collection.
///
/// Empty segments (including a trailing one) are ignored, so both
/// `0,2,5;4,4,1` and `0,2,5;4,4,1;` parse to the same notes.
///
/// # Errors
///
/// Returns [`ParseNotesError`] on a malformed segment or a triple outside the
/// grid.
pub fn parse_notes(game_type: GameType, text: &str) -> Result<Vec<Note>, ParseNotesError> {
    let size = game_type.size();
    let mut notes = Vec::new();
    for segment in text.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let bad = || ParseNotesError::BadSegment {
            segment: segment.to_owned(),
        };
        let mut fields = segment.split(',');
        let mut next = || -> Result<u8, ParseNotesError> {
            fields.next().ok_or_else(bad)?.trim().parse().map_err(|_| bad())
        };
        let (row, col, value) = (next()?, next()?, next()?);
        if fields.next().is_some() {
            return Err(bad());
        }
        if row >= size || col >= size || value == 0 || value > size {
            return Err(ParseNotesError::OutOfRange {
                row,
                col,
                value,
                size,
            });
        }
        notes.push(Note::new(row, col, value));
    }
    Ok(notes)
}

/// Formats notes as `row,col,value;` triples.
#[must_use]
pub fn format_notes(notes: &[Note]) -> String {
    let mut text = String::new();
    for note in notes {
        let _ = write!(text, "{},{},{};", note.row, note.col, note.value);
    }
    text
}
