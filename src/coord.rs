//! Coordinate codec between display text ("A5") and zero-based (row, col).
//!
//! Columns are letters A–P, rows are numbers 1–16. Parsing is
//! case-insensitive and trims surrounding whitespace.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::config::{COLS, GRID_SIZE};

/// A zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_coord(self.row, self.col))
    }
}

/// Errors returned when parsing a display coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input was empty or whitespace only.
    Empty,
    /// Input was shorter than a letter plus a digit.
    TooShort,
    /// Input was not a letter run followed by a digit run.
    Malformed,
    /// Column must be a single letter.
    MultiLetterColumn,
    /// Column letter outside A–P.
    UnknownColumn(char),
    /// Row number outside 1–16.
    RowOutOfRange(u32),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "empty coordinate"),
            CoordError::TooShort => {
                write!(f, "coordinate too short, use letter + number (e.g. A1)")
            }
            CoordError::Malformed => {
                write!(f, "malformed coordinate, use letter + number (e.g. A1, B5, P16)")
            }
            CoordError::MultiLetterColumn => {
                write!(f, "column must be a single letter A-{}", last_col())
            }
            CoordError::UnknownColumn(c) => {
                write!(f, "column '{}' does not exist, use A-{}", c, last_col())
            }
            CoordError::RowOutOfRange(n) => {
                write!(f, "row {} out of range, use 1-{}", n, GRID_SIZE)
            }
        }
    }
}

fn last_col() -> char {
    COLS.as_bytes()[GRID_SIZE as usize - 1] as char
}

/// Parse a display coordinate such as `"A5"` or `"p16"` into a [`Coord`].
pub fn parse_coord(text: &str) -> Result<Coord, CoordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoordError::Empty);
    }
    if trimmed.chars().count() < 2 {
        return Err(CoordError::TooShort);
    }

    let split = trimmed
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (letters, digits) = trimmed.split_at(split);
    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::Malformed);
    }
    if letters.chars().count() != 1 {
        return Err(CoordError::MultiLetterColumn);
    }

    let letter = letters
        .chars()
        .next()
        .ok_or(CoordError::Malformed)?
        .to_ascii_uppercase();
    let col = COLS.find(letter).ok_or(CoordError::UnknownColumn(letter))?;

    let row_num: u32 = digits.parse().map_err(|_| CoordError::Malformed)?;
    if row_num < 1 || row_num > GRID_SIZE as u32 {
        return Err(CoordError::RowOutOfRange(row_num));
    }

    Ok(Coord {
        row: (row_num - 1) as u8,
        col: col as u8,
    })
}

/// Format a zero-based (row, col) as display text, e.g. `(4, 0)` → `"A5"`.
///
/// Out-of-range columns render as `'?'` so error messages never panic.
pub fn format_coord(row: u8, col: u8) -> String {
    let letter = COLS.as_bytes().get(col as usize).copied().unwrap_or(b'?') as char;
    format!("{}{}", letter, row as u16 + 1)
}

/// Grid-bounds predicate over signed candidate cells.
pub fn in_bounds(row: i16, col: i16) -> bool {
    row >= 0 && row < GRID_SIZE as i16 && col >= 0 && col < GRID_SIZE as i16
}
