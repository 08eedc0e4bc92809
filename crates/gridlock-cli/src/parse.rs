//! Parser for the textual puzzle notation.
//!
//! A puzzle line is a colon-separated list of `row,col,value` entries with
//! 1-indexed rows and columns: `1,2,3:2,4,5` commits value 3 at row 1,
//! column 2 and value 5 at row 2, column 4. The parser produces the
//! 0-indexed `(row, col) → value` mapping the grid is constructed from.

use std::collections::BTreeMap;

/// Errors produced by [`parse_assignments`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// An entry did not contain three comma-separated fields.
    #[display("expected `row,col,value` in entry `{entry}`")]
    MissingField {
        /// The malformed entry.
        entry: String,
    },
    /// A field was not a number.
    #[display("invalid number `{field}`")]
    InvalidNumber {
        /// The non-numeric field.
        field: String,
    },
    /// A row outside `1..=9`.
    #[display("row must be between 1 and 9 (inclusive), got {row}")]
    RowOutOfRange {
        /// The rejected row.
        row: i64,
    },
    /// A column outside `1..=9`.
    #[display("column must be between 1 and 9 (inclusive), got {column}")]
    ColumnOutOfRange {
        /// The rejected column.
        column: i64,
    },
    /// A value outside `1..=9`.
    #[display("value must be between 1 and 9 (inclusive), got {value}")]
    ValueOutOfRange {
        /// The rejected value.
        value: i64,
    },
}

/// Parses a puzzle line into 0-indexed `(row, col) → value` assignments.
///
/// A coordinate listed more than once keeps its last value.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformed entry: a missing
/// separator, a non-numeric field, or an out-of-range row, column, or
/// value.
pub fn parse_assignments(line: &str) -> Result<BTreeMap<(u8, u8), u8>, ParseError> {
    let mut assignments = BTreeMap::new();
    for entry in line.split(':') {
        let ((row, col), value) = parse_entry(entry)?;
        assignments.insert((row, col), value);
    }
    Ok(assignments)
}

fn parse_entry(entry: &str) -> Result<((u8, u8), u8), ParseError> {
    let mut fields = entry.splitn(3, ',');
    let (Some(row), Some(col), Some(value)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::MissingField {
            entry: entry.to_owned(),
        });
    };
    let row = parse_field(row)?;
    let col = parse_field(col)?;
    let value = parse_field(value)?;

    if !(1..=9).contains(&row) {
        return Err(ParseError::RowOutOfRange { row });
    }
    if !(1..=9).contains(&col) {
        return Err(ParseError::ColumnOutOfRange { column: col });
    }
    if !(1..=9).contains(&value) {
        return Err(ParseError::ValueOutOfRange { value });
    }

    // 1-indexed on the wire, 0-indexed in the grid.
    Ok(((narrow(row - 1), narrow(col - 1)), narrow(value)))
}

fn parse_field(field: &str) -> Result<i64, ParseError> {
    let field = field.trim();
    field.parse().map_err(|_| ParseError::InvalidNumber {
        field: field.to_owned(),
    })
}

/// Narrows a range-checked field to `u8`.
fn narrow(field: i64) -> u8 {
    debug_assert!((0..=9).contains(&field));
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let field = field as u8;
    field
}
