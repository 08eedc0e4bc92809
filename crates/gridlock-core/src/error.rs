//! Domain errors for coordinates, block indices, and cell values.

/// An argument outside its legal domain.
///
/// Rows, columns, and block indices are 0-based and must lie in `0..=8`;
/// cell values must lie in `1..=9`. The error is raised at the point of the
/// offending call and is always caller-correctable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RangeError {
    /// A row index outside `0..=8`.
    #[display("row must be between 0 and 8, got {row}")]
    Row {
        /// The rejected row index.
        row: u8,
    },
    /// A column index outside `0..=8`.
    #[display("column must be between 0 and 8, got {column}")]
    Column {
        /// The rejected column index.
        column: u8,
    },
    /// A block index outside `0..=8`.
    #[display("block must be between 0 and 8, got {block}")]
    Block {
        /// The rejected block index.
        block: u8,
    },
    /// A cell value outside `1..=9`.
    #[display("value must be between 1 and 9, got {value}")]
    Value {
        /// The rejected value.
        value: u8,
    },
}
