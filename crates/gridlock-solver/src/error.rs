use gridlock_core::RangeError;

/// The kind of cell group in which a duplicate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GroupKind {
    /// Nine cells sharing a row.
    #[display("row")]
    Row,
    /// Nine cells sharing a column.
    #[display("column")]
    Column,
    /// Nine cells sharing a 3×3 block.
    #[display("block")]
    Block,
}

/// A duplicate committed value, reported against the cell where the repeat
/// was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("duplicate value {value} in {kind} at cell ({row}, {col})")]
pub struct Violation {
    /// Row of the repeated occurrence.
    pub row: u8,
    /// Column of the repeated occurrence.
    pub col: u8,
    /// The group in which the value repeats.
    pub kind: GroupKind,
    /// The repeated value.
    pub value: u8,
}

/// Errors raised by [`validate`](crate::validate) and [`solve`](crate::solve).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The board failed duplicate validation.
    #[display("supplied board is invalid: {_0}")]
    InvalidBoard(Violation),
    /// A grid access left the legal coordinate or value domain.
    #[display("{_0}")]
    Range(RangeError),
}
