//! The 81-cell grid: geometry and per-cell delegation.

use crate::{Cell, RangeError, Value};

/// A 9×9 grid of [`Cell`]s stored in row-major order.
///
/// The grid owns the geometry — the coordinate-to-index mapping
/// (`index = row·9 + column`) and the 3×3 block layout — and delegates all
/// per-cell state to [`Cell`]. It enforces no cross-cell rules; duplicate
/// detection is the solver's job.
///
/// Rows, columns, and block indices are 0-based.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Grid, RangeError};
///
/// let mut grid = Grid::new();
/// grid.commit(4, 4, 5)?;
///
/// assert_eq!(grid.value_at(4, 4)?.map(u8::from), Some(5));
/// assert_eq!(Grid::block_of(4, 4)?, 4);
/// assert_eq!(Grid::block_origin(4)?, (3, 3));
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell unset and all candidates open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); 81],
        }
    }

    /// Builds a grid from explicit `(row, column) → value` assignments.
    ///
    /// Cells named in `assignments` are committed immediately; every other
    /// cell starts unset with the full candidate set. A coordinate that
    /// appears more than once keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if any row or column is outside `0..=8` or
    /// any value is outside `1..=9`.
    pub fn from_assignments<I>(assignments: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = ((u8, u8), u8)>,
    {
        let mut grid = Self::new();
        for ((row, col), value) in assignments {
            grid.commit(row, col, value)?;
        }
        Ok(grid)
    }

    /// Returns the committed value at `(row, col)`, or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8`.
    pub fn value_at(&self, row: u8, col: u8) -> Result<Option<Value>, RangeError> {
        Ok(self.cells[Self::index(row, col)?].value())
    }

    /// Commits `value` at `(row, col)`, collapsing that cell's candidates.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8` or
    /// `value` is outside `1..=9`.
    pub fn commit(&mut self, row: u8, col: u8, value: u8) -> Result<(), RangeError> {
        self.cells[Self::index(row, col)?].commit(value)
    }

    /// Marks `value` as possible for the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8` or
    /// `value` is outside `1..=9`.
    pub fn add_candidate(&mut self, row: u8, col: u8, value: u8) -> Result<(), RangeError> {
        self.cells[Self::index(row, col)?].set_candidate(value, true)
    }

    /// Marks `value` as impossible for the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8` or
    /// `value` is outside `1..=9`.
    pub fn remove_candidate(&mut self, row: u8, col: u8, value: u8) -> Result<(), RangeError> {
        self.cells[Self::index(row, col)?].set_candidate(value, false)
    }

    /// Returns whether `value` is still possible for the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8` or
    /// `value` is outside `1..=9`.
    pub fn is_candidate(&self, row: u8, col: u8, value: u8) -> Result<bool, RangeError> {
        self.cells[Self::index(row, col)?].is_candidate(value)
    }

    /// Returns the block index in `0..=8` containing `(row, col)`.
    ///
    /// Blocks are numbered left to right, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `row` or `col` is outside `0..=8`.
    pub const fn block_of(row: u8, col: u8) -> Result<u8, RangeError> {
        if !matches!(row, 0..=8) {
            return Err(RangeError::Row { row });
        }
        if !matches!(col, 0..=8) {
            return Err(RangeError::Column { column: col });
        }
        Ok((row / 3) * 3 + col / 3)
    }

    /// Returns the top-left `(row, col)` of `block`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Block`] if `block` is outside `0..=8`.
    pub const fn block_origin(block: u8) -> Result<(u8, u8), RangeError> {
        if !matches!(block, 0..=8) {
            return Err(RangeError::Block { block });
        }
        Ok((3 * (block / 3), 3 * (block % 3)))
    }

    fn index(row: u8, col: u8) -> Result<usize, RangeError> {
        if !matches!(row, 0..=8) {
            return Err(RangeError::Row { row });
        }
        if !matches!(col, 0..=8) {
            return Err(RangeError::Column { column: col });
        }
        Ok(usize::from(row) * 9 + usize::from(col))
    }
}
