//! Per-cell committed-value and candidate tracking.

use crate::{RangeError, Value, ValueSet};

/// One grid position: an optional committed value plus the set of values
/// still considered possible for it.
///
/// A cell starts unset with every value possible. Committing a value
/// collapses the candidate set to exactly that value's singleton; the
/// solver's singleton detection depends on this invariant. Candidate edits
/// never touch the committed value.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Cell, RangeError};
///
/// let mut cell = Cell::new();
/// assert_eq!(cell.value(), None);
/// assert!(cell.is_candidate(3)?);
///
/// cell.commit(3)?;
/// assert_eq!(cell.value().map(u8::from), Some(3));
/// assert!(cell.is_candidate(3)?);
/// assert!(!cell.is_candidate(4)?);
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    committed: Option<Value>,
    candidates: ValueSet,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates an unset cell with the full candidate set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            committed: None,
            candidates: ValueSet::FULL,
        }
    }

    /// Commits `value`, collapsing the candidate set to `{value}`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Value`] if `value` is not in `1..=9`.
    pub fn commit(&mut self, value: u8) -> Result<(), RangeError> {
        let value = Value::new(value)?;
        self.committed = Some(value);
        self.candidates = ValueSet::from_elem(value);
        Ok(())
    }

    /// Marks `value` as possible or impossible for this cell.
    ///
    /// The committed value, if any, is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Value`] if `value` is not in `1..=9`.
    pub fn set_candidate(&mut self, value: u8, possible: bool) -> Result<(), RangeError> {
        let value = Value::new(value)?;
        self.candidates.set(value, possible);
        Ok(())
    }

    /// Returns whether `value` is still considered possible.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Value`] if `value` is not in `1..=9`.
    pub fn is_candidate(&self, value: u8) -> Result<bool, RangeError> {
        let value = Value::new(value)?;
        Ok(self.candidates.contains(value))
    }

    /// Returns the committed value, or `None` for an unset cell.
    #[must_use]
    pub const fn value(&self) -> Option<Value> {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_unset_with_full_candidates() {
        let cell = Cell::new();
        assert_eq!(cell.value(), None);
        for raw in 1..=9 {
            assert!(cell.is_candidate(raw).unwrap());
        }
    }

    #[test]
    fn test_commit_collapses_candidates_to_singleton() {
        let mut cell = Cell::new();
        cell.commit(5).unwrap();

        assert_eq!(cell.value().map(u8::from), Some(5));
        for raw in 1..=9 {
            assert_eq!(cell.is_candidate(raw).unwrap(), raw == 5);
        }
    }

    #[test]
    fn test_commit_rejects_out_of_range() {
        let mut cell = Cell::new();
        assert_eq!(cell.commit(0), Err(RangeError::Value { value: 0 }));
        assert_eq!(cell.commit(10), Err(RangeError::Value { value: 10 }));
        // The failed commit left the cell untouched.
        assert_eq!(cell.value(), None);
        assert!(cell.is_candidate(1).unwrap());
    }

    #[test]
    fn test_set_candidate_leaves_committed_value_alone() {
        let mut cell = Cell::new();
        cell.commit(2).unwrap();

        cell.set_candidate(7, true).unwrap();
        assert_eq!(cell.value().map(u8::from), Some(2));
        assert!(cell.is_candidate(7).unwrap());

        cell.set_candidate(7, false).unwrap();
        assert!(!cell.is_candidate(7).unwrap());
    }

    #[test]
    fn test_candidate_operations_reject_out_of_range() {
        let mut cell = Cell::new();
        assert_eq!(
            cell.set_candidate(0, true),
            Err(RangeError::Value { value: 0 })
        );
        assert_eq!(
            cell.set_candidate(10, false),
            Err(RangeError::Value { value: 10 })
        );
        assert_eq!(cell.is_candidate(0), Err(RangeError::Value { value: 0 }));
        assert_eq!(cell.is_candidate(10), Err(RangeError::Value { value: 10 }));
    }
}
