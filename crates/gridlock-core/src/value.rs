//! Checked cell values in the range 1-9.

use std::fmt::{self, Display};

use crate::RangeError;

/// A cell value in the range 1-9.
///
/// Raw integers are checked once, at construction, and carried as `Value`
/// afterwards, so everything downstream of a successful [`Value::new`] can
/// rely on the range invariant.
///
/// # Examples
///
/// ```
/// use gridlock_core::{RangeError, Value};
///
/// let value = Value::new(5)?;
/// assert_eq!(value.get(), 5);
///
/// assert!(Value::new(0).is_err());
/// assert!(Value::new(10).is_err());
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(u8);

impl Value {
    /// All values from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Checks and wraps a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Value`] if `value` is not in `1..=9`.
    pub const fn new(value: u8) -> Result<Self, RangeError> {
        if matches!(value, 1..=9) {
            Ok(Self(value))
        } else {
            Err(RangeError::Value { value })
        }
    }

    /// Returns the numeric value (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> u8 {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_the_full_range() {
        for raw in 1..=9 {
            let value = Value::new(raw).unwrap();
            assert_eq!(value.get(), raw);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Value::new(0), Err(RangeError::Value { value: 0 }));
        assert_eq!(Value::new(10), Err(RangeError::Value { value: 10 }));
        assert_eq!(Value::new(255), Err(RangeError::Value { value: 255 }));
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Value::ALL.len(), 9);
        for (i, value) in Value::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(value.get()), i + 1);
        }
    }

    #[test]
    fn test_display_and_conversion() {
        let value = Value::new(7).unwrap();
        assert_eq!(value.to_string(), "7");
        assert_eq!(u8::from(value), 7);
    }
}
