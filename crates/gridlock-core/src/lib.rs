//! Core data structures for elimination-based grid solving.
//!
//! This crate provides the building blocks shared by the solver and the
//! command-line driver:
//!
//! - [`Value`]: a checked cell value in the range 1-9
//! - [`ValueSet`]: a set of values, stored as a 9-bit mask
//! - [`Cell`]: one grid position's committed value and candidate set
//! - [`Grid`]: 81 cells in row-major order, with 3×3 block geometry and
//!   per-cell accessors
//! - [`RangeError`]: the error raised whenever a coordinate, block index,
//!   or value leaves its legal domain
//!
//! The grid enforces no cross-cell rules; duplicate detection and candidate
//! elimination live in the solver crate.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Grid, RangeError};
//!
//! // Commit 5 at row 0, column 0 and 7 at row 2, column 4.
//! let grid = Grid::from_assignments([((0, 0), 5), ((2, 4), 7)])?;
//!
//! assert_eq!(grid.value_at(0, 0)?.map(u8::from), Some(5));
//! assert_eq!(grid.value_at(0, 1)?, None);
//! # Ok::<(), RangeError>(())
//! ```

pub use self::{cell::Cell, error::RangeError, grid::Grid, value::Value, value_set::ValueSet};

pub mod cell;
pub mod error;
pub mod grid;
pub mod value;
pub mod value_set;
