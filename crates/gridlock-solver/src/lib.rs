//! Elimination-based solving for gridlock grids.
//!
//! The solver derives only cells that are *forced*: each pass recomputes
//! every open cell's candidate set from the values already committed in its
//! row, column, and block, then commits every cell left with exactly one
//! candidate, and repeats until a pass commits nothing. There is no search
//! and no backtracking, so a puzzle that needs hypothesis testing comes
//! back partially committed.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Grid;
//! use gridlock_solver::SolverError;
//!
//! let grid = Grid::from_assignments([((0, 0), 5)]).map_err(SolverError::from)?;
//! let solved = gridlock_solver::solve(&grid)?;
//!
//! // A lone given forces nothing else; the grid comes back otherwise open.
//! assert_eq!(solved.value_at(0, 0).map_err(SolverError::from)?.map(u8::from), Some(5));
//! assert!(gridlock_solver::validate(&solved).is_ok());
//! # Ok::<(), SolverError>(())
//! ```

pub use self::{error::*, solver::*};

mod error;
mod solver;
