//! ASCII rendering of a grid.

use std::fmt::{self, Display};

use gridlock_core::Grid;

/// Displays a grid as a bordered ASCII board.
///
/// Each cell shows its committed value as `!v!`, with `_` as the
/// placeholder for unset cells; heavier separators frame the 3×3 blocks.
pub struct GridDisplay<'a> {
    grid: &'a Grid,
}

impl<'a> GridDisplay<'a> {
    /// Wraps a grid for display.
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  _________________________________________")?;
        for row in 0..9 {
            if row != 0 && row % 3 == 0 {
                writeln!(f, " |_____________|_____________|_____________|")?;
            }
            writeln!(f, " |  _   _   _  |  _   _   _  |  _   _   _  |")?;
            for col in 0..9 {
                let value = self.grid.value_at(row, col).map_err(|_| fmt::Error)?;
                if col % 3 == 0 {
                    write!(f, " | ")?;
                } else {
                    write!(f, " ")?;
                }
                match value {
                    Some(value) => write!(f, "!{value}!")?,
                    None => write!(f, "!_!")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, " |_____________|_____________|_____________|")?;
        Ok(())
    }
}
