use gridlock_core::{Grid, Value, ValueSet};

use crate::{GroupKind, SolverError, Violation};

/// Checks the grid for duplicate committed values.
///
/// Rows are scanned first, then columns, then blocks, each in index order
/// `0..=8` and each group in its natural coordinate order; the first repeat
/// found wins. The check is duplicate-only: an empty or partially filled
/// grid validates cleanly.
///
/// # Errors
///
/// Returns [`SolverError::InvalidBoard`] carrying the [`Violation`] for the
/// first repeated value found.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::SolverError;
///
/// let grid = Grid::from_assignments([((0, 1), 5), ((0, 4), 5)]).map_err(SolverError::from)?;
/// let err = gridlock_solver::validate(&grid).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "supplied board is invalid: duplicate value 5 in row at cell (0, 4)"
/// );
/// # Ok::<(), SolverError>(())
/// ```
pub fn validate(grid: &Grid) -> Result<(), SolverError> {
    for row in 0..9 {
        let mut seen = ValueSet::EMPTY;
        for col in 0..9 {
            check_cell(grid, row, col, GroupKind::Row, &mut seen)?;
        }
    }
    for col in 0..9 {
        let mut seen = ValueSet::EMPTY;
        for row in 0..9 {
            check_cell(grid, row, col, GroupKind::Column, &mut seen)?;
        }
    }
    for block in 0..9 {
        let (origin_row, origin_col) = Grid::block_origin(block)?;
        let mut seen = ValueSet::EMPTY;
        for row in origin_row..origin_row + 3 {
            for col in origin_col..origin_col + 3 {
                check_cell(grid, row, col, GroupKind::Block, &mut seen)?;
            }
        }
    }
    Ok(())
}

/// Solves the grid by candidate elimination, to a fixed point.
///
/// The input is validated first and never mutated; solving happens on a
/// private copy, which is returned. Each pass rebuilds every open cell's
/// candidate set from scratch out of the values currently committed in its
/// row, column, and block, then commits every cell left with exactly one
/// candidate. The loop stops when a pass commits nothing, which happens
/// after at most 81 progressing passes.
///
/// Only forced cells (naked singles) are ever committed; puzzles that need
/// guessing come back partially committed, and a cell whose candidate set
/// empties out is simply left unset.
///
/// # Errors
///
/// Returns [`SolverError::InvalidBoard`] if the input already contains a
/// duplicate; such a board is never solved.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::SolverError;
///
/// let grid = Grid::from_assignments([((4, 4), 5)]).map_err(SolverError::from)?;
/// let solved = gridlock_solver::solve(&grid)?;
/// assert_eq!(solved.value_at(4, 4).map_err(SolverError::from)?.map(u8::from), Some(5));
/// # Ok::<(), SolverError>(())
/// ```
pub fn solve(grid: &Grid) -> Result<Grid, SolverError> {
    let mut board = grid.clone();
    validate(&board)?;
    loop {
        recompute_candidates(&mut board)?;
        if !commit_singletons(&mut board)? {
            break;
        }
    }
    Ok(board)
}

fn check_cell(
    grid: &Grid,
    row: u8,
    col: u8,
    kind: GroupKind,
    seen: &mut ValueSet,
) -> Result<(), SolverError> {
    let Some(value) = grid.value_at(row, col)? else {
        return Ok(());
    };
    if seen.contains(value) {
        return Err(Violation {
            row,
            col,
            kind,
            value: value.get(),
        }
        .into());
    }
    seen.insert(value);
    Ok(())
}

/// Rebuilds every open cell's candidate set from the currently committed
/// values in its row, column, and block.
///
/// The rebuild is stateless per pass: previous candidate state is
/// overwritten, so a value committed elsewhere mid-pass is picked up by the
/// next pass rather than this one. Committed cells keep their singleton.
fn recompute_candidates(board: &mut Grid) -> Result<(), SolverError> {
    let mut rows = [ValueSet::EMPTY; 9];
    let mut cols = [ValueSet::EMPTY; 9];
    let mut blocks = [ValueSet::EMPTY; 9];
    for i in 0..9 {
        rows[usize::from(i)] = values_in_row(board, i)?;
        cols[usize::from(i)] = values_in_column(board, i)?;
        blocks[usize::from(i)] = values_in_block(board, i)?;
    }

    for row in 0..9 {
        for col in 0..9 {
            if board.value_at(row, col)?.is_some() {
                continue;
            }
            let block = Grid::block_of(row, col)?;
            let eliminated =
                rows[usize::from(row)] | cols[usize::from(col)] | blocks[usize::from(block)];
            for value in Value::ALL {
                if eliminated.contains(value) {
                    board.remove_candidate(row, col, value.get())?;
                } else {
                    board.add_candidate(row, col, value.get())?;
                }
            }
        }
    }
    Ok(())
}

/// Commits every open cell with exactly one candidate.
///
/// The candidate scan runs in value order 1..=9 and aborts the cell as soon
/// as a second candidate turns up. Returns whether any cell was committed.
fn commit_singletons(board: &mut Grid) -> Result<bool, SolverError> {
    let mut committed_any = false;
    for row in 0..9 {
        for col in 0..9 {
            if board.value_at(row, col)?.is_some() {
                continue;
            }
            let mut single = None;
            for value in Value::ALL {
                if !board.is_candidate(row, col, value.get())? {
                    continue;
                }
                if single.is_some() {
                    single = None;
                    break;
                }
                single = Some(value);
            }
            if let Some(value) = single {
                board.commit(row, col, value.get())?;
                committed_any = true;
            }
        }
    }
    Ok(committed_any)
}

fn values_in_row(board: &Grid, row: u8) -> Result<ValueSet, SolverError> {
    let mut values = ValueSet::EMPTY;
    for col in 0..9 {
        if let Some(value) = board.value_at(row, col)? {
            values.insert(value);
        }
    }
    Ok(values)
}

fn values_in_column(board: &Grid, col: u8) -> Result<ValueSet, SolverError> {
    let mut values = ValueSet::EMPTY;
    for row in 0..9 {
        if let Some(value) = board.value_at(row, col)? {
            values.insert(value);
        }
    }
    Ok(values)
}

fn values_in_block(board: &Grid, block: u8) -> Result<ValueSet, SolverError> {
    let mut values = ValueSet::EMPTY;
    let (origin_row, origin_col) = Grid::block_origin(block)?;
    for row in origin_row..origin_row + 3 {
        for col in origin_col..origin_col + 3 {
            if let Some(value) = board.value_at(row, col)? {
                values.insert(value);
            }
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a grid from nine strings of digits, `_` marking unset cells.
    fn grid_from_rows(rows: [&str; 9]) -> Grid {
        let mut assignments = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '_' {
                    continue;
                }
                let value = u8::try_from(ch.to_digit(10).unwrap()).unwrap();
                let row = u8::try_from(row).unwrap();
                let col = u8::try_from(col).unwrap();
                assignments.push(((row, col), value));
            }
        }
        Grid::from_assignments(assignments).unwrap()
    }

    const SOLVED_ROWS: [&str; 9] = [
        "534678912",
        "672195348",
        "198342567",
        "859761423",
        "426853791",
        "713924856",
        "961537284",
        "287419635",
        "345286179",
    ];

    #[test]
    fn test_validate_accepts_empty_grid() {
        assert!(validate(&Grid::new()).is_ok());
    }

    #[test]
    fn test_validate_accepts_duplicate_free_values() {
        let grid = grid_from_rows(SOLVED_ROWS);
        assert!(validate(&grid).is_ok());
    }

    #[test]
    fn test_validate_reports_row_duplicate() {
        let grid = Grid::from_assignments([((0, 1), 5), ((0, 4), 5)]).unwrap();
        assert_eq!(
            validate(&grid),
            Err(SolverError::InvalidBoard(Violation {
                row: 0,
                col: 4,
                kind: GroupKind::Row,
                value: 5,
            }))
        );
    }

    #[test]
    fn test_validate_reports_column_duplicate() {
        let grid = Grid::from_assignments([((1, 2), 7), ((6, 2), 7)]).unwrap();
        assert_eq!(
            validate(&grid),
            Err(SolverError::InvalidBoard(Violation {
                row: 6,
                col: 2,
                kind: GroupKind::Column,
                value: 7,
            }))
        );
    }

    #[test]
    fn test_validate_reports_block_duplicate() {
        // Same block, different row and column, so only the block scan trips.
        let grid = Grid::from_assignments([((0, 0), 3), ((1, 1), 3)]).unwrap();
        assert_eq!(
            validate(&grid),
            Err(SolverError::InvalidBoard(Violation {
                row: 1,
                col: 1,
                kind: GroupKind::Block,
                value: 3,
            }))
        );
    }

    #[test]
    fn test_validate_scans_rows_before_columns() {
        let grid =
            Grid::from_assignments([((0, 0), 5), ((0, 8), 5), ((2, 3), 6), ((7, 3), 6)]).unwrap();
        assert_eq!(
            validate(&grid),
            Err(SolverError::InvalidBoard(Violation {
                row: 0,
                col: 8,
                kind: GroupKind::Row,
                value: 5,
            }))
        );
    }

    #[test]
    fn test_solve_rejects_invalid_board_without_mutating_input() {
        let grid = Grid::from_assignments([((3, 0), 2), ((3, 7), 2)]).unwrap();
        let before = grid.clone();

        let err = solve(&grid).unwrap_err();
        assert!(matches!(err, SolverError::InvalidBoard(_)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_solve_empty_grid_is_a_fixed_point() {
        let solved = solve(&Grid::new()).unwrap();
        assert_eq!(solved, Grid::new());
    }

    #[test]
    fn test_solve_lone_given_forces_nothing_else() {
        let grid = Grid::from_assignments([((0, 0), 5)]).unwrap();
        let solved = solve(&grid).unwrap();

        assert_eq!(solved.value_at(0, 0).unwrap().map(u8::from), Some(5));
        for row in 0..9 {
            for col in 0..9 {
                if (row, col) != (0, 0) {
                    assert_eq!(solved.value_at(row, col).unwrap(), None);
                }
            }
        }
        assert!(validate(&solved).is_ok());
    }

    #[test]
    fn test_solve_does_not_mutate_the_caller_grid() {
        let grid = Grid::from_assignments([((0, 0), 5)]).unwrap();
        let before = grid.clone();
        let _solved = solve(&grid).unwrap();
        // The caller's copy still has untouched candidate state.
        assert_eq!(grid, before);
        assert!(grid.is_candidate(0, 1, 5).unwrap());
    }

    #[test]
    fn test_solve_commits_the_last_missing_cell() {
        let mut rows = SOLVED_ROWS;
        rows[4] = "4268_3791";
        let grid = grid_from_rows(rows);

        let solved = solve(&grid).unwrap();
        assert_eq!(solved.value_at(4, 4).unwrap().map(u8::from), Some(5));
        for row in 0..9 {
            for col in 0..9 {
                assert!(solved.value_at(row, col).unwrap().is_some());
            }
        }
        assert!(validate(&solved).is_ok());
    }

    #[test]
    fn test_solve_cascades_across_passes() {
        // Row 0 forces (0, 8) = 9 in the first pass; only once that value is
        // committed does column 8 force (8, 8) = 8 in the next pass.
        let grid = grid_from_rows([
            "12345678_",
            "________1",
            "________2",
            "________3",
            "________4",
            "________5",
            "________6",
            "________7",
            "_________",
        ]);

        let solved = solve(&grid).unwrap();
        assert_eq!(solved.value_at(0, 8).unwrap().map(u8::from), Some(9));
        assert_eq!(solved.value_at(8, 8).unwrap().map(u8::from), Some(8));
        assert_eq!(solved.value_at(8, 0).unwrap(), None);
        assert!(validate(&solved).is_ok());
    }

    #[test]
    fn test_solve_is_idempotent_on_a_fixed_point() {
        let grid = Grid::from_assignments([((0, 0), 5)]).unwrap();
        let solved = solve(&grid).unwrap();
        assert_eq!(solve(&solved).unwrap(), solved);

        let complete = solve(&grid_from_rows(SOLVED_ROWS)).unwrap();
        assert_eq!(solve(&complete).unwrap(), complete);
    }

    #[test]
    fn test_cell_with_no_candidates_is_left_unset_and_validates() {
        // (0, 0) sees 1-6 in its row, 7-8 in its column, and 9 in its block,
        // so its candidate set empties without any group holding a duplicate.
        let grid = Grid::from_assignments([
            ((0, 1), 1),
            ((0, 2), 2),
            ((0, 3), 3),
            ((0, 4), 4),
            ((0, 5), 5),
            ((0, 6), 6),
            ((3, 0), 7),
            ((6, 0), 8),
            ((1, 1), 9),
        ])
        .unwrap();

        let solved = solve(&grid).unwrap();
        assert_eq!(solved.value_at(0, 0).unwrap(), None);
        for value in 1..=9 {
            assert!(!solved.is_candidate(0, 0, value).unwrap());
        }
        assert!(validate(&solved).is_ok());
    }
}
