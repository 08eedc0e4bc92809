//! Line-oriented read-solve-print driver for gridlock puzzles.
//!
//! Each input line describes one puzzle as colon-separated `row,col,value`
//! entries with 1-indexed rows and columns (`1,1,5:2,4,7` commits 5 at the
//! top-left cell and 7 at row 2, column 4). For every line the driver
//! prints the starting board, the board after elimination, and a validation
//! verdict; a failing line is reported and the driver moves on to the next
//! one.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use gridlock_core::{Grid, RangeError};
use gridlock_solver::SolverError;
use log::{debug, error};

use crate::render::GridDisplay;

mod parse;
mod render;

/// Solves 9x9 number-place puzzles by candidate elimination.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File with one puzzle per line; reads standard input when omitted.
    input: Option<PathBuf>,
}

/// Everything that can go wrong while handling one puzzle line.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum PuzzleError {
    #[display("{_0}")]
    Parse(#[from] parse::ParseError),
    #[display("{_0}")]
    Range(#[from] RangeError),
    #[display("{_0}")]
    Solver(#[from] SolverError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    match &args.input {
        Some(path) => solve_lines(BufReader::new(File::open(path)?)),
        None => solve_lines(io::stdin().lock()),
    }
}

fn solve_lines<R: BufRead>(reader: R) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = solve_line(&line) {
            error!("cannot solve board: {err}");
        }
    }
    Ok(())
}

fn solve_line(line: &str) -> Result<(), PuzzleError> {
    let assignments = parse::parse_assignments(line)?;
    debug!("parsed {} assignments", assignments.len());
    let board = Grid::from_assignments(assignments)?;

    println!("Solving board:");
    println!("{}", GridDisplay::new(&board));

    let solved = gridlock_solver::solve(&board)?;
    println!("Solved board:");
    println!("{}", GridDisplay::new(&solved));

    match gridlock_solver::validate(&solved) {
        Ok(()) => println!("Solved board validation: Valid"),
        Err(SolverError::InvalidBoard(violation)) => {
            println!("Solved board validation: Not valid: {violation}");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
