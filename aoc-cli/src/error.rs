//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Puzzle input could not be loaded
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Parsing or solving failed
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input loader errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Missing or unreadable input file
    #[error("cannot read input for day {day} from {}: {source}", path.display())]
    Read {
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
