//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds `PARTS`)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Shorthand for a [`SolveError::SolveFailed`] carrying a plain message
    pub fn failed(message: impl Into<String>) -> Self {
        Self::SolveFailed(message.into().into())
    }
}

/// Error type for solution lookup and execution
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solution is registered for the given day
    #[error("Solution does not exist yet for day {0}")]
    NotFound(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

impl SolverError {
    /// Whether this is the recoverable "no solution for this day" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Day outside 1..=25
    #[error("Invalid day {0}: must be between 1 and 25")]
    InvalidDay(u8),
    /// Attempted to register a solution for a day that already has one
    #[error("Duplicate solution registration for day {0}")]
    DuplicateSolver(u8),
    /// Registered days must be contiguous from day 1
    #[error("Registry has a gap: day {0} is missing")]
    MissingDay(u8),
    /// A factory built a solution for a different day than its slot
    #[error("Factory registered for day {slot} builds the solution for day {built}")]
    DayMismatch { slot: u8, built: u8 },
}
