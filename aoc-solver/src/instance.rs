//! Solver instance implementation

use crate::error::{ParseError, SolveError, SolverError};
use crate::solver::{Answer, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// The part number (1 or 2)
    pub part: u8,
    /// The answer
    pub answer: Answer,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Result of running every part of one day against one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// When parsing started (UTC)
    pub parse_start: DateTime<Utc>,
    /// When parsing completed (UTC)
    pub parse_end: DateTime<Utc>,
    /// One entry per part, in ascending part order
    pub parts: Vec<SolveResult>,
}

impl RunResult {
    /// Parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    /// Answer for `part`, if it was solved
    pub fn answer(&self, part: u8) -> Option<Answer> {
        self.parts.iter().find(|r| r.part == part).map(|r| r.answer)
    }
}

/// A solver instance for one input with its parsed shared data
///
/// Manages the state for solving one day's puzzle, including:
/// - The shared data (parsed input and intermediate results)
/// - Parse timing information (start and end timestamps)
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Solve the specified part with timing
    pub fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    /// Solve every part in ascending order
    pub fn solve_all(&mut self) -> Result<Vec<SolveResult>, SolveError> {
        (1..=S::PARTS).map(|part| self.solve(part)).collect()
    }

    pub fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    pub fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    /// Convenience: get parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    pub fn day(&self) -> u8 {
        S::DAY
    }

    pub fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Parse `input` once and solve every part of `S` in order
pub fn run_solver<S: Solver>(input: &str) -> Result<RunResult, SolverError> {
    let mut instance = SolverInstance::<S>::new(input)?;
    let parts = instance.solve_all()?;
    Ok(RunResult {
        parse_start: instance.parse_start(),
        parse_end: instance.parse_end(),
        parts,
    })
}

/// Parse `input` and solve a single part of `S`
pub fn solve_with<S: Solver>(input: &str, part: u8) -> Result<SolveResult, SolverError> {
    let mut instance = SolverInstance::<S>::new(input)?;
    Ok(instance.solve(part)?)
}
