//! Uniform interface the runner uses to drive any day's puzzle

use crate::error::SolverError;
use crate::instance::{RunResult, SolveResult};
use crate::solver::Answer;

/// The capability set every registered day provides
///
/// Implemented by a closed set of variants (one per day) that forward to the
/// static [`Solver`](crate::Solver) of their day through
/// [`run_solver`](crate::run_solver) and [`solve_with`](crate::solve_with).
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, ParseError, PartSolver, RunResult, Solution,
///     SolveError, SolveResult, SolverError, AocSolver, run_solver, solve_with};
///
/// #[derive(AocSolver)]
/// #[aoc(day = 1, name = "Lines", parts = 1)]
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Lines {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
///         Ok(shared.lines().count() as Answer)
///     }
/// }
///
/// enum Day {
///     Lines,
/// }
///
/// impl Solution for Day {
///     fn day(&self) -> u8 { 1 }
///     fn name(&self) -> &'static str { "Lines" }
///     fn parts(&self) -> u8 { 1 }
///     fn solve(&self, input: &str, part: u8) -> Result<SolveResult, SolverError> {
///         match self {
///             Day::Lines => solve_with::<Lines>(input, part),
///         }
///     }
///     fn run(&self, input: &str) -> Result<RunResult, SolverError> {
///         match self {
///             Day::Lines => run_solver::<Lines>(input),
///         }
///     }
/// }
///
/// assert_eq!(Day::Lines.part_one("a\nb\nc").unwrap(), 3);
/// assert_eq!(Day::Lines.part_two("a").unwrap(), None);
/// ```
pub trait Solution {
    /// Day of December (1-25)
    fn day(&self) -> u8;

    /// Human-readable puzzle title
    fn name(&self) -> &'static str;

    /// Number of parts (1 or 2)
    fn parts(&self) -> u8;

    /// Parse `input` and solve one part
    fn solve(&self, input: &str, part: u8) -> Result<SolveResult, SolverError>;

    /// Parse `input` once and solve every part in ascending order
    fn run(&self, input: &str) -> Result<RunResult, SolverError>;

    /// Answer to part one
    fn part_one(&self, input: &str) -> Result<Answer, SolverError> {
        self.solve(input, 1).map(|r| r.answer)
    }

    /// Answer to part two, or `None` for a one-part day
    fn part_two(&self, input: &str) -> Result<Option<Answer>, SolverError> {
        if self.parts() < 2 {
            return Ok(None);
        }
        self.solve(input, 2).map(|r| Some(r.answer))
    }
}
