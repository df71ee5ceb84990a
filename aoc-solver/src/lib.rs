//! Advent of Code Solver Library
//!
//! A small, type-safe framework for organizing many independent puzzle
//! solutions. Each day parses its input once and produces an integer answer
//! for each of its parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - A derive macro that wires the part impls into a [`Solver`]
//! - A uniform [`Solution`] interface for driving any day from a runner
//! - An immutable [`SolverRegistry`] mapping day numbers to constructors
//! - Timed [`SolverInstance`]s reporting parse and solve durations
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, run_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc(day = 1, name = "Sum and Product")]
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Ok(shared.iter().sum())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Ok(shared.iter().product())
//!     }
//! }
//!
//! let result = run_solver::<Day1>("1\n2\n3\n4").unwrap();
//! assert_eq!(result.answer(1), Some(10));
//! assert_eq!(result.answer(2), Some(24));
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Trait
//!
//! [`Solver`] is the static, per-puzzle interface: how to parse (`SharedData`
//! and `parse()`), and how to solve each part. Parts that share work cache it
//! inside `SharedData`.
//!
//! ## Solution Trait
//!
//! [`Solution`] is what the runner sees. A closed enum with one variant per
//! day implements it by forwarding each variant to [`run_solver`] and
//! [`solve_with`] for that day's solver.
//!
//! ## Registry
//!
//! [`RegistryBuilder`] collects one `fn() -> S` per day and [`build`](RegistryBuilder::build)s
//! an immutable [`SolverRegistry`]. Looking up a day that has no solution yields
//! [`SolverError::NotFound`], which callers handle as an ordinary outcome.

mod error;
mod instance;
mod registry;
mod solution;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{RunResult, SolveResult, SolverInstance, run_solver, solve_with};
pub use registry::{DAYS_PER_YEAR, RegistryBuilder, SolutionFactory, SolverRegistry};
pub use solution::Solution;
pub use solver::{Answer, AocParser, PartSolver, Solver, SolverExt};

// Re-export the derive macro
pub use aoc_solver_macros::AocSolver;
