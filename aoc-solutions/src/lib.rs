//! Advent of Code 2023 puzzle solutions
//!
//! Every day lives in its own module under [`year_2023`] and derives its
//! [`Solver`](aoc_solver::Solver) impl with `#[derive(AocSolver)]`. The closed
//! [`Solution`] enum forwards to them, and [`registry`] builds the table the
//! runner looks days up in.
//!
//! ```
//! use aoc_solver::Solution as _;
//!
//! let registry = aoc_solutions::registry().unwrap();
//! let trebuchet = registry.lookup(1).unwrap();
//! assert_eq!(trebuchet.name(), "Trebuchet?!");
//! assert_eq!(trebuchet.part_one("1abc2\ntreb7uchet\n").unwrap(), 12 + 77);
//! assert!(registry.lookup(26).unwrap_err().is_not_found());
//! ```

pub mod utils;
pub mod year_2023;

pub use year_2023::{Solution, registry};
