//! Property-based tests for solver part bounds validation

use aoc_solver::{Answer, AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const DAY: u8 = 1;
    const NAME: &'static str = "Bounds";
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<Answer, SolveError> {
        Ok(Answer::from(part) * 100)
    }
}

fn checked(max_parts: u8, part: u8) -> Result<Answer, SolveError> {
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked_range(&mut (), part),
        _ => TestSolver::<2>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any solver with PARTS = N, part 0 or part > N is rejected with
    /// `PartOutOfRange(part)`; anything else is delegated.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=2, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), Answer::from(part) * 100);
        }
    }

    /// Valid parts give the same answer checked or unchecked
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked_result = TestSolver::<2>::solve_part_checked_range(&mut (), part);
        let direct_result = TestSolver::<2>::solve_part(&mut (), part);

        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let result = TestSolver::<1>::solve_part_checked_range(&mut (), 2);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(2))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 1);
        assert_eq!(result.unwrap(), 100);
    }
}
