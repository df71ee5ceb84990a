use aoc_solver::{
    Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, run_solver,
};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver)]
#[aoc(day = 2, name = "Dependent")]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<Answer, SolveError> {
        Ok(*shared
            .sum
            .get_or_insert_with(|| shared.numbers.iter().sum()))
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut SharedData) -> Result<Answer, SolveError> {
        let sum = <Self as PartSolver<1>>::solve(shared)?;
        let count = shared.numbers.len() as i64;
        if count == 0 {
            return Err(SolveError::failed("no numbers to average"));
        }
        Ok(sum / count)
    }
}

#[test]
fn test_part2_reuses_part1_cache() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 1).unwrap(), 60);
    assert_eq!(shared.sum, Some(60));
    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), 20);
}

#[test]
fn test_part2_alone_computes_sum() {
    let mut shared = TestDependentSolver::parse("4\n8").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), 6);
    assert_eq!(shared.sum, Some(12));
}

#[test]
fn test_run_solver_through_derive() {
    let result = run_solver::<TestDependentSolver>("1\n2\n3").unwrap();
    assert_eq!(result.answer(1), Some(6));
    assert_eq!(result.answer(2), Some(2));
}

#[test]
fn test_solve_failed_surfaces() {
    let mut shared = TestDependentSolver::parse("").unwrap();
    let err = TestDependentSolver::solve_part(&mut shared, 2).unwrap_err();
    assert_eq!(err.to_string(), "Solve failed: no numbers to average");
}
