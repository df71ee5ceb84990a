use crate::utils::text::numbers;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 9, name = "Mirage Maintenance")]
pub struct Solver;

/// Next value of a sequence whose repeated differences reach all zeros
fn extrapolate(history: &[i64]) -> i64 {
    let mut rows = vec![history.to_vec()];
    while let Some(last) = rows.last() {
        if last.iter().all(|&v| v == 0) {
            break;
        }
        let next = last.windows(2).map(|w| w[1] - w[0]).collect();
        rows.push(next);
    }
    rows.iter().filter_map(|row| row.last()).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                numbers(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum())
    }
}
