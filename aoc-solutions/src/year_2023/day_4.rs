use crate::utils::text::numbers;
use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;

#[derive(AocSolver)]
#[aoc(day = 4, name = "Scratchcards")]
pub struct Solver;

/// Number of winning numbers on each card, in card order
pub type Matches = Vec<usize>;

fn parse_card(line: &str) -> Result<usize, anyhow::Error> {
    let (_, numbers_part) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':'"))?;
    let (winning, have) = numbers_part
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|'"))?;
    let winning: HashSet<u32> = numbers(winning)?.into_iter().collect();
    let have: Vec<u32> = numbers(have)?;
    Ok(have.iter().filter(|n| winning.contains(n)).count())
}

impl AocParser for Solver {
    type SharedData<'a> = Matches;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_card(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| Answer::pow(2, m as u32 - 1))
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut copies: Vec<Answer> = vec![1; shared.len()];
        for (card, &matches) in shared.iter().enumerate() {
            let won = copies[card];
            let last = (card + matches).min(shared.len() - 1);
            for next in card + 1..=last {
                copies[next] += won;
            }
        }
        Ok(copies.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn example() {
        assert_eq!(Solver::parse(EXAMPLE).unwrap(), vec![4, 2, 2, 1, 0, 0]);
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(13));
        assert_eq!(result.answer(2), Some(30));
    }
}
