use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(AocSolver)]
#[aoc(day = 17, name = "Clumsy Crucible")]
pub struct Solver;

/// Heat loss per block, row-major
pub struct City {
    grid: Grid,
}

impl City {
    fn loss(&self, pos: Pos) -> u32 {
        u32::from(self.grid.at(pos) - b'0')
    }

    /// Least heat loss from top-left to bottom-right, turning after `min..=max` straight blocks
    fn least_heat_loss(&self, min: usize, max: usize) -> Option<u32> {
        let grid = &self.grid;
        let target = (grid.height() - 1, grid.width() - 1);
        // State: position plus whether the last move was vertical
        let state = |pos: Pos, vertical: bool| grid.index(pos) * 2 + usize::from(vertical);
        let mut best = vec![u32::MAX; grid.len() * 2];
        let mut queue = BinaryHeap::new();
        for vertical in [false, true] {
            best[state((0, 0), vertical)] = 0;
            queue.push(Reverse((0, (0, 0), vertical)));
        }

        while let Some(Reverse((cost, pos, vertical))) = queue.pop() {
            if pos == target {
                return Some(cost);
            }
            if cost > best[state(pos, vertical)] {
                continue;
            }
            let turns = if vertical {
                [Direction::East, Direction::West]
            } else {
                [Direction::North, Direction::South]
            };
            for dir in turns {
                let mut next = pos;
                let mut next_cost = cost;
                for steps in 1..=max {
                    let Some(moved) = grid.step(next, dir) else {
                        break;
                    };
                    next = moved;
                    next_cost += self.loss(next);
                    if steps < min {
                        continue;
                    }
                    let slot = &mut best[state(next, dir.is_vertical())];
                    if next_cost < *slot {
                        *slot = next_cost;
                        queue.push(Reverse((next_cost, next, dir.is_vertical())));
                    }
                }
            }
        }
        None
    }
}

impl AocParser for Solver {
    type SharedData<'a> = City;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((pos, c)) = grid.cells().find(|&(_, c)| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(format!(
                "heat loss at {pos:?} is {:?}, not a digit",
                c as char
            )));
        }
        Ok(City { grid })
    }
}

fn minimum(city: &City, min: usize, max: usize) -> Result<Answer, SolveError> {
    city.least_heat_loss(min, max)
        .map(Answer::from)
        .ok_or_else(|| SolveError::failed("no path reaches the factory"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        minimum(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        minimum(shared, 4, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{run_solver, solve_with};

    const EXAMPLE: &str = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    const ULTRA: &str = "111111111111
999999999991
999999999991
999999999991
999999999991
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(102));
        assert_eq!(result.answer(2), Some(94));
    }

    #[test]
    fn ultra_crucible_must_run_four_blocks() {
        assert_eq!(solve_with::<Solver>(ULTRA, 2).unwrap().answer, 71);
    }

    #[test]
    fn unreachable_target() {
        assert!(solve_with::<Solver>("12\n", 2).is_err());
    }
}
