use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::VecDeque;

#[derive(AocSolver)]
#[aoc(day = 22, name = "Sand Slabs")]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Brick {
    low: [usize; 3],
    high: [usize; 3],
}

/// Who rests on whom once every brick has fallen
#[derive(Debug, Default)]
pub struct Stack {
    supports: Vec<Vec<usize>>,
    supported_by: Vec<Vec<usize>>,
}

fn parse_corner(s: &str) -> Result<[usize; 3], anyhow::Error> {
    let coords = s
        .split(',')
        .map(|n| n.trim().parse::<usize>().with_context(|| format!("bad coordinate {n:?}")))
        .collect::<Result<Vec<_>, _>>()?;
    coords
        .try_into()
        .map_err(|_| anyhow!("expected three coordinates in {s:?}"))
}

fn parse_brick(line: &str) -> Result<Brick, anyhow::Error> {
    let (a, b) = line
        .split_once('~')
        .ok_or_else(|| anyhow!("expected '<x,y,z>~<x,y,z>'"))?;
    let (a, b) = (parse_corner(a)?, parse_corner(b)?);
    Ok(Brick {
        low: std::array::from_fn(|i| a[i].min(b[i])),
        high: std::array::from_fn(|i| a[i].max(b[i])),
    })
}

/// Drop the bricks lowest first onto a height map of the ground
fn settle(mut bricks: Vec<Brick>) -> Stack {
    bricks.sort_unstable_by_key(|b| b.low[2]);
    let width = bricks.iter().map(|b| b.high[0] + 1).max().unwrap_or(0);
    let depth = bricks.iter().map(|b| b.high[1] + 1).max().unwrap_or(0);
    // (height of the top surface, brick forming it)
    let mut surface: Vec<(usize, Option<usize>)> = vec![(0, None); width * depth];
    let mut stack = Stack {
        supports: vec![vec![]; bricks.len()],
        supported_by: vec![vec![]; bricks.len()],
    };

    for (id, brick) in bricks.iter().enumerate() {
        let cells: Vec<usize> = (brick.low[0]..=brick.high[0])
            .flat_map(|x| (brick.low[1]..=brick.high[1]).map(move |y| x * depth + y))
            .collect();
        let top = cells.iter().map(|&c| surface[c].0).max().unwrap_or(0);

        let mut below: Vec<usize> = cells
            .iter()
            .filter(|&&c| surface[c].0 == top)
            .filter_map(|&c| surface[c].1)
            .collect();
        below.sort_unstable();
        below.dedup();
        for &other in &below {
            stack.supports[other].push(id);
        }
        stack.supported_by[id] = below;

        let new_top = top + 1 + brick.high[2] - brick.low[2];
        for &c in &cells {
            surface[c] = (new_top, Some(id));
        }
    }
    stack
}

impl Stack {
    /// Bricks that fall when `removed` is disintegrated
    fn chain_reaction(&self, removed: usize) -> usize {
        let mut falling = vec![false; self.supports.len()];
        falling[removed] = true;
        let mut queue = VecDeque::from([removed]);
        let mut count = 0;
        while let Some(brick) = queue.pop_front() {
            for &above in &self.supports[brick] {
                if !falling[above] && self.supported_by[above].iter().all(|&b| falling[b]) {
                    falling[above] = true;
                    count += 1;
                    queue.push_back(above);
                }
            }
        }
        count
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Stack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bricks = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_brick(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(settle(bricks))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let safe = shared
            .supports
            .iter()
            .filter(|above| above.iter().all(|&b| shared.supported_by[b].len() > 1))
            .count();
        Ok(safe as Answer)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok((0..shared.supports.len())
            .map(|brick| shared.chain_reaction(brick) as Answer)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(5));
        assert_eq!(result.answer(2), Some(7));
    }

    #[test]
    fn tower_of_cubes() {
        let stack = Solver::parse("0,0,5~0,0,5\n0,0,1~0,0,1\n0,0,9~0,0,9\n").unwrap();
        assert_eq!(stack.supported_by, vec![vec![], vec![0], vec![1]]);
        assert_eq!(stack.chain_reaction(0), 2);
        assert_eq!(stack.chain_reaction(2), 0);
    }

    #[test]
    fn reversed_corners_are_normalized() {
        let brick = parse_brick("2,0,5~0,0,5").unwrap();
        assert_eq!(brick.low, [0, 0, 5]);
        assert_eq!(brick.high, [2, 0, 5]);
        assert!(parse_brick("0,0~1,1,1").is_err());
    }
}
