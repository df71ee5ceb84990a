use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::{HashSet, VecDeque};

#[derive(AocSolver)]
#[aoc(day = 21, name = "Step Counter")]
pub struct Solver;

const PART_ONE_STEPS: usize = 64;
const PART_TWO_STEPS: i64 = 26_501_365;

pub struct Garden {
    grid: Grid,
    start: Pos,
}

impl Garden {
    /// Plots reachable in exactly `steps` steps without leaving the map
    fn reachable(&self, steps: usize) -> usize {
        let grid = &self.grid;
        let mut dist = vec![usize::MAX; grid.len()];
        let mut queue = VecDeque::from([(self.start, 0)]);
        dist[grid.index(self.start)] = 0;

        while let Some((pos, d)) = queue.pop_front() {
            if d == steps {
                continue;
            }
            for dir in Direction::ALL {
                let Some(next) = grid.step(pos, dir) else {
                    continue;
                };
                let slot = &mut dist[grid.index(next)];
                if grid.at(next) != b'#' && *slot == usize::MAX {
                    *slot = d + 1;
                    queue.push_back((next, d + 1));
                }
            }
        }

        dist.iter()
            .filter(|&&d| d <= steps && d % 2 == steps % 2)
            .count()
    }

    /// Plots reachable in exactly `steps` steps on the map tiled in every direction
    fn reachable_tiled(&self, steps: i64) -> i64 {
        let (height, width) = (self.grid.height() as i64, self.grid.width() as i64);
        let is_rock = |(r, c): (i64, i64)| {
            self.grid
                .at((r.rem_euclid(height) as usize, c.rem_euclid(width) as usize))
                == b'#'
        };

        let start = (self.start.0 as i64, self.start.1 as i64);
        let mut seen = HashSet::from([start]);
        let mut frontier = vec![start];
        let mut count = i64::from(steps % 2 == 0);
        for d in 1..=steps {
            let mut next_frontier = vec![];
            for &(r, c) in &frontier {
                for dir in Direction::ALL {
                    let (dr, dc) = dir.delta();
                    let next = (r + dr as i64, c + dc as i64);
                    if !is_rock(next) && seen.insert(next) {
                        next_frontier.push(next);
                    }
                }
            }
            if d % 2 == steps % 2 {
                count += next_frontier.len() as i64;
            }
            frontier = next_frontier;
        }
        count
    }
}

/// Value at `n` of the quadratic through `(0, a[0])`, `(1, a[1])` and `(2, a[2])`
fn extrapolate(a: [i64; 3], n: i64) -> i64 {
    let first = a[1] - a[0];
    let second = a[2] - 2 * a[1] + a[0];
    a[0] + n * first + n * (n - 1) / 2 * second
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no 'S' tile".to_string()))?;
        Ok(Garden { grid, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.reachable(PART_ONE_STEPS) as Answer)
    }
}

impl PartSolver<2> for Solver {
    /// The count grows quadratically in whole map widths once the
    /// frontier spreads freely, so sample three widths and extrapolate
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let size = shared.grid.width() as i64;
        if shared.grid.height() as i64 != size {
            return Err(SolveError::failed("garden map must be square"));
        }

        let rem = PART_TWO_STEPS % size;
        let samples = [0, 1, 2].map(|k| shared.reachable_tiled(rem + k * size));
        Ok(extrapolate(samples, PART_TWO_STEPS / size))
    }
}
