use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc(day = 14, name = "Parabolic Reflector Dish")]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Roll every `O` as far as it goes towards `dir`
fn tilt(grid: &mut Grid, dir: Direction) {
    let (width, height) = (grid.width(), grid.height());
    let (lanes, len) = if dir.is_vertical() {
        (width, height)
    } else {
        (height, width)
    };

    for lane in 0..lanes {
        // k-th cell of the lane, counted from the edge the rocks roll towards
        let cell = |k: usize| -> Pos {
            match dir {
                Direction::North => (k, lane),
                Direction::South => (height - 1 - k, lane),
                Direction::West => (lane, k),
                Direction::East => (lane, width - 1 - k),
            }
        };
        let mut free = 0;
        for k in 0..len {
            match grid.at(cell(k)) {
                b'#' => free = k + 1,
                b'O' => {
                    grid.set(cell(k), b'.');
                    grid.set(cell(free), b'O');
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn spin(grid: &mut Grid) {
    for dir in [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ] {
        tilt(grid, dir);
    }
}

fn north_load(grid: &Grid) -> Answer {
    grid.cells()
        .filter(|&(_, c)| c == b'O')
        .map(|((row, _), _)| (grid.height() - row) as Answer)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((pos, c)) = grid.cells().find(|&(_, c)| !b".#O".contains(&c)) {
            return Err(ParseError::InvalidFormat(format!(
                "unknown cell {:?} at {pos:?}",
                c as char
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut grid = shared.clone();
        tilt(&mut grid, Direction::North);
        Ok(north_load(&grid))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut grid = shared.clone();
        let mut seen: HashMap<Grid, usize> = HashMap::new();
        let mut done = 0;
        while done < SPIN_CYCLES {
            if let Some(&first) = seen.get(&grid) {
                let period = done - first;
                let remaining = (SPIN_CYCLES - done) % period;
                for _ in 0..remaining {
                    spin(&mut grid);
                }
                return Ok(north_load(&grid));
            }
            seen.insert(grid.clone(), done);
            spin(&mut grid);
            done += 1;
        }
        Ok(north_load(&grid))
    }
}
