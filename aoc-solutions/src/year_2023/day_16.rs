use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 16, name = "The Floor Will Be Lava")]
pub struct Solver;

/// Directions a beam leaves `tile` in after entering it heading `dir`
fn deflect(tile: u8, dir: Direction) -> (Direction, Option<Direction>) {
    use Direction::*;
    match (tile, dir) {
        (b'/', East) => (North, None),
        (b'/', North) => (East, None),
        (b'/', West) => (South, None),
        (b'/', South) => (West, None),
        (b'\\', East) => (South, None),
        (b'\\', South) => (East, None),
        (b'\\', West) => (North, None),
        (b'\\', North) => (West, None),
        (b'|', East | West) => (North, Some(South)),
        (b'-', North | South) => (East, Some(West)),
        _ => (dir, None),
    }
}

/// Tiles a beam entering at `start` heading `dir` passes through
fn energized(grid: &Grid, start: Pos, dir: Direction) -> usize {
    let mut seen = vec![0u8; grid.len()];
    let mut stack = vec![(start, dir)];

    while let Some((pos, dir)) = stack.pop() {
        let mask = 1 << dir.index();
        let slot = &mut seen[grid.index(pos)];
        if *slot & mask != 0 {
            continue;
        }
        *slot |= mask;

        let (out, split) = deflect(grid.at(pos), dir);
        for next_dir in std::iter::once(out).chain(split) {
            if let Some(next) = grid.step(pos, next_dir) {
                stack.push((next, next_dir));
            }
        }
    }

    seen.iter().filter(|&&s| s != 0).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((pos, c)) = grid.cells().find(|&(_, c)| !b"./\\|-".contains(&c)) {
            return Err(ParseError::InvalidFormat(format!(
                "unknown tile {:?} at {pos:?}",
                c as char
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(energized(shared, (0, 0), Direction::East) as Answer)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let grid: &Grid = shared;
        let (width, height) = (grid.width(), grid.height());
        let edges = (0..height)
            .flat_map(|r| [((r, 0), Direction::East), ((r, width - 1), Direction::West)])
            .chain(
                (0..width)
                    .flat_map(|c| [((0, c), Direction::South), ((height - 1, c), Direction::North)]),
            );

        edges
            .map(|(pos, dir)| energized(grid, pos, dir) as Answer)
            .max()
            .ok_or_else(|| SolveError::failed("empty grid"))
    }
}
