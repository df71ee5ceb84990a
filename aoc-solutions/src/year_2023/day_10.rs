use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 10, name = "Pipe Maze")]
pub struct Solver;

pub struct Maze {
    grid: Grid,
    start: Pos,
    main_loop: Option<Vec<Pos>>,
}

fn openings(pipe: u8) -> &'static [Direction] {
    use Direction::*;
    match pipe {
        b'|' => &[North, South],
        b'-' => &[East, West],
        b'L' => &[North, East],
        b'J' => &[North, West],
        b'7' => &[South, West],
        b'F' => &[South, East],
        _ => &[],
    }
}

impl Maze {
    /// Tiles of the loop through `S`, in walking order, starting at `S`
    fn main_loop(&mut self) -> Result<&[Pos], SolveError> {
        if self.main_loop.is_none() {
            self.main_loop = Some(self.walk()?);
        }
        Ok(self.main_loop.as_deref().unwrap_or_default())
    }

    fn walk(&self) -> Result<Vec<Pos>, SolveError> {
        let grid = &self.grid;
        let mut dir = Direction::ALL
            .into_iter()
            .find(|&d| {
                grid.step(self.start, d)
                    .is_some_and(|next| openings(grid.at(next)).contains(&d.opposite()))
            })
            .ok_or_else(|| SolveError::failed("no pipe connects to the start"))?;

        let mut path = vec![self.start];
        let mut pos = self.start;
        loop {
            pos = grid
                .step(pos, dir)
                .ok_or_else(|| SolveError::failed("loop runs off the grid"))?;
            if pos == self.start {
                return Ok(path);
            }
            if path.len() > grid.len() {
                return Err(SolveError::failed("loop never returns to the start"));
            }
            path.push(pos);

            let came_from = dir.opposite();
            let pipe = openings(grid.at(pos));
            if !pipe.contains(&came_from) {
                return Err(SolveError::failed(format!("broken pipe at {pos:?}")));
            }
            dir = pipe
                .iter()
                .copied()
                .find(|&d| d != came_from)
                .ok_or_else(|| SolveError::failed(format!("dead end at {pos:?}")))?;
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no 'S' tile".to_string()))?;
        Ok(Maze {
            grid,
            start,
            main_loop: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.main_loop()?.len() as Answer / 2)
    }
}

impl PartSolver<2> for Solver {
    /// Shoelace area of the loop, then Pick's theorem for the interior points
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let path = shared.main_loop()?;
        let twice_area: i64 = path
            .iter()
            .zip(path.iter().cycle().skip(1))
            .map(|(&(r1, c1), &(r2, c2))| r1 as i64 * c2 as i64 - r2 as i64 * c1 as i64)
            .sum();
        let boundary = path.len() as i64;
        Ok(twice_area.abs() / 2 - boundary / 2 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{run_solver, solve_with};

    const SQUARE: &str = ".....
.S-7.
.|.|.
.L-J.
.....
";

    const WINDING: &str = "..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const ENCLOSED: &str = "...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const SQUEEZED: &str = "..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

    #[test]
    fn example() {
        let square = run_solver::<Solver>(SQUARE).unwrap();
        assert_eq!(square.answer(1), Some(4));
        assert_eq!(square.answer(2), Some(1));
        assert_eq!(solve_with::<Solver>(WINDING, 1).unwrap().answer, 8);
    }

    #[test]
    fn enclosed_tiles() {
        assert_eq!(solve_with::<Solver>(ENCLOSED, 2).unwrap().answer, 4);
        assert_eq!(solve_with::<Solver>(SQUEEZED, 2).unwrap().answer, 4);
    }

    #[test]
    fn start_without_pipes_fails() {
        assert!(solve_with::<Solver>("...\n.S.\n...\n", 1).is_err());
        assert!(solve_with::<Solver>("...\n...\n", 1).is_err());
    }
}
