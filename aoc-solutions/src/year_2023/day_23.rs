use crate::utils::grid::{Direction, Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc(day = 23, name = "A Long Walk")]
pub struct Solver;

/// Junctions are tracked in a `u64` visited mask
const MAX_JUNCTIONS: usize = 64;

#[derive(Debug, Clone, Copy)]
struct Trail {
    to: usize,
    len: usize,
    /// Every slope along the trail points the way it is walked
    downhill: bool,
}

/// The maze collapsed to junctions joined by single-file trails
pub struct Trails {
    edges: Vec<Vec<Trail>>,
    start: usize,
    end: usize,
}

fn with_the_slope(tile: u8, dir: Direction) -> bool {
    match tile {
        b'^' => dir == Direction::North,
        b'>' => dir == Direction::East,
        b'v' => dir == Direction::South,
        b'<' => dir == Direction::West,
        _ => true,
    }
}

fn open_neighbours(grid: &Grid, pos: Pos) -> impl Iterator<Item = (Pos, Direction)> + '_ {
    Direction::ALL.into_iter().filter_map(move |dir| {
        grid.step(pos, dir)
            .filter(|&next| grid.at(next) != b'#')
            .map(|next| (next, dir))
    })
}

fn compress(grid: &Grid) -> Result<Trails, ParseError> {
    let find_gap = |row: usize| {
        grid.row(row)
            .iter()
            .position(|&c| c == b'.')
            .map(|col| (row, col))
            .ok_or_else(|| ParseError::MissingData(format!("no opening on row {}", row + 1)))
    };
    let start = find_gap(0)?;
    let end = find_gap(grid.height() - 1)?;

    let mut junctions: Vec<Pos> = vec![start, end];
    junctions.extend(
        grid.cells()
            .filter(|&(pos, c)| {
                c != b'#'
                    && pos != start
                    && pos != end
                    && open_neighbours(grid, pos).count() > 2
            })
            .map(|(pos, _)| pos),
    );
    if junctions.len() > MAX_JUNCTIONS {
        return Err(ParseError::InvalidFormat(format!(
            "{} junctions, at most {MAX_JUNCTIONS} supported",
            junctions.len()
        )));
    }
    let ids: HashMap<Pos, usize> = junctions.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    let mut edges = vec![vec![]; junctions.len()];
    for (from, &junction) in junctions.iter().enumerate() {
        for (first, dir) in open_neighbours(grid, junction) {
            let (mut prev, mut pos) = (junction, first);
            let mut len = 1;
            let mut downhill = with_the_slope(grid.at(first), dir);
            let reached = loop {
                if let Some(&to) = ids.get(&pos) {
                    break Some(to);
                }
                let Some((next, dir)) = open_neighbours(grid, pos).find(|&(n, _)| n != prev) else {
                    break None;
                };
                downhill &= with_the_slope(grid.at(next), dir);
                (prev, pos) = (pos, next);
                len += 1;
            };
            if let Some(to) = reached {
                edges[from].push(Trail { to, len, downhill });
            }
        }
    }

    Ok(Trails {
        edges,
        start: 0,
        end: 1,
    })
}

impl Trails {
    fn longest_hike(&self, downhill_only: bool) -> Option<usize> {
        let usable = |t: &&Trail| !downhill_only || t.downhill;
        // Once at the junction next to the exit, going anywhere else cuts the exit off
        let into_end: Vec<usize> = (0..self.edges.len())
            .filter(|&n| self.edges[n].iter().any(|t| t.to == self.end))
            .collect();
        let last_stop = match into_end[..] {
            [only] => Some(only),
            _ => None,
        };
        self.search(self.start, 1 << self.start, last_stop, &usable)
    }

    fn search(
        &self,
        node: usize,
        visited: u64,
        last_stop: Option<usize>,
        usable: &impl Fn(&&Trail) -> bool,
    ) -> Option<usize> {
        if node == self.end {
            return Some(0);
        }
        let trails = self.edges[node].iter().filter(usable);
        if Some(node) == last_stop {
            return trails.filter(|t| t.to == self.end).map(|t| t.len).max();
        }
        trails
            .filter(|t| visited & (1 << t.to) == 0)
            .filter_map(|t| {
                self.search(t.to, visited | (1 << t.to), last_stop, usable)
                    .map(|rest| t.len + rest)
            })
            .max()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Trails;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((pos, c)) = grid.cells().find(|&(_, c)| !b"#.^>v<".contains(&c)) {
            return Err(ParseError::InvalidFormat(format!(
                "unknown tile {:?} at {pos:?}",
                c as char
            )));
        }
        compress(&grid)
    }
}

fn hike(trails: &Trails, downhill_only: bool) -> Result<Answer, SolveError> {
    trails
        .longest_hike(downhill_only)
        .map(|steps| steps as Answer)
        .ok_or_else(|| SolveError::failed("no path reaches the exit"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        hike(shared, true)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        hike(shared, false)
    }
}
