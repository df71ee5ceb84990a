use crate::utils::grid::Grid;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 11, name = "Cosmic Expansion")]
pub struct Solver;

pub struct Image {
    /// Galaxy row indices, sorted
    rows: Vec<i64>,
    /// Galaxy column indices, sorted
    cols: Vec<i64>,
}

/// Sum of pairwise distances along one axis after each empty line becomes `factor` lines
fn axis_distance(sorted: &[i64], factor: i64) -> i64 {
    let mut expanded = Vec::with_capacity(sorted.len());
    let mut gaps = 0;
    for (i, &coord) in sorted.iter().enumerate() {
        if i > 0 {
            gaps += (coord - sorted[i - 1] - 1).max(0);
        }
        expanded.push(coord + gaps * (factor - 1));
    }

    // Each coordinate is subtracted by everything after it and added by everything before it
    let mut prefix = 0;
    let mut total = 0;
    for (i, &coord) in expanded.iter().enumerate() {
        total += coord * i as i64 - prefix;
        prefix += coord;
    }
    total
}

impl Image {
    fn total_distance(&self, factor: i64) -> i64 {
        axis_distance(&self.rows, factor) + axis_distance(&self.cols, factor)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let galaxies: Vec<_> = grid
            .cells()
            .filter(|&(_, c)| c == b'#')
            .map(|((r, c), _)| (r as i64, c as i64))
            .collect();

        let rows = galaxies.iter().map(|&(r, _)| r).collect();
        let mut cols: Vec<i64> = galaxies.iter().map(|&(_, c)| c).collect();
        cols.sort_unstable();
        Ok(Image { rows, cols })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.total_distance(2))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.total_distance(1_000_000))
    }
}
