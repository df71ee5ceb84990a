use crate::utils::grid::{Grid, Pos};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc(day = 3, name = "Gear Ratios")]
pub struct Solver;

/// A run of digits on one row of the schematic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number {
    value: Answer,
    row: usize,
    start: usize,
    end: usize,
}

pub struct Schematic {
    grid: Grid,
    numbers: Vec<Number>,
}

impl Schematic {
    /// Positions surrounding `number`, clipped to the grid
    fn border(&self, number: &Number) -> impl Iterator<Item = Pos> + '_ {
        let rows = number.row.saturating_sub(1)..=(number.row + 1).min(self.grid.height() - 1);
        let cols = number.start.saturating_sub(1)..=(number.end + 1).min(self.grid.width() - 1);
        let number = *number;
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .filter(move |&(r, c)| r != number.row || c < number.start || c > number.end)
    }
}

fn is_symbol(c: u8) -> bool {
    c != b'.' && !c.is_ascii_digit()
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let mut numbers = vec![];

        for (row, line) in grid.rows().enumerate() {
            let mut col = 0;
            while col < line.len() {
                if !line[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                let mut value: Answer = 0;
                while col < line.len() && line[col].is_ascii_digit() {
                    value = value * 10 + Answer::from(line[col] - b'0');
                    col += 1;
                }
                numbers.push(Number {
                    value,
                    row,
                    start,
                    end: col - 1,
                });
            }
        }

        Ok(Schematic { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .numbers
            .iter()
            .filter(|n| shared.border(n).any(|pos| is_symbol(shared.grid.at(pos))))
            .map(|n| n.value)
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut gears: HashMap<Pos, Vec<Answer>> = HashMap::new();
        for number in &shared.numbers {
            for pos in shared.border(number) {
                if shared.grid.at(pos) == b'*' {
                    gears.entry(pos).or_default().push(number.value);
                }
            }
        }

        Ok(gears
            .values()
            .filter(|parts| parts.len() == 2)
            .map(|parts| parts[0] * parts[1])
            .sum())
    }
}
