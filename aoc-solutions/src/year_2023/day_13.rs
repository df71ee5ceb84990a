use crate::utils::text::paragraphs;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 13, name = "Point of Incidence")]
pub struct Solver;

/// Rocks as bitmasks, once per row and once per column
#[derive(Debug)]
pub struct Pattern {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

impl Pattern {
    fn parse(block: &[&str]) -> Result<Self, ParseError> {
        let width = block.first().map_or(0, |line| line.len());
        if width == 0 || width > 64 || block.len() > 64 {
            return Err(ParseError::InvalidFormat(format!(
                "pattern must be 1 to 64 cells wide and tall, got {}x{}",
                width,
                block.len()
            )));
        }

        let mut rows = vec![0u64; block.len()];
        let mut cols = vec![0u64; width];
        for (r, line) in block.iter().enumerate() {
            if line.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "ragged pattern row {:?}",
                    line
                )));
            }
            for (c, cell) in line.bytes().enumerate() {
                match cell {
                    b'#' => {
                        rows[r] |= 1 << c;
                        cols[c] |= 1 << r;
                    }
                    b'.' => {}
                    other => {
                        return Err(ParseError::InvalidFormat(format!(
                            "unknown cell {:?}",
                            other as char
                        )));
                    }
                }
            }
        }
        Ok(Pattern { rows, cols })
    }

    fn summary(&self, smudges: u32) -> Option<Answer> {
        mirror(&self.cols, smudges)
            .map(|c| c as Answer)
            .or_else(|| mirror(&self.rows, smudges).map(|r| 100 * r as Answer))
    }
}

/// Lines before the first mirror whose reflection differs in exactly `smudges` cells
fn mirror(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&split| {
        lines[..split]
            .iter()
            .rev()
            .zip(&lines[split..])
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

fn summarize(patterns: &[Pattern], smudges: u32) -> Result<Answer, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            p.summary(smudges)
                .ok_or_else(|| SolveError::failed(format!("pattern {} has no mirror", idx + 1)))
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        paragraphs(input)
            .iter()
            .map(|block| Pattern::parse(block))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        summarize(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        summarize(shared, 1)
    }
}
