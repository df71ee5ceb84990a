use crate::utils::grid::Direction;
use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 18, name = "Lavaduct Lagoon")]
pub struct Solver;

type Step = (Direction, i64);

/// The dig plan read two ways: as written, and decoded from the colour codes
pub struct DigPlan {
    written: Vec<Step>,
    decoded: Vec<Step>,
}

fn parse_direction(s: &str) -> Result<Direction, anyhow::Error> {
    match s {
        "U" => Ok(Direction::North),
        "R" => Ok(Direction::East),
        "D" => Ok(Direction::South),
        "L" => Ok(Direction::West),
        _ => Err(anyhow!("unknown direction {s:?}")),
    }
}

/// `#LLLLLD`: five hex digits of length, then the direction as `0..=3` for R, D, L, U
fn decode_colour(code: &str) -> Result<Step, anyhow::Error> {
    let hex = code
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| anyhow!("bad colour {code:?}"))?;
    let len = i64::from_str_radix(&hex[..5], 16).with_context(|| format!("bad colour {code:?}"))?;
    let dir = match &hex[5..] {
        "0" => Direction::East,
        "1" => Direction::South,
        "2" => Direction::West,
        "3" => Direction::North,
        other => return Err(anyhow!("bad colour direction {other:?}")),
    };
    Ok((dir, len))
}

fn parse_line(line: &str) -> Result<(Step, Step), anyhow::Error> {
    let mut fields = line.split_whitespace();
    let (Some(dir), Some(len), Some(colour), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(anyhow!("expected '<dir> <len> (#<colour>)'"));
    };
    let len = len.parse().with_context(|| format!("bad length {len:?}"))?;
    Ok(((parse_direction(dir)?, len), decode_colour(colour)?))
}

/// Cells dug out by the trench and its interior
fn lagoon_size(steps: &[Step]) -> Answer {
    let (mut row, mut col) = (0i64, 0i64);
    let mut twice_area = 0;
    let mut perimeter = 0;
    for &(dir, len) in steps {
        let (dr, dc) = dir.delta();
        let (next_row, next_col) = (row + dr as i64 * len, col + dc as i64 * len);
        twice_area += row * next_col - next_row * col;
        perimeter += len;
        (row, col) = (next_row, next_col);
    }
    twice_area.abs() / 2 + perimeter / 2 + 1
}

impl AocParser for Solver {
    type SharedData<'a> = DigPlan;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (written, decoded) = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_line(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();
        Ok(DigPlan { written, decoded })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(lagoon_size(&shared.written))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(lagoon_size(&shared.decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(62));
        assert_eq!(result.answer(2), Some(952408144115));
    }

    #[test]
    fn colour_codes() {
        assert_eq!(decode_colour("(#70c710)").unwrap(), (Direction::East, 461937));
        assert!(decode_colour("(#70c714)").is_err());
        assert!(decode_colour("#70c710").is_err());
    }
}
