use crate::utils::text::numbers;
use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 6, name = "Wait For It")]
pub struct Solver;

pub struct Races<'a> {
    times: &'a str,
    distances: &'a str,
}

/// Number of whole-millisecond button holds `h` with `h * (time - h) > record`
fn ways_to_win(time: i64, record: i64) -> i64 {
    let discriminant = time * time - 4 * record;
    if discriminant <= 0 {
        return 0;
    }

    // Float estimate of the lower root, then nudge it onto the exact boundary
    let mut hold = ((time as f64 - (discriminant as f64).sqrt()) / 2.0).floor().max(0.0) as i64;
    let half = time / 2;
    while hold <= half && hold * (time - hold) <= record {
        hold += 1;
    }
    if hold > half {
        return 0;
    }
    while hold > 0 && (hold - 1) * (time - hold + 1) > record {
        hold -= 1;
    }

    time - 2 * hold + 1
}

fn parse_line<'a>(line: Option<&'a str>, label: &str) -> Result<&'a str, anyhow::Error> {
    line.and_then(|l| l.trim().strip_prefix(label))
        .ok_or_else(|| anyhow!("missing '{label}' line"))
}

fn joined_number(s: &str) -> Result<i64, SolveError> {
    s.split_whitespace()
        .collect::<String>()
        .parse()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines();
        let times = parse_line(lines.next(), "Time:");
        let distances = parse_line(lines.next(), "Distance:");
        match (times, distances) {
            (Ok(times), Ok(distances)) => Ok(Races { times, distances }),
            (Err(e), _) | (_, Err(e)) => Err(ParseError::InvalidFormat(e.to_string())),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let times = numbers::<i64>(shared.times).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        let records =
            numbers::<i64>(shared.distances).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        if times.len() != records.len() {
            return Err(SolveError::failed("times and distances differ in length"));
        }

        Ok(times
            .iter()
            .zip(&records)
            .map(|(&time, &record)| ways_to_win(time, record))
            .product())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(ways_to_win(
            joined_number(shared.times)?,
            joined_number(shared.distances)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(288));
        assert_eq!(result.answer(2), Some(71503));
    }

    #[test]
    fn matches_brute_force() {
        for time in 0..60 {
            for record in 0..400 {
                let brute = (0..=time).filter(|h| h * (time - h) > record).count() as i64;
                assert_eq!(ways_to_win(time, record), brute, "time {time} record {record}");
            }
        }
    }
}
