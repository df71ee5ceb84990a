use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 1, name = "Trebuchet?!")]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        calibration_sum(shared, true)
    }
}

/// Digit starting at byte `i`, optionally accepting spelled-out digits.
/// Spelled digits may overlap ("twone" holds both 2 and 1).
fn digit_at(line: &[u8], i: usize, spelled: bool) -> Option<Answer> {
    if line[i].is_ascii_digit() {
        return Some(Answer::from(line[i] - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| line[i..].starts_with(word.as_bytes()))
        .map(|p| p as Answer + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Result<Answer, SolveError> {
    let bytes = line.as_bytes();
    let first = (0..bytes.len()).find_map(|i| digit_at(bytes, i, spelled));
    let last = (0..bytes.len()).rev().find_map(|i| digit_at(bytes, i, spelled));

    match (first, last) {
        (Some(first), Some(last)) => Ok(first * 10 + last),
        _ => Err(SolveError::failed(format!("no digit in line {line:?}"))),
    }
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<Answer, SolveError> {
    lines
        .iter()
        .map(|line| calibration_value(line, spelled))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{SolverError, run_solver, solve_with};

    const EXAMPLE_1: &str = "1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const EXAMPLE_2: &str = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn part_1_example() {
        assert_eq!(solve_with::<Solver>(EXAMPLE_1, 1).unwrap().answer, 142);
    }

    #[test]
    fn part_2_example() {
        assert_eq!(solve_with::<Solver>(EXAMPLE_2, 2).unwrap().answer, 281);
        // Spelled digits never change a line that already only has digits
        assert_eq!(run_solver::<Solver>(EXAMPLE_1).unwrap().answer(2), Some(142));
    }

    #[test]
    fn overlapping_words() {
        assert_eq!(calibration_value("twone", true).unwrap(), 21);
        assert_eq!(calibration_value("eighthree", true).unwrap(), 83);
    }

    #[test]
    fn line_without_digits_fails() {
        let err = solve_with::<Solver>("abc\n", 1).unwrap_err();
        assert!(matches!(err, SolverError::SolveError(SolveError::SolveFailed(_))));
    }
}
