use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 2, name = "Cube Conundrum")]
pub struct Solver;

/// Cubes revealed in one handful
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> Answer {
        Answer::from(self.red) * Answer::from(self.green) * Answer::from(self.blue)
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<Cubes>,
}

impl Game {
    /// Smallest bag that makes every draw of this game possible
    fn minimum_bag(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |acc, &d| acc.max(d))
    }
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn parse_draw(draw: &str) -> Result<Cubes, anyhow::Error> {
    draw.split(',').try_fold(Cubes::default(), |mut cubes, item| {
        let (count, color) = item
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <color>', got {item:?}"))?;
        let count: u32 = count.parse().with_context(|| format!("bad count {count:?}"))?;
        match color {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            _ => return Err(anyhow!("unknown color {color:?}")),
        }
        Ok(cubes)
    })
}

fn parse_game(line: &str) -> Result<Game, anyhow::Error> {
    let (head, draws) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':'"))?;
    let id = head
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("missing 'Game' prefix"))?
        .trim()
        .parse()?;
    let draws = draws.split(';').map(parse_draw).collect::<Result<_, _>>()?;
    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_game(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.draws.iter().all(|d| d.fits_in(BAG)))
            .map(|game| Answer::from(game.id))
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|game| game.minimum_bag().power()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(8));
        assert_eq!(result.answer(2), Some(2286));
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        assert!(Solver::parse("Game 1: 3 purple").is_err());
    }
}
