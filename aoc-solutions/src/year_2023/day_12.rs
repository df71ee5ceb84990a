use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 12, name = "Hot Springs")]
pub struct Solver;

#[derive(Debug)]
pub struct Record<'a> {
    springs: &'a [u8],
    groups: Vec<usize>,
}

impl Record<'_> {
    fn unfolded(&self, copies: usize) -> (Vec<u8>, Vec<usize>) {
        let springs = std::iter::repeat_n(self.springs, copies)
            .collect::<Vec<_>>()
            .join(&b'?');
        (springs, self.groups.repeat(copies))
    }
}

/// Number of ways to fill the `?` springs so damaged runs match `groups`
fn arrangements(springs: &[u8], groups: &[usize]) -> Answer {
    let n = springs.len();
    let m = groups.len();
    // ways[i][j]: arrangements of springs[i..] against groups[j..]
    let mut ways = vec![vec![0 as Answer; m + 1]; n + 2];
    ways[n][m] = 1;
    ways[n + 1][m] = 1;

    for i in (0..n).rev() {
        for j in 0..=m {
            let mut count = 0;
            if springs[i] != b'#' {
                count += ways[i + 1][j];
            }
            if springs[i] != b'.' && j < m {
                let end = i + groups[j];
                let fits = end <= n
                    && !springs[i..end].contains(&b'.')
                    && springs.get(end) != Some(&b'#');
                if fits {
                    count += ways[end + 1][j + 1];
                }
            }
            ways[i][j] = count;
        }
    }
    ways[0][0]
}

fn parse_record(line: &str) -> Result<Record<'_>, anyhow::Error> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<springs> <groups>'"))?;
    if let Some(bad) = springs.bytes().find(|c| !b".#?".contains(c)) {
        return Err(anyhow!("unknown spring {:?}", bad as char));
    }
    let groups = groups
        .trim()
        .split(',')
        .map(|g| g.parse::<usize>().with_context(|| format!("bad group {g:?}")))
        .collect::<Result<_, _>>()?;
    Ok(Record {
        springs: springs.as_bytes(),
        groups,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_record(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|r| arrangements(r.springs, &r.groups))
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|r| {
                let (springs, groups) = r.unfolded(5);
                arrangements(&springs, &groups)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(21));
        assert_eq!(result.answer(2), Some(525152));
    }

    #[test]
    fn single_records() {
        assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
        assert_eq!(arrangements(b"#", &[1]), 1);
        assert_eq!(arrangements(b"#", &[2]), 0);
        assert_eq!(arrangements(b"???", &[]), 1);
        assert_eq!(arrangements(b"", &[]), 1);
    }
}
