use crate::utils::text::{numbers, paragraphs};
use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 5, name = "If You Give A Seed A Fertilizer")]
pub struct Solver;

/// `[src, src + len)` maps onto `[dst, dst + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rule {
    dst: i64,
    src: i64,
    len: i64,
}

impl Rule {
    fn offset(&self) -> i64 {
        self.dst - self.src
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<Vec<Rule>>,
}

/// Half-open range of ids
type Span = (i64, i64);

fn map_value(value: i64, rules: &[Rule]) -> i64 {
    rules
        .iter()
        .find(|r| (r.src..r.src + r.len).contains(&value))
        .map_or(value, |r| value + r.offset())
}

/// Push every span through one stage, splitting spans that straddle rule edges
fn map_spans(spans: Vec<Span>, rules: &[Rule]) -> Vec<Span> {
    let mut mapped = vec![];
    let mut pending = spans;

    for rule in rules {
        let mut unmatched = vec![];
        for (start, end) in pending {
            let overlap_start = start.max(rule.src);
            let overlap_end = end.min(rule.src + rule.len);
            if overlap_start < overlap_end {
                mapped.push((overlap_start + rule.offset(), overlap_end + rule.offset()));
                if start < overlap_start {
                    unmatched.push((start, overlap_start));
                }
                if overlap_end < end {
                    unmatched.push((overlap_end, end));
                }
            } else {
                unmatched.push((start, end));
            }
        }
        pending = unmatched;
    }

    mapped.extend(pending);
    mapped
}

fn parse_almanac(input: &str) -> Result<Almanac, anyhow::Error> {
    let blocks = paragraphs(input);
    let (first, rest) = blocks
        .split_first()
        .ok_or_else(|| anyhow!("empty almanac"))?;
    let seeds = first
        .first()
        .and_then(|line| line.strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing 'seeds:' line"))?;
    let seeds = numbers::<i64>(seeds).context("bad seed list")?;

    let stages = rest
        .iter()
        .map(|block| {
            block
                .iter()
                .skip(1)
                .map(|line| -> Result<Rule, anyhow::Error> {
                    match numbers::<i64>(line)?.as_slice() {
                        &[dst, src, len] => Ok(Rule { dst, src, len }),
                        _ => Err(anyhow!("expected three numbers, got {line:?}")),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Almanac { seeds, stages })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| {
                shared
                    .stages
                    .iter()
                    .fold(seed, |value, rules| map_value(value, rules))
            })
            .min()
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::failed("seed ranges need an even number of values"));
        }
        let spans: Vec<Span> = shared
            .seeds
            .chunks(2)
            .map(|pair| (pair[0], pair[0] + pair[1]))
            .collect();

        shared
            .stages
            .iter()
            .fold(spans, |spans, rules| map_spans(spans, rules))
            .into_iter()
            .filter(|(start, end)| start < end)
            .map(|(start, _)| start)
            .min()
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(35));
        assert_eq!(result.answer(2), Some(46));
    }

    #[test]
    fn spans_split_on_rule_edges() {
        let rules = [Rule {
            dst: 100,
            src: 10,
            len: 5,
        }];
        let mut spans = map_spans(vec![(8, 20)], &rules);
        spans.sort();
        assert_eq!(spans, vec![(8, 10), (15, 20), (100, 105)]);
    }
}
