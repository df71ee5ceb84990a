use crate::utils::math::lcm;
use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc(day = 8, name = "Haunted Wasteland")]
pub struct Solver;

pub struct Network<'a> {
    turns: &'a [u8],
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps taken from `start` until `done` holds for the current node
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        let mut node = start;
        let mut steps = 0u64;
        for &turn in self.turns.iter().cycle() {
            if done(node) {
                return Ok(steps);
            }
            let &(left, right) = self
                .nodes
                .get(node)
                .ok_or_else(|| SolveError::failed(format!("unknown node {node}")))?;
            node = if turn == b'L' { left } else { right };
            steps += 1;
        }
        Err(SolveError::failed("no turns"))
    }
}

fn parse_node(line: &str) -> Result<(&str, (&str, &str)), anyhow::Error> {
    let (name, targets) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("expected '<node> = (<left>, <right>)'"))?;
    let (left, right) = targets
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .and_then(|t| t.split_once(", "))
        .ok_or_else(|| anyhow!("bad targets {targets:?}"))?;
    Ok((name.trim(), (left, right)))
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let turns = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("turn instructions".to_string()))?
            .as_bytes();
        if let Some(bad) = turns.iter().find(|&&t| t != b'L' && t != b'R') {
            return Err(ParseError::InvalidFormat(format!(
                "unknown turn {:?}",
                *bad as char
            )));
        }

        let nodes = lines
            .map(|line| parse_node(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect::<Result<_, _>>()?;
        Ok(Network { turns, nodes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let steps = shared.steps("AAA", |node| node == "ZZZ")?;
        Ok(steps as Answer)
    }
}

impl PartSolver<2> for Solver {
    /// Every ghost path loops back onto its exit in step with the turn cycle
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let starts: Vec<&str> = shared
            .nodes
            .keys()
            .copied()
            .filter(|n| n.ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(SolveError::failed("no node ends with 'A'"));
        }

        let cycles = starts
            .into_iter()
            .map(|start| shared.steps(start, |node| node.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lcm(cycles) as Answer)
    }
}
