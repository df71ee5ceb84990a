use crate::utils::text::paragraphs;
use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc(day = 19, name = "Aplenty")]
pub struct Solver;

const START: &str = "in";
const ACCEPT: &str = "A";
const REJECT: &str = "R";

type Part = [i64; 4];
/// Inclusive `(low, high)` bounds per category
type PartRange = [(i64, i64); 4];

#[derive(Debug, Clone, Copy)]
struct Condition {
    category: usize,
    less_than: bool,
    value: i64,
}

impl Condition {
    fn matches(&self, part: &Part) -> bool {
        let rating = part[self.category];
        if self.less_than {
            rating < self.value
        } else {
            rating > self.value
        }
    }

    /// Split `range` into the parts that match and the parts that don't
    fn split(&self, range: PartRange) -> (Option<PartRange>, Option<PartRange>) {
        let (low, high) = range[self.category];
        let (pass, fail) = if self.less_than {
            ((low, high.min(self.value - 1)), (low.max(self.value), high))
        } else {
            ((low.max(self.value + 1), high), (low, high.min(self.value)))
        };
        let with = |bounds: (i64, i64)| {
            (bounds.0 <= bounds.1).then(|| {
                let mut r = range;
                r[self.category] = bounds;
                r
            })
        };
        (with(pass), with(fail))
    }
}

#[derive(Debug)]
struct Rule<'a> {
    condition: Option<Condition>,
    target: &'a str,
}

pub struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
    parts: Vec<Part>,
}

fn category(name: &str) -> Result<usize, anyhow::Error> {
    "xmas"
        .find(name)
        .filter(|_| name.len() == 1)
        .ok_or_else(|| anyhow!("unknown category {name:?}"))
}

fn parse_rule(rule: &str) -> Result<Rule<'_>, anyhow::Error> {
    let Some((test, target)) = rule.split_once(':') else {
        return Ok(Rule {
            condition: None,
            target: rule,
        });
    };
    let op = test
        .find(['<', '>'])
        .ok_or_else(|| anyhow!("rule {rule:?} has no comparison"))?;
    let value = test[op + 1..]
        .parse()
        .with_context(|| format!("bad value in {rule:?}"))?;
    Ok(Rule {
        condition: Some(Condition {
            category: category(&test[..op])?,
            less_than: test[op..].starts_with('<'),
            value,
        }),
        target,
    })
}

fn parse_workflow(line: &str) -> Result<(&str, Vec<Rule<'_>>), anyhow::Error> {
    let (name, rules) = line
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("expected 'name{{rules}}', got {line:?}"))?;
    let rules = rules.split(',').map(parse_rule).collect::<Result<_, _>>()?;
    Ok((name, rules))
}

fn parse_part(line: &str) -> Result<Part, anyhow::Error> {
    let body = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(|| anyhow!("expected '{{x=..,m=..,a=..,s=..}}', got {line:?}"))?;
    let mut part = [0; 4];
    let mut seen = [false; 4];
    for field in body.split(',') {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("bad rating {field:?}"))?;
        let idx = category(name)?;
        part[idx] = value.parse().with_context(|| format!("bad rating {field:?}"))?;
        seen[idx] = true;
    }
    if seen.contains(&false) {
        return Err(anyhow!("part {line:?} is missing a rating"));
    }
    Ok(part)
}

fn parse_system(input: &str) -> Result<System<'_>, anyhow::Error> {
    let blocks = paragraphs(input);
    let [workflows, parts] = blocks.as_slice() else {
        return Err(anyhow!("expected workflows and parts separated by a blank line"));
    };
    let workflows = workflows
        .iter()
        .map(|line| parse_workflow(line))
        .collect::<Result<_, _>>()?;
    let parts = parts
        .iter()
        .map(|line| parse_part(line))
        .collect::<Result<_, _>>()?;
    Ok(System { workflows, parts })
}

impl<'a> System<'a> {
    fn workflow(&self, name: &str) -> Result<&[Rule<'a>], SolveError> {
        self.workflows
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SolveError::failed(format!("unknown workflow {name:?}")))
    }

    fn accepts(&self, part: &Part) -> Result<bool, SolveError> {
        let mut current = START;
        // Each workflow can be visited at most once on an acyclic path
        for _ in 0..=self.workflows.len() {
            match current {
                ACCEPT => return Ok(true),
                REJECT => return Ok(false),
                _ => {}
            }
            current = self
                .workflow(current)?
                .iter()
                .find(|rule| rule.condition.is_none_or(|c| c.matches(part)))
                .map(|rule| rule.target)
                .ok_or_else(|| SolveError::failed(format!("workflow {current:?} has no fallback")))?;
        }
        Err(SolveError::failed("workflows loop forever"))
    }

    fn accepted_combinations(&self, name: &str, range: PartRange, depth: usize) -> Result<i64, SolveError> {
        match name {
            ACCEPT => return Ok(range.iter().map(|(low, high)| high - low + 1).product()),
            REJECT => return Ok(0),
            _ if depth > self.workflows.len() => {
                return Err(SolveError::failed("workflows loop forever"));
            }
            _ => {}
        }

        let mut total = 0;
        let mut remaining = Some(range);
        for rule in self.workflow(name)? {
            let Some(current) = remaining else { break };
            match rule.condition {
                None => {
                    total += self.accepted_combinations(rule.target, current, depth + 1)?;
                    remaining = None;
                }
                Some(condition) => {
                    let (pass, fail) = condition.split(current);
                    if let Some(pass) = pass {
                        total += self.accepted_combinations(rule.target, pass, depth + 1)?;
                    }
                    remaining = fail;
                }
            }
        }
        Ok(total)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_system(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut total = 0;
        for part in &shared.parts {
            if shared.accepts(part)? {
                total += part.iter().sum::<i64>();
            }
        }
        Ok(total)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        shared.accepted_combinations(START, [(1, 4000); 4], 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(19114));
        assert_eq!(result.answer(2), Some(167409079868000));
    }

    #[test]
    fn looping_workflows_are_reported() {
        let input = "in{x<10:A,loop}\nloop{in}\n\n{x=20,m=1,a=1,s=1}\n";
        assert!(run_solver::<Solver>(input).is_err());
    }

    #[test]
    fn missing_rating() {
        assert!(run_solver::<Solver>("in{A}\n\n{x=1,m=2}\n").is_err());
    }
}
