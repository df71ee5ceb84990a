use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 15, name = "Lens Library")]
pub struct Solver;

fn hash(step: &str) -> usize {
    step.bytes()
        .fold(0, |acc, b| (acc + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation<'a> {
    Remove(&'a str),
    Insert(&'a str, u8),
}

impl<'a> Operation<'a> {
    fn parse(step: &'a str) -> Result<Self, SolveError> {
        if let Some(label) = step.strip_suffix('-') {
            return Ok(Operation::Remove(label));
        }
        let (label, focal) = step
            .split_once('=')
            .ok_or_else(|| SolveError::failed(format!("bad step {step:?}")))?;
        let focal = focal
            .parse()
            .map_err(|_| SolveError::failed(format!("bad focal length in {step:?}")))?;
        Ok(Operation::Insert(label, focal))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let steps: Vec<&str> = input
            .split(',')
            .map(|s| s.trim_matches(|c: char| c == '\n' || c == '\r'))
            .filter(|s| !s.is_empty())
            .collect();
        if steps.is_empty() {
            return Err(ParseError::MissingData("initialization sequence".to_string()));
        }
        Ok(steps)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|s| hash(s) as Answer).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in shared.iter() {
            match Operation::parse(step)? {
                Operation::Remove(label) => {
                    boxes[hash(label)].retain(|&(l, _)| l != label);
                }
                Operation::Insert(label, focal) => {
                    let lenses = &mut boxes[hash(label)];
                    match lenses.iter_mut().find(|(l, _)| *l == label) {
                        Some(lens) => lens.1 = focal,
                        None => lenses.push((label, focal)),
                    }
                }
            }
        }

        Ok(boxes
            .iter()
            .zip(1..)
            .flat_map(|(lenses, box_no)| {
                lenses
                    .iter()
                    .zip(1..)
                    .map(move |(&(_, focal), slot)| box_no * slot * Answer::from(focal))
            })
            .sum())
    }
}
