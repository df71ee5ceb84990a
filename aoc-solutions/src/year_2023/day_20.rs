use crate::utils::math::lcm;
use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::{HashMap, VecDeque};

#[derive(AocSolver)]
#[aoc(day = 20, name = "Pulse Propagation")]
pub struct Solver;

const BROADCASTER: &str = "broadcaster";
const FINAL_MACHINE: &str = "rx";
const BUTTON_PRESSES: usize = 1000;
/// Give up looking for the machine's cycle after this many presses
const MAX_PRESSES: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
    /// Named as a destination but never configured
    Sink,
}

#[derive(Debug)]
struct Module<'a> {
    name: &'a str,
    kind: Kind,
    /// `(module, input slot on that module)`
    outputs: Vec<(usize, usize)>,
    inputs: Vec<usize>,
}

pub struct Network<'a> {
    modules: Vec<Module<'a>>,
    broadcaster: usize,
}

#[derive(Debug, Clone, Copy)]
struct Pulse {
    to: usize,
    slot: usize,
    high: bool,
}

/// Flip-flop states and conjunction memories
struct Machine {
    on: Vec<bool>,
    memory: Vec<Vec<bool>>,
}

impl<'a> Network<'a> {
    fn index(&self, name: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.name == name)
    }

    fn machine(&self) -> Machine {
        Machine {
            on: vec![false; self.modules.len()],
            memory: self
                .modules
                .iter()
                .map(|m| vec![false; m.inputs.len()])
                .collect(),
        }
    }

    /// Push the button once, calling `observe` for every pulse delivered
    fn press(&self, machine: &mut Machine, mut observe: impl FnMut(&Pulse)) {
        let mut queue = VecDeque::from([Pulse {
            to: self.broadcaster,
            slot: 0,
            high: false,
        }]);

        while let Some(pulse) = queue.pop_front() {
            observe(&pulse);
            let module = &self.modules[pulse.to];
            let send = match module.kind {
                Kind::Broadcast => Some(pulse.high),
                Kind::FlipFlop if !pulse.high => {
                    machine.on[pulse.to] = !machine.on[pulse.to];
                    Some(machine.on[pulse.to])
                }
                Kind::Conjunction => {
                    let memory = &mut machine.memory[pulse.to];
                    memory[pulse.slot] = pulse.high;
                    Some(!memory.iter().all(|&high| high))
                }
                Kind::FlipFlop | Kind::Sink => None,
            };

            if let Some(high) = send {
                queue.extend(module.outputs.iter().map(|&(to, slot)| Pulse {
                    to,
                    slot,
                    high,
                }));
            }
        }
    }
}

fn parse_network(input: &str) -> Result<Network<'_>, anyhow::Error> {
    let mut declared = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (source, targets) = line
            .split_once(" -> ")
            .ok_or_else(|| anyhow!("expected '<module> -> <targets>', got {line:?}"))?;
        let (kind, name) = if let Some(name) = source.strip_prefix('%') {
            (Kind::FlipFlop, name)
        } else if let Some(name) = source.strip_prefix('&') {
            (Kind::Conjunction, name)
        } else if source == BROADCASTER {
            (Kind::Broadcast, source)
        } else {
            return Err(anyhow!("unknown module type {source:?}"));
        };
        let targets: Vec<&str> = targets.split(',').map(str::trim).collect();
        declared.push((name, kind, targets));
    }

    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut modules = vec![];
    for &(name, kind, _) in &declared {
        if ids.insert(name, modules.len()).is_some() {
            return Err(anyhow!("module {name:?} declared twice"));
        }
        modules.push(Module {
            name,
            kind,
            outputs: vec![],
            inputs: vec![],
        });
    }

    for (name, _, targets) in &declared {
        let from = ids[name];
        for &target in targets {
            let to = *ids.entry(target).or_insert_with(|| {
                modules.push(Module {
                    name: target,
                    kind: Kind::Sink,
                    outputs: vec![],
                    inputs: vec![],
                });
                modules.len() - 1
            });
            let slot = modules[to].inputs.len();
            modules[to].inputs.push(from);
            modules[from].outputs.push((to, slot));
        }
    }

    let broadcaster = *ids
        .get(BROADCASTER)
        .ok_or_else(|| anyhow!("no broadcaster module"))?;
    Ok(Network {
        modules,
        broadcaster,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut machine = shared.machine();
        let (mut low, mut high) = (0, 0);
        for _ in 0..BUTTON_PRESSES {
            shared.press(&mut machine, |pulse| {
                if pulse.high {
                    high += 1;
                } else {
                    low += 1;
                }
            });
        }
        Ok(low * high)
    }
}

impl PartSolver<2> for Solver {
    /// `rx` hangs off one conjunction; it fires low once every input has sent high
    /// in the same press, so the answer is the LCM of each input's first high press
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let rx = shared
            .index(FINAL_MACHINE)
            .ok_or_else(|| SolveError::failed("no 'rx' module"))?;
        let [hub] = shared.modules[rx].inputs[..] else {
            return Err(SolveError::failed("'rx' must have exactly one input"));
        };
        if shared.modules[hub].kind != Kind::Conjunction {
            return Err(SolveError::failed("'rx' is not fed by a conjunction"));
        }

        let feeders = &shared.modules[hub].inputs;
        let mut first_high: Vec<Option<u64>> = vec![None; feeders.len()];
        let mut machine = shared.machine();
        for presses in 1..=MAX_PRESSES {
            shared.press(&mut machine, |pulse| {
                if pulse.high && pulse.to == hub {
                    first_high[pulse.slot].get_or_insert(presses);
                }
            });
            if first_high.iter().all(Option::is_some) {
                return Ok(lcm(first_high.iter().flatten().copied()) as Answer);
            }
        }
        Err(SolveError::failed(format!(
            "no cycle found within {MAX_PRESSES} presses"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_with;

    const EXAMPLE_1: &str = "broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

    const EXAMPLE_2: &str = "broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

    const WITH_RX: &str = "broadcaster -> a, b
%a -> x
%b -> c
%c -> y
&x -> hub
&y -> hub
&hub -> rx
";

    #[test]
    fn example() {
        assert_eq!(solve_with::<Solver>(EXAMPLE_1, 1).unwrap().answer, 32000000);
        assert_eq!(solve_with::<Solver>(EXAMPLE_2, 1).unwrap().answer, 11687500);
    }

    #[test]
    fn rx_cycle() {
        assert_eq!(solve_with::<Solver>(WITH_RX, 2).unwrap().answer, 4);
    }

    #[test]
    fn missing_rx_is_an_error() {
        assert!(solve_with::<Solver>(EXAMPLE_1, 2).is_err());
    }

    #[test]
    fn malformed_network() {
        assert!(solve_with::<Solver>("%a -> b\n", 1).is_err());
        assert!(solve_with::<Solver>("broadcaster -> a\n%a -> b\n%a -> c\n", 1).is_err());
        assert!(solve_with::<Solver>("?a -> b\n", 1).is_err());
    }
}
