use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::{HashMap, VecDeque};

#[derive(AocSolver)]
#[aoc(day = 25, name = "Snowverload", parts = 1)]
pub struct Solver;

/// Wires to cut
const CUT_SIZE: usize = 3;

/// Undirected wiring stored as paired arcs: arc `i ^ 1` runs opposite to arc `i`
pub struct Wiring {
    head: Vec<usize>,
    arcs_from: Vec<Vec<usize>>,
}

impl Wiring {
    fn nodes(&self) -> usize {
        self.arcs_from.len()
    }

    /// BFS over arcs with spare capacity; returns the arc used to enter each node
    fn search(&self, source: usize, capacity: &[i32]) -> Vec<Option<usize>> {
        let mut via = vec![None; self.nodes()];
        let mut seen = vec![false; self.nodes()];
        seen[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(node) = queue.pop_front() {
            for &arc in &self.arcs_from[node] {
                let next = self.head[arc];
                if capacity[arc] > 0 && !seen[next] {
                    seen[next] = true;
                    via[next] = Some(arc);
                    queue.push_back(next);
                }
            }
        }
        via
    }

    /// Size of the source side when exactly `CUT_SIZE` wires separate `source` from `sink`
    fn split(&self, source: usize, sink: usize) -> Option<usize> {
        let mut capacity = vec![1; self.head.len()];
        for _ in 0..CUT_SIZE {
            let via = self.search(source, &capacity);
            via[sink]?;
            let mut node = sink;
            while let Some(arc) = via[node] {
                capacity[arc] -= 1;
                capacity[arc ^ 1] += 1;
                node = self.head[arc ^ 1];
            }
        }

        let via = self.search(source, &capacity);
        if via[sink].is_some() {
            return None;
        }
        let side = 1 + via.iter().filter(|v| v.is_some()).count();
        (side > 1 && side < self.nodes()).then_some(side)
    }
}

fn parse_wiring(input: &str) -> Result<Wiring, anyhow::Error> {
    let mut ids: HashMap<&str, usize> = HashMap::new();

    let mut head = vec![];
    let mut arcs_from: Vec<Vec<usize>> = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (name, others) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("expected '<component>: <components>', got {line:?}"))?;
        let mut node = |name| {
            let next = ids.len();
            let id = *ids.entry(name).or_insert(next);
            if id == arcs_from.len() {
                arcs_from.push(vec![]);
            }
            id
        };
        let from = node(name.trim());
        let targets: Vec<usize> = others.split_whitespace().map(&mut node).collect();
        if targets.is_empty() {
            return Err(anyhow!("component {name:?} connects to nothing"));
        }
        for to in targets {
            arcs_from[from].push(head.len());
            head.push(to);
            arcs_from[to].push(head.len());
            head.push(from);
        }
    }
    Ok(Wiring { head, arcs_from })
}

impl AocParser for Solver {
    type SharedData<'a> = Wiring;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_wiring(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let n = shared.nodes();
        let source = (0..n)
            .max_by_key(|&node| shared.arcs_from[node].len())
            .ok_or_else(|| SolveError::failed("no components"))?;

        (0..n)
            .filter(|&sink| sink != source)
            .find_map(|sink| shared.split(source, sink))
            .map(|side| (side * (n - side)) as Answer)
            .ok_or_else(|| SolveError::failed(format!("no cut of {CUT_SIZE} wires splits the graph")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{run_solver, solve_with};

    const EXAMPLE: &str = "jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(54));
        assert_eq!(result.parts.len(), 1);
    }

    #[test]
    fn there_is_no_second_part() {
        assert!(solve_with::<Solver>(EXAMPLE, 2).is_err());
    }

    #[test]
    fn well_connected_graph_has_no_cut() {
        // Complete graph on five nodes: every split needs at least four wires
        let input = "a: b c d e\nb: c d e\nc: d e\nd: e\n";
        assert!(run_solver::<Solver>(input).is_err());
    }
}
