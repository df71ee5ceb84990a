use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use std::ops::RangeInclusive;

#[derive(AocSolver)]
#[aoc(day = 24, name = "Never Tell Me The Odds")]
pub struct Solver;

const TEST_AREA: RangeInclusive<i128> = 200_000_000_000_000..=400_000_000_000_000;
/// Rock velocities are searched in `-SEARCH..=SEARCH` on each axis
const SEARCH: i128 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pos: [i128; 3],
    vel: [i128; 3],
}

fn parse_triple(s: &str) -> Result<[i128; 3], anyhow::Error> {
    let values = s
        .split(',')
        .map(|n| n.trim().parse().with_context(|| format!("bad number {n:?}")))
        .collect::<Result<Vec<i128>, _>>()?;
    values
        .try_into()
        .map_err(|_| anyhow!("expected three numbers in {s:?}"))
}

fn parse_hailstone(line: &str) -> Result<Hailstone, anyhow::Error> {
    let (pos, vel) = line
        .split_once('@')
        .ok_or_else(|| anyhow!("expected '<position> @ <velocity>'"))?;
    Ok(Hailstone {
        pos: parse_triple(pos)?,
        vel: parse_triple(vel)?,
    })
}

/// Do the future XY paths of `a` and `b` cross inside `area`?
///
/// Works on exact rationals: the crossing is at `pos + vel * t` with `t = num / den`.
fn paths_cross(a: &Hailstone, b: &Hailstone, area: &RangeInclusive<i128>) -> bool {
    let [ax, ay, _] = a.pos;
    let [avx, avy, _] = a.vel;
    let [bx, by, _] = b.pos;
    let [bvx, bvy, _] = b.vel;

    let den = avx * bvy - avy * bvx;
    if den == 0 {
        return false;
    }
    let (dx, dy) = (bx - ax, by - ay);
    let (mut t_num, mut s_num) = (dx * bvy - dy * bvx, dx * avy - dy * avx);
    let den_abs = den.abs();
    if den < 0 {
        t_num = -t_num;
        s_num = -s_num;
    }
    if t_num < 0 || s_num < 0 {
        return false;
    }

    // area.start() <= ax + avx * t_num / den_abs <= area.end(), scaled by den_abs
    let x = ax * den_abs + avx * t_num;
    let y = ay * den_abs + avy * t_num;
    let inside = |v: i128| area.start() * den_abs <= v && v <= area.end() * den_abs;
    inside(x) && inside(y)
}

fn crossings(stones: &[Hailstone], area: &RangeInclusive<i128>) -> usize {
    stones
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| paths_cross(a, b, area))
        .count()
}

/// Where and when a rock moving at `(vx, vy)` in the XY plane hits both `a` and `b`
///
/// In the rock's frame both hailstones move at `vel - rock`, and the rock sits still
/// where their XY paths meet.
fn rock_origin_xy(a: &Hailstone, b: &Hailstone, vx: i128, vy: i128) -> Option<(i128, i128, i128, i128)> {
    let (avx, avy) = (a.vel[0] - vx, a.vel[1] - vy);
    let (bvx, bvy) = (b.vel[0] - vx, b.vel[1] - vy);
    let den = avx * bvy - avy * bvx;
    if den == 0 {
        return None;
    }
    let (dx, dy) = (b.pos[0] - a.pos[0], b.pos[1] - a.pos[1]);
    let t_num = dx * bvy - dy * bvx;
    let s_num = dx * avy - dy * avx;
    if t_num % den != 0 || s_num % den != 0 {
        return None;
    }
    let (t, s) = (t_num / den, s_num / den);
    if t < 0 || s < 0 {
        return None;
    }
    Some((a.pos[0] + avx * t, a.pos[1] + avy * t, t, s))
}

fn throw_rock(stones: &[Hailstone]) -> Option<[i128; 3]> {
    let [a, b, ..] = stones else {
        return None;
    };

    for vx in -SEARCH..=SEARCH {
        for vy in -SEARCH..=SEARCH {
            let Some((x, y, t, s)) = rock_origin_xy(a, b, vx, vy) else {
                continue;
            };
            if t == s {
                continue;
            }
            // z + vz * t = a.z + a.vz * t, and likewise for b at time s
            let (za, zb) = (a.pos[2] + a.vel[2] * t, b.pos[2] + b.vel[2] * s);
            if (zb - za) % (s - t) != 0 {
                continue;
            }
            let vz = (zb - za) / (s - t);
            let rock = Hailstone {
                pos: [x, y, za - vz * t],
                vel: [vx, vy, vz],
            };
            if stones.iter().all(|stone| collides(&rock, stone)) {
                return Some(rock.pos);
            }
        }
    }
    None
}

/// Is there a time `t >= 0` at which `rock` and `stone` share a position?
fn collides(rock: &Hailstone, stone: &Hailstone) -> bool {
    let mut time = None;
    for axis in 0..3 {
        let dp = stone.pos[axis] - rock.pos[axis];
        let dv = rock.vel[axis] - stone.vel[axis];
        if dv == 0 {
            if dp != 0 {
                return false;
            }
            continue;
        }
        if dp % dv != 0 {
            return false;
        }
        let t = dp / dv;
        if t < 0 || time.is_some_and(|seen| seen != t) {
            return false;
        }
        time = Some(t);
    }
    true
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_hailstone(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(crossings(shared, &TEST_AREA) as Answer)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let [x, y, z] = throw_rock(shared)
            .ok_or_else(|| SolveError::failed("no rock trajectory hits every hailstone"))?;
        Answer::try_from(x + y + z).map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_with;

    const EXAMPLE: &str = "19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    #[test]
    fn example() {
        let stones = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(crossings(&stones, &(7..=27)), 2);
        assert_eq!(solve_with::<Solver>(EXAMPLE, 2).unwrap().answer, 47);
    }

    #[test]
    fn rock_hits_every_stone() {
        let stones = Solver::parse(EXAMPLE).unwrap();
        let rock = Hailstone {
            pos: [24, 13, 10],
            vel: [-3, 1, 2],
        };
        assert!(stones.iter().all(|s| collides(&rock, s)));
    }

    #[test]
    fn parallel_paths_never_cross() {
        let a = parse_hailstone("0, 0, 0 @ 1, 1, 0").unwrap();
        let b = parse_hailstone("0, 5, 0 @ 1, 1, 0").unwrap();
        assert!(!paths_cross(&a, &b, &(0..=100)));
    }
}
