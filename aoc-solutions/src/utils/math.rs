//! Integer helpers shared by several days

/// Greatest common divisor
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple of every number produced by `nums` (1 when empty)
pub fn lcm<I>(nums: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    nums.into_iter().fold(1, |acc, n| acc / gcd(acc, n) * n)
}
