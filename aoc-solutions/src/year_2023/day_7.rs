use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc(day = 7, name = "Camel Cards")]
pub struct Solver;

const CARDS: &[u8; 13] = b"23456789TJQKA";
const JOKER_CARDS: &[u8; 13] = b"J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify a hand; with `jokers`, every `J` joins the largest group
    fn of(cards: &[u8; 5], jokers: bool) -> HandType {
        let mut counts = [0u8; 256];
        let mut wild = 0;
        for &card in cards {
            if jokers && card == b'J' {
                wild += 1;
            } else {
                counts[card as usize] += 1;
            }
        }
        let mut groups: Vec<u8> = counts.into_iter().filter(|&c| c > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        match groups.first_mut() {
            Some(largest) => *largest += wild,
            None => groups.push(wild),
        }

        match groups.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug)]
pub struct Hand {
    cards: [u8; 5],
    bid: Answer,
}

impl Hand {
    fn strength(&self, jokers: bool) -> (HandType, [usize; 5]) {
        let order = if jokers { JOKER_CARDS } else { CARDS };
        let ranks = self
            .cards
            .map(|card| order.iter().position(|&c| c == card).unwrap_or(0));
        (HandType::of(&self.cards, jokers), ranks)
    }
}

fn parse_hand(line: &str) -> Result<Hand, anyhow::Error> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand {cards:?} must have five cards"))?;
    if let Some(bad) = cards.iter().find(|c| !CARDS.contains(c)) {
        return Err(anyhow!("unknown card {:?}", *bad as char));
    }
    let bid = bid.trim().parse().with_context(|| format!("bad bid {bid:?}"))?;
    Ok(Hand { cards, bid })
}

fn total_winnings(hands: &[Hand], jokers: bool) -> Answer {
    let mut ranked: Vec<_> = hands.iter().map(|h| (h.strength(jokers), h.bid)).collect();
    ranked.sort_unstable();
    ranked
        .iter()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                parse_hand(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(total_winnings(shared, false))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(total_winnings(shared, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::run_solver;

    const EXAMPLE: &str = "32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn example() {
        let result = run_solver::<Solver>(EXAMPLE).unwrap();
        assert_eq!(result.answer(1), Some(6440));
        assert_eq!(result.answer(2), Some(5905));
    }

    #[test]
    fn jokers_join_the_largest_group() {
        assert_eq!(HandType::of(b"JJJJJ", true), HandType::FiveOfAKind);
        assert_eq!(HandType::of(b"JJJJJ", false), HandType::FiveOfAKind);
        assert_eq!(HandType::of(b"KTJJT", true), HandType::FourOfAKind);
        assert_eq!(HandType::of(b"KTJJT", false), HandType::TwoPair);
        assert_eq!(HandType::of(b"2345J", true), HandType::OnePair);
        assert_eq!(HandType::of(b"2233J", true), HandType::FullHouse);
    }
}
