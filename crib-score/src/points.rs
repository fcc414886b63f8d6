use crib_core::{Card, Rank, HAND_SIZE};

/// Whose cards are being counted; only the flush rule differs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Hand,
    Crib,
}

/// Points of one count, split by category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub fifteens: u8,
    pub pairs: u8,
    pub runs: u8,
    pub flush: u8,
    pub nobs: u8,
}

impl Breakdown {
    pub fn total(&self) -> u8 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nobs
    }
}

/// Points for a 4-card hand with the lead
pub fn score_hand(lead: Card, hand: &[Card; HAND_SIZE]) -> u8 {
    breakdown(lead, hand, Kind::Hand).total()
}

/// Points for a crib of up to 4 cards with the lead
pub fn score_crib(lead: Card, crib: &[Card]) -> u8 {
    breakdown(lead, crib, Kind::Crib).total()
}

/// Count every category for `cards` plus the lead.
///
/// `cards` holds at most 4 cards, none equal to the lead or to each other.
pub fn breakdown(lead: Card, cards: &[Card], kind: Kind) -> Breakdown {
    debug_assert!(cards.len() <= HAND_SIZE, "too many cards: {}", cards.len());
    debug_assert!(
        !cards.contains(&lead),
        "lead {} also in counted cards",
        lead
    );

    let mut all = [lead; HAND_SIZE + 1];
    all[1..=cards.len()].copy_from_slice(cards);
    let all = &all[..=cards.len()];

    let counts = rank_counts(all);

    Breakdown {
        fifteens: fifteens(all),
        pairs: pairs(&counts),
        runs: runs(&counts),
        flush: flush(lead, cards, kind),
        nobs: nobs(lead, cards),
    }
}

/// Occurrences of each rank, indexed by rank value (index 0 unused)
fn rank_counts(cards: &[Card]) -> [u8; 14] {
    let mut counts = [0u8; 14];
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }
    counts
}

/// 2 points for every subset summing to 15
fn fifteens(cards: &[Card]) -> u8 {
    let subsets = 1u32 << cards.len();
    let hits = (1..subsets)
        .filter(|&mask| {
            let sum: u8 = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c.pips())
                .sum();
            sum == 15
        })
        .count();
    2 * hits as u8
}

/// k*(k-1) for each rank held k times
fn pairs(counts: &[u8; 14]) -> u8 {
    counts.iter().map(|&k| k * k.saturating_sub(1)).sum()
}

/// Length of the longest run times the ways to form it
fn runs(counts: &[u8; 14]) -> u8 {
    let mut best = 0u8;
    let mut length = 0u8;
    let mut ways = 1u8;
    for rank in 1..=14usize {
        let count = counts.get(rank).copied().unwrap_or(0);
        if count > 0 {
            length += 1;
            ways *= count;
            continue;
        }
        if length >= 3 && length * ways > best {
            best = length * ways;
        }
        length = 0;
        ways = 1;
    }
    best
}

/// 4 for a 4-card hand flush (5 with the lead); a crib needs all five
fn flush(lead: Card, cards: &[Card], kind: Kind) -> u8 {
    if cards.len() != HAND_SIZE {
        return 0;
    }
    let suit = cards[0].suit;
    if cards.iter().any(|c| c.suit != suit) {
        return 0;
    }
    match (kind, lead.suit == suit) {
        (_, true) => 5,
        (Kind::Hand, false) => 4,
        (Kind::Crib, false) => 0,
    }
}

/// One for his nob
fn nobs(lead: Card, cards: &[Card]) -> u8 {
    let holds_jack = cards
        .iter()
        .any(|c| c.rank == Rank::Jack && c.suit == lead.suit);
    u8::from(holds_jack)
}
