use crate::SuggestError;
use crib_core::{codec::choose, Card, CardSet};

/// Largest legal dealt hand
pub const MAX_DEALT: usize = 6;

/// Every `k`-card subset of `hand`, in lexicographic order of positions
pub fn choose_n_from(k: usize, hand: &[Card]) -> Result<Vec<Vec<Card>>, SuggestError> {
    if hand.len() > MAX_DEALT {
        return Err(SuggestError::HandTooLarge { len: hand.len() });
    }
    if k < 1 || k > hand.len() {
        return Err(SuggestError::InvalidArity { k, len: hand.len() });
    }
    Ok(combinations(hand, k))
}

/// `superset` without the cards in `subset`, keeping the remaining order
pub fn without(superset: &[Card], subset: &[Card]) -> Vec<Card> {
    superset
        .iter()
        .filter(|c| !subset.contains(c))
        .copied()
        .collect()
}

/// Every `desired`-card combination of the deck cards not in `exclude`
pub fn other_options(desired: usize, exclude: &[Card]) -> Vec<Vec<Card>> {
    let excluded: CardSet = exclude.iter().collect();
    let available: Vec<Card> = excluded.complement().iter().collect();
    if desired > available.len() {
        return Vec::new();
    }
    combinations(&available, desired)
}

fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let mut out = Vec::with_capacity(choose(cards.len(), k));
    let mut current = Vec::with_capacity(k);
    extend(cards, k, 0, &mut current, &mut out);
    out
}

fn extend(
    cards: &[Card],
    k: usize,
    start: usize,
    current: &mut Vec<Card>,
    out: &mut Vec<Vec<Card>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    let needed = k - current.len();
    for i in start..=cards.len() - needed {
        current.push(cards[i]);
        extend(cards, k, i + 1, current, out);
        current.pop();
    }
}
