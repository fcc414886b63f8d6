//! Canonical numeric encodings used as cache keys and enumeration order.
//!
//! A card encodes to its index `0..52`. A 4-card hand encodes through the
//! combinatorial number system: with the indices sorted ascending as
//! `c0 < c1 < c2 < c3`, the key is `C(c0,1) + C(c1,2) + C(c2,3) + C(c3,4)`.
//! Every 4-subset of the deck maps to a distinct value in `0..HAND_KEYS`.

use crate::{Card, CardError};

/// Cards in a scored hand (excluding the lead)
pub const HAND_SIZE: usize = 4;

/// Number of distinct 4-card hand keys, C(52, 4)
pub const HAND_KEYS: usize = 270_725;

const fn binomials() -> [[u32; HAND_SIZE + 1]; 53] {
    let mut table = [[0u32; HAND_SIZE + 1]; 53];
    let mut n = 0;
    while n < 53 {
        table[n][0] = 1;
        let mut k = 1;
        while k <= HAND_SIZE {
            if n > 0 {
                table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            }
            k += 1;
        }
        n += 1;
    }
    table
}

/// Pascal's triangle rows 0..=52, columns 0..=4
const BINOMIAL: [[u32; HAND_SIZE + 1]; 53] = binomials();

/// Encode a card as its index (0-51)
pub fn encode(card: Card) -> u8 {
    card.to_index()
}

/// Decode a card index, failing outside 0..52
pub fn decode(value: u8) -> Result<Card, CardError> {
    Card::from_index(value).ok_or(CardError::InvalidEncoding(value))
}

/// Encode a 4-card hand, independent of card order.
///
/// Hands holding the same card twice have no distinct key; callers keep hands
/// duplicate-free.
pub fn encode_hand(hand: &[Card; HAND_SIZE]) -> u32 {
    let mut indices = hand.map(|c| c.to_index());
    indices.sort_unstable();
    debug_assert!(
        indices.windows(2).all(|w| w[0] < w[1]),
        "duplicate card in hand {:?}",
        hand
    );
    indices
        .iter()
        .enumerate()
        .map(|(i, &c)| BINOMIAL[c as usize][i + 1])
        .sum()
}

/// Decode a hand key back to its cards, sorted by index
pub fn decode_hand(key: u32) -> Result<[Card; HAND_SIZE], CardError> {
    if key as usize >= HAND_KEYS {
        return Err(CardError::InvalidHandEncoding(key));
    }
    let mut remaining = key;
    let mut indices = [0u8; HAND_SIZE];
    let mut upper = 52usize;
    for slot in (0..HAND_SIZE).rev() {
        // largest c below the previous index with C(c, slot+1) <= remaining
        let mut c = upper - 1;
        while BINOMIAL[c][slot + 1] > remaining {
            c -= 1;
        }
        remaining -= BINOMIAL[c][slot + 1];
        indices[slot] = c as u8;
        upper = c;
    }
    let [a, b, c, d] = indices;
    Ok([decode(a)?, decode(b)?, decode(c)?, decode(d)?])
}

/// Number of ways to choose `k` items from `n`
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}
