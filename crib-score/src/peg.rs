//! Pegging: points scored by each card played in sequence.
//!
//! Plays are split into segments. The running total accumulates peg values and
//! a new segment starts at any card that would push the total past 31. Pairs
//! and runs only look at cards of the current segment.

use crib_core::{Card, CardSet};
use std::fmt;

/// Most cards ever pegged in one sequence (4 players, 4 cards each)
pub const MAX_PEGGED: usize = 16;

/// The running total may not pass this value within a segment
pub const PEG_LIMIT: u8 = 31;

const FIFTEEN: u8 = 15;

/// Longest run the rank space allows (A through K)
const MAX_RUN: usize = 13;

/// Pegging error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PegError {
    /// The sequence including the new play exceeds MAX_PEGGED cards
    TooManyCards { len: usize },
    /// The same card appears twice in the sequence
    DuplicateCard(Card),
    /// A run longer than the rank space allows was detected
    RunTooLong(usize),
}

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PegError::TooManyCards { len } => write!(
                f,
                "Too many cards pegged: {} (at most {} per sequence)",
                len, MAX_PEGGED
            ),
            PegError::DuplicateCard(card) => write!(f, "Card {} was already pegged", card),
            PegError::RunTooLong(len) => {
                write!(f, "Run of {} cards exceeds the {} possible ranks", len, MAX_RUN)
            }
        }
    }
}

impl std::error::Error for PegError {}

/// A card played during pegging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeggedCard {
    pub card: Card,
    /// Index of the player who played it
    pub player: usize,
    /// Running total of the segment after this card
    pub peg_total: u8,
}

impl PeggedCard {
    pub fn new(card: Card, player: usize, peg_total: u8) -> Self {
        PeggedCard {
            card,
            player,
            peg_total,
        }
    }
}

impl AsRef<Card> for PeggedCard {
    fn as_ref(&self) -> &Card {
        &self.card
    }
}

/// Peg value of a card: tens and faces 10, ace 1, others their rank
pub fn peg_value(card: Card) -> u8 {
    card.pips()
}

/// Segment boundaries of a play sequence
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segments {
    /// Index of the first card of every segment, starting with 0
    starts: Vec<usize>,
    /// Running total of the last segment
    total: u8,
}

impl Segments {
    fn walk(cards: &[Card]) -> Self {
        let mut starts = vec![0];
        let mut total = 0u8;
        for (i, card) in cards.iter().enumerate() {
            let value = peg_value(*card);
            if total + value > PEG_LIMIT {
                starts.push(i);
                total = value;
            } else {
                total += value;
            }
        }
        Segments { starts, total }
    }

    /// Place `card` after the walked cards, opening a segment if it does not fit
    fn play(&mut self, index: usize, card: Card) {
        let value = peg_value(card);
        if self.total + value > PEG_LIMIT {
            self.starts.push(index);
            self.total = value;
        } else {
            self.total += value;
        }
    }

    fn current(&self) -> usize {
        self.starts.last().copied().unwrap_or(0)
    }
}

/// Running total of the current segment after `history`
pub fn running_total<C: AsRef<Card>>(history: &[C]) -> u8 {
    let cards: Vec<Card> = history.iter().map(|c| *c.as_ref()).collect();
    Segments::walk(&cards).total
}

/// Points scored by playing `next` after `history`
pub fn points_for_card<C: AsRef<Card>>(history: &[C], next: Card) -> Result<u8, PegError> {
    if history.len() >= MAX_PEGGED {
        return Err(PegError::TooManyCards {
            len: history.len() + 1,
        });
    }

    let mut cards: Vec<Card> = history.iter().map(|c| *c.as_ref()).collect();
    if let Some(card) = CardSet::first_duplicate(cards.iter().chain(std::iter::once(&next))) {
        return Err(PegError::DuplicateCard(card));
    }

    let mut segments = Segments::walk(&cards);
    segments.play(cards.len(), next);
    cards.push(next);
    let segment = &cards[segments.current()..];

    let mut points = 0;
    if segments.total == FIFTEEN || segments.total == PEG_LIMIT {
        points += 2;
    }
    points += pair_points(segment);
    points += run_points(segment)?;

    Ok(points)
}

/// 2 for a pair, 6 for three of a kind, 12 for four, counted backward from the last card
fn pair_points(segment: &[Card]) -> u8 {
    let Some((last, earlier)) = segment.split_last() else {
        return 0;
    };
    let matches = earlier
        .iter()
        .rev()
        .take_while(|c| c.rank == last.rank)
        .count() as u8;
    matches * (matches + 1)
}

/// Length of the longest run formed by the trailing cards of the segment
fn run_points(segment: &[Card]) -> Result<u8, PegError> {
    for len in (3..=segment.len()).rev() {
        if is_run(&segment[segment.len() - len..]) {
            if len > MAX_RUN {
                return Err(PegError::RunTooLong(len));
            }
            return Ok(len as u8);
        }
    }
    Ok(0)
}

/// Distinct ranks forming one consecutive sequence, in any order
fn is_run(cards: &[Card]) -> bool {
    let mut seen = 0u16;
    for card in cards {
        let bit = 1u16 << card.rank.value();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    let low = seen.trailing_zeros();
    let high = 15 - seen.leading_zeros();
    (high - low + 1) as usize == cards.len()
}
