//! Discard suggestions.
//!
//! Every way to split a dealt hand into kept cards and crib cards is scored
//! against every unseen lead (hand side) and every unseen lead plus opponent
//! contribution (crib side). The resulting distributions are summarized as
//! [`TossStats`] and the best split is chosen with a [`Comparator`].

mod advisor;
mod combos;
mod compare;
mod source;
mod stats;

use crib_core::Card;

pub use advisor::{suggest_discard, Advisor, Focus};
pub use combos::{choose_n_from, other_options, without, MAX_DEALT};
pub use compare::{Comparator, Objective, DEFAULT_EPSILON};
pub use source::{Calculator, PointSource};
pub use stats::{TossStats, TossSummary};

/// Cards in a complete crib
pub const CRIB_SIZE: usize = 4;

/// Suggestion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// Subset size outside 1..=hand size
    InvalidArity { k: usize, len: usize },
    /// More cards than any legal deal
    HandTooLarge { len: usize },
    /// `keep` is neither 4 kept cards nor the toss size of a 5 or 6 card deal
    InvalidKeep { keep: usize, len: usize },
    /// A card appears twice among the hand and known cards
    DuplicateCard(Card),
}

impl std::fmt::Display for SuggestError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SuggestError::InvalidArity { k, len } => {
                write!(f, "Cannot choose {} cards from a hand of {}", k, len)
            }
            SuggestError::HandTooLarge { len } => write!(
                f,
                "Hand of {} cards exceeds the largest deal of {}",
                len, MAX_DEALT
            ),
            SuggestError::InvalidKeep { keep, len } => write!(
                f,
                "Cannot split {} cards by a subset of {}: keep 4 or toss the rest",
                len, keep
            ),
            SuggestError::DuplicateCard(card) => write!(f, "Card {} appears twice", card),
        }
    }
}

impl std::error::Error for SuggestError {}
