use crate::Card;

const DECK_MASK: u64 = (1 << 52) - 1;

/// A set of cards, one bit per card index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// Create an empty set
    pub fn new() -> Self {
        CardSet(0)
    }

    /// The full 52-card deck
    pub fn deck() -> Self {
        CardSet(DECK_MASK)
    }

    /// Insert a card, returning false if it was already present
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = Self::bit(card);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Remove a card, returning true if it was present
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = Self::bit(card);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cards of the deck not in this set
    pub fn complement(&self) -> Self {
        CardSet(!self.0 & DECK_MASK)
    }

    /// First card in the set that is already present while inserting `cards`
    pub fn first_duplicate<'a, I>(cards: I) -> Option<Card>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut seen = CardSet::new();
        cards.into_iter().copied().find(|&card| !seen.insert(card))
    }

    /// Iterate cards in index order
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Card::from_index(index)
        })
    }

    fn bit(card: Card) -> u64 {
        1 << card.to_index()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
