use std::fmt;
use std::str::FromStr;

/// Errors raised while decoding or parsing cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Card encoding outside 0..52
    InvalidEncoding(u8),
    /// Hand encoding outside the 4-card key space
    InvalidHandEncoding(u32),
    /// Text that is not a card in rank+suit notation (e.g. "10C", "KH")
    InvalidNotation(String),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardError::InvalidEncoding(value) => {
                write!(f, "Invalid card encoding: {} (expected 0-51)", value)
            }
            CardError::InvalidHandEncoding(value) => {
                write!(f, "Invalid hand encoding: {}", value)
            }
            CardError::InvalidNotation(text) => write!(f, "Invalid card notation: {:?}", text),
        }
    }
}

impl std::error::Error for CardError {}

/// Represents the four suits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// Convert from numeric index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Get the suit as a single character (C, D, H, S)
    pub fn to_char(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Parse a suit letter, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card ranks, Ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// Convert from numeric value (1-13)
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    /// Numeric rank (Ace=1 .. King=13)
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Counting value: rank capped at 10, so face cards count 10
    pub fn pips(&self) -> u8 {
        self.value().min(10)
    }

    /// Rank token used in card notation (A, 2-10, J, Q, K)
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse a rank token, case-insensitive. "T" is accepted for ten.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "A" | "1" => Some(Rank::Ace),
            "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::from_value),
        }
    }
}

/// Represents a single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { suit, rank }
    }

    /// Create a card from an index (0-51)
    /// Index is calculated as: suit * 13 + (rank - 1)
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        let suit = Suit::from_index(index / 13)?;
        let rank = Rank::from_value((index % 13) + 1)?;
        Some(Card::new(rank, suit))
    }

    /// Convert card to index (0-51)
    pub fn to_index(&self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8 - 1)
    }

    /// Counting value used for fifteens and the pegging total
    pub fn pips(&self) -> u8 {
        self.rank.pips()
    }

    /// All 52 cards in index order
    pub fn all() -> impl Iterator<Item = Card> {
        (0..52u8).filter_map(Card::from_index)
    }
}

impl AsRef<Card> for Card {
    fn as_ref(&self) -> &Card {
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse "10C", "KH", "ac", "TD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || CardError::InvalidNotation(s.to_string());

        let suit_char = text.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank_token = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_token(rank_token).ok_or_else(invalid)?;

        Ok(Card::new(rank, suit))
    }
}

/// Parse a list of cards separated by commas and/or whitespace
/// Example: "AH,KS 10D" or "5h 5c 5d js"
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Format cards in notation, space separated
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
