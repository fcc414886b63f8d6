mod card;
pub mod codec;
mod set;

pub use card::{format_cards, parse_cards, Card, CardError, Rank, Suit};
pub use codec::{decode, decode_hand, encode, encode_hand, HAND_KEYS, HAND_SIZE};
pub use set::CardSet;
