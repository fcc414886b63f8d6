//! Property tests for the card and hand encodings.

use crib_core::{decode, decode_hand, encode, encode_hand, Card, HAND_KEYS};
use proptest::prelude::*;

/// Strategy: four distinct card indices
fn hand_strategy() -> impl Strategy<Value = [Card; 4]> {
    proptest::sample::subsequence((0..52u8).collect::<Vec<_>>(), 4)
        .prop_shuffle()
        .prop_map(|indices| {
            let cards: Vec<Card> = indices.into_iter().map(|i| decode(i).unwrap()).collect();
            [cards[0], cards[1], cards[2], cards[3]]
        })
}

proptest! {
    #[test]
    fn card_round_trip(value in 0..52u8) {
        prop_assert_eq!(encode(decode(value).unwrap()), value);
    }

    #[test]
    fn out_of_range_rejected(value in 52..=255u8) {
        prop_assert!(decode(value).is_err());
    }

    #[test]
    fn hand_key_in_range_and_reversible(hand in hand_strategy()) {
        let key = encode_hand(&hand);
        prop_assert!((key as usize) < HAND_KEYS);

        let mut sorted = hand;
        sorted.sort_by_key(|c| c.to_index());
        prop_assert_eq!(decode_hand(key).unwrap(), sorted);
    }

    #[test]
    fn hand_key_ignores_order(hand in hand_strategy()) {
        let mut reversed = hand;
        reversed.reverse();
        let mut rotated = hand;
        rotated.rotate_left(1);
        prop_assert_eq!(encode_hand(&hand), encode_hand(&reversed));
        prop_assert_eq!(encode_hand(&hand), encode_hand(&rotated));
    }

    #[test]
    fn distinct_hands_distinct_keys(a in hand_strategy(), b in hand_strategy()) {
        let mut sa = a.map(|c| c.to_index());
        let mut sb = b.map(|c| c.to_index());
        sa.sort_unstable();
        sb.sort_unstable();
        if sa != sb {
            prop_assert_ne!(encode_hand(&a), encode_hand(&b));
        }
    }

    #[test]
    fn notation_round_trip(value in 0..52u8) {
        let card = decode(value).unwrap();
        prop_assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
}
