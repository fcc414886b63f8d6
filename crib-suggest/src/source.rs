use crib_cache::ScoreCache;
use crib_core::{Card, HAND_SIZE};
use crib_score::{score_crib, score_hand};

/// Where the advisor gets hand and crib points from
pub trait PointSource {
    fn hand_points(&self, lead: Card, hand: &[Card; HAND_SIZE]) -> u8;
    fn crib_points(&self, lead: Card, crib: &[Card; HAND_SIZE]) -> u8;
}

/// Scores every hand directly
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl PointSource for Calculator {
    #[inline]
    fn hand_points(&self, lead: Card, hand: &[Card; HAND_SIZE]) -> u8 {
        score_hand(lead, hand)
    }

    #[inline]
    fn crib_points(&self, lead: Card, crib: &[Card; HAND_SIZE]) -> u8 {
        score_crib(lead, crib)
    }
}

// Leads missing from the cache are scored directly.
impl PointSource for ScoreCache {
    #[inline]
    fn hand_points(&self, lead: Card, hand: &[Card; HAND_SIZE]) -> u8 {
        match self.get(lead, hand) {
            Some(entry) => entry.hand,
            None => score_hand(lead, hand),
        }
    }

    #[inline]
    fn crib_points(&self, lead: Card, crib: &[Card; HAND_SIZE]) -> u8 {
        match self.get(lead, crib) {
            Some(entry) => entry.crib,
            None => score_crib(lead, crib),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crib_cache::BuildConfig;

    fn hand(text: &str) -> [Card; HAND_SIZE] {
        let cards = crib_core::parse_cards(text).unwrap();
        [cards[0], cards[1], cards[2], cards[3]]
    }

    #[test]
    fn test_calculator() {
        let lead: Card = "5H".parse().unwrap();
        let cards = hand("JH 5C 5D 5S");
        assert_eq!(Calculator.hand_points(lead, &cards), 29);
        assert_eq!(Calculator.crib_points(lead, &cards), 29);

        let flush = hand("2D 4D 6D 8D");
        let lead: Card = "KS".parse().unwrap();
        assert_eq!(Calculator.hand_points(lead, &flush), 4);
        assert_eq!(Calculator.crib_points(lead, &flush), 0);
    }

    #[test]
    fn test_cache_agrees_with_calculator() {
        let built: Card = "KS".parse().unwrap();
        let missing: Card = "QC".parse().unwrap();
        let cache = ScoreCache::build_leads(&[built], &BuildConfig::with_threads(1)).unwrap();
        for text in ["2D 4D 6D 8D", "JH 5C 5D 5S", "AC 2C 3C 4H", "9S 10S JS QS"] {
            let cards = hand(text);
            for lead in [built, missing] {
                assert_eq!(
                    cache.hand_points(lead, &cards),
                    Calculator.hand_points(lead, &cards)
                );
                assert_eq!(
                    cache.crib_points(lead, &cards),
                    Calculator.crib_points(lead, &cards)
                );
            }
        }
    }
}
