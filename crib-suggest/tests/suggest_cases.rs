//! Discard suggestions on hands with a clear answer, and comparator properties.

use crib_cache::ScoreCache;
use crib_core::{parse_cards, Card};
use crib_suggest::{
    suggest_discard, Advisor, Calculator, Comparator, Focus, Objective, TossStats,
};
use proptest::prelude::*;

const DEAL: &str = "5H 5C 5D JS 9C 8D";

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

#[test]
fn test_keeps_three_fives_and_jack_for_hand() {
    let advisor = Advisor::new(Focus::Hand, Objective::HighestIsBetter);
    let (kept, summary) = suggest_discard(&advisor, &Calculator, &cards(DEAL), 4).unwrap();

    assert_eq!(kept, cards("5H 5C 5D JS"));
    assert_eq!(summary.tossed, cards("9C 8D"));
    assert_eq!(summary.hand.min, 14);
    assert_eq!(summary.hand.max, 29);
    assert_eq!(summary.hand.median, 15.0);
    assert_eq!(summary.hand.samples, 46);
}

#[test]
fn test_tosses_pair_of_fives_to_own_crib() {
    let advisor = Advisor::new(Focus::Crib, Objective::HighestIsBetter);
    let (kept, summary) = advisor.suggest_discard(&Calculator, &cards(DEAL), 4).unwrap();

    // three equivalent pairs of fives; the first enumerated wins
    assert_eq!(kept, cards("5H JS 9C 8D"));
    assert_eq!(summary.tossed, cards("5C 5D"));
    assert_eq!(summary.crib.median, 8.0);
    assert_eq!(summary.crib.min, 2);
    assert_eq!(summary.crib.max, 24);
}

#[test]
fn test_best_toss_when_asked_by_toss_size() {
    let advisor = Advisor::new(Focus::Crib, Objective::HighestIsBetter);
    let (tossed, summary) = advisor.suggest_discard(&Calculator, &cards(DEAL), 2).unwrap();

    // pairs of fives tie; the first toss enumerated wins
    assert_eq!(tossed, cards("5H 5C"));
    assert_eq!(summary.tossed, tossed);
    assert_eq!(summary.kept, cards("5D JS 9C 8D"));
    assert_eq!(summary.crib.median, 8.0);
    assert_eq!(summary.crib.max, 24);
}

#[test]
fn test_starves_opponent_crib() {
    let advisor = Advisor::new(Focus::Crib, Objective::LowestIsBetter);
    let (kept, summary) = advisor.suggest_discard(&Calculator, &cards(DEAL), 4).unwrap();

    assert_eq!(kept, cards("5H 5C 5D 9C"));
    assert_eq!(summary.tossed, cards("JS 8D"));
    assert_eq!(summary.crib.median, 3.0);
    assert_eq!(summary.crib.max, 13);
}

#[test]
fn test_cache_source_matches_calculator() {
    // leads missing from the cache fall back to direct scoring
    let cache = ScoreCache::empty();
    let hand = cards("2C 3D 4H 7S 7C QD");
    let advisor = Advisor::new(Focus::Hand, Objective::HighestIsBetter);

    let from_cache = advisor.summarize_all(&cache, &hand, 4).unwrap();
    let direct = advisor.summarize_all(&Calculator, &hand, 4).unwrap();
    assert_eq!(from_cache, direct);
}

fn toss_stats() -> impl Strategy<Value = TossStats> {
    (0u8..=29, 0u8..=29, 0u32..=58, 0u32..=2900).prop_map(|(a, b, half_median, avg)| {
        TossStats {
            min: a.min(b),
            max: a.max(b),
            avg: avg as f64 / 100.0,
            median: half_median as f64 / 2.0,
            samples: 46,
        }
    })
}

fn objective() -> impl Strategy<Value = Objective> {
    prop_oneof![
        Just(Objective::HighestIsBetter),
        Just(Objective::LowestIsBetter)
    ]
}

proptest! {
    #[test]
    fn test_never_better_than_itself(stats in toss_stats(), objective in objective()) {
        let comparator = Comparator::new(objective);
        prop_assert!(!comparator.is_better(Some(&stats), &stats));
        prop_assert!(comparator.is_better(None, &stats));
    }

    #[test]
    fn test_at_most_one_direction_wins(
        a in toss_stats(),
        b in toss_stats(),
        objective in objective(),
    ) {
        let comparator = Comparator::new(objective);
        prop_assert!(!(comparator.is_better(Some(&a), &b) && comparator.is_better(Some(&b), &a)));
    }

    #[test]
    fn test_objectives_disagree_on_medians(
        a in toss_stats(),
        b in toss_stats(),
    ) {
        prop_assume!((a.median - b.median).abs() > 0.1);
        let high = Comparator::new(Objective::HighestIsBetter);
        let low = Comparator::new(Objective::LowestIsBetter);
        prop_assert_ne!(high.is_better(Some(&a), &b), low.is_better(Some(&a), &b));
    }
}
