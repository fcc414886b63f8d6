use crate::combos::{choose_n_from, other_options, without, MAX_DEALT};
use crate::compare::{Comparator, Objective};
use crate::source::PointSource;
use crate::stats::{Histogram, TossSummary};
use crate::{SuggestError, CRIB_SIZE};
use crib_core::{format_cards, Card, CardSet, HAND_SIZE};

/// Whether `k` counts the cards kept or the cards tossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Keep,
    Toss,
}

/// Which side of a split the comparator judges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Hand,
    Crib,
}

/// Settings for a discard search
#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    pub comparator: Comparator,
    pub focus: Focus,
    /// Cards known to be out of play (e.g. already seen), never a lead or crib card
    pub known: Vec<Card>,
}

impl Advisor {
    pub fn new(focus: Focus, objective: Objective) -> Self {
        Advisor {
            comparator: Comparator::new(objective),
            focus,
            known: Vec::new(),
        }
    }

    pub fn with_known(mut self, known: Vec<Card>) -> Self {
        self.known = known;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.comparator = self.comparator.with_epsilon(epsilon);
        self
    }

    /// Summaries of every way to split `hand`, in enumeration order.
    ///
    /// `k` is either the number of cards to keep (4) or the number to toss
    /// (`hand.len() - 4`); candidates are enumerated over subsets of that size.
    pub fn summarize_all<S: PointSource + ?Sized>(
        &self,
        source: &S,
        hand: &[Card],
        k: usize,
    ) -> Result<Vec<TossSummary>, SuggestError> {
        let split = self.validate(hand, k)?;
        let subsets = choose_n_from(k, hand)?;

        let mut seen: CardSet = hand.iter().collect();
        for &card in &self.known {
            seen.insert(card);
        }
        let leads: Vec<Card> = seen.complement().iter().collect();
        let mut exclude = hand.to_vec();
        exclude.extend_from_slice(&self.known);
        let options = other_options(CRIB_SIZE - (hand.len() - HAND_SIZE), &exclude);

        log::debug!(
            "{} candidates ({:?} {}) for {}: {} leads, {} crib options",
            subsets.len(),
            split,
            k,
            format_cards(hand),
            leads.len(),
            options.len()
        );

        subsets
            .into_iter()
            .map(|subset| {
                let rest = without(hand, &subset);
                let (kept, tossed) = match split {
                    Split::Keep => (subset, rest),
                    Split::Toss => (rest, subset),
                };
                summarize(source, kept, tossed, &leads, &options)
            })
            .collect()
    }

    /// The best subset of size `k` and the summary of its split.
    ///
    /// The subset is the kept cards when `k` is 4 and the tossed cards when
    /// `k` is the toss size. Candidates are judged on the focused statistics;
    /// the first of several equally good candidates wins.
    pub fn suggest_discard<S: PointSource + ?Sized>(
        &self,
        source: &S,
        hand: &[Card],
        k: usize,
    ) -> Result<(Vec<Card>, TossSummary), SuggestError> {
        let split = self.validate(hand, k)?;
        let summaries = self.summarize_all(source, hand, k)?;
        // validation guarantees at least one candidate
        let best = self.best(summaries).ok_or(SuggestError::InvalidArity {
            k,
            len: hand.len(),
        })?;
        let subset = match split {
            Split::Keep => best.kept.clone(),
            Split::Toss => best.tossed.clone(),
        };
        Ok((subset, best))
    }

    /// The best of `summaries` under the comparator and focus
    pub fn best<I: IntoIterator<Item = TossSummary>>(&self, summaries: I) -> Option<TossSummary> {
        let mut best: Option<TossSummary> = None;
        for summary in summaries {
            let current = best.as_ref().map(|b| b.stats(self.focus));
            if self.comparator.is_better(current, summary.stats(self.focus)) {
                best = Some(summary);
            }
        }
        if let Some(best) = &best {
            log::debug!(
                "keep {} toss {} ({:?} {})",
                format_cards(&best.kept),
                format_cards(&best.tossed),
                self.focus,
                best.stats(self.focus)
            );
        }
        best
    }

    fn validate(&self, hand: &[Card], k: usize) -> Result<Split, SuggestError> {
        let len = hand.len();
        if len > MAX_DEALT {
            return Err(SuggestError::HandTooLarge { len });
        }
        if k < 1 || k > len {
            return Err(SuggestError::InvalidArity { k, len });
        }
        if len <= HAND_SIZE {
            return Err(SuggestError::InvalidKeep { keep: k, len });
        }
        let split = if k == HAND_SIZE {
            Split::Keep
        } else if k == len - HAND_SIZE {
            Split::Toss
        } else {
            return Err(SuggestError::InvalidKeep { keep: k, len });
        };
        if let Some(card) = CardSet::first_duplicate(hand.iter().chain(&self.known)) {
            return Err(SuggestError::DuplicateCard(card));
        }
        Ok(split)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Advisor::new(Focus::Hand, Objective::HighestIsBetter)
    }
}

/// Best subset of size `k` (kept or tossed) from `hand` under `advisor`
pub fn suggest_discard<S: PointSource + ?Sized>(
    advisor: &Advisor,
    source: &S,
    hand: &[Card],
    k: usize,
) -> Result<(Vec<Card>, TossSummary), SuggestError> {
    advisor.suggest_discard(source, hand, k)
}

fn summarize<S: PointSource + ?Sized>(
    source: &S,
    kept: Vec<Card>,
    tossed: Vec<Card>,
    leads: &[Card],
    options: &[Vec<Card>],
) -> Result<TossSummary, SuggestError> {
    let kept_hand: [Card; HAND_SIZE] = kept.as_slice().try_into().map_err(|_| {
        SuggestError::InvalidKeep {
            keep: kept.len(),
            len: kept.len() + tossed.len(),
        }
    })?;

    let mut hand_points = Histogram::default();
    let mut crib_points = Histogram::default();
    for &lead in leads {
        hand_points.add(source.hand_points(lead, &kept_hand));

        for option in options {
            if option.contains(&lead) {
                continue;
            }
            let mut crib = [lead; CRIB_SIZE];
            for (slot, &card) in crib.iter_mut().zip(tossed.iter().chain(option)) {
                *slot = card;
            }
            crib_points.add(source.crib_points(lead, &crib));
        }
    }

    Ok(TossSummary {
        kept,
        tossed,
        hand: hand_points.stats(),
        crib: crib_points.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Calculator;
    use crib_core::parse_cards;

    #[test]
    fn test_validation_order() {
        let advisor = Advisor::default();
        let seven = parse_cards("AH 2H 3H 4H 5H 6H 7H").unwrap();
        assert_eq!(
            advisor.suggest_discard(&Calculator, &seven, 9),
            Err(SuggestError::HandTooLarge { len: 7 })
        );

        let six = parse_cards("AH 2H 3H 4H 5H 6H").unwrap();
        assert_eq!(
            advisor.suggest_discard(&Calculator, &six, 0),
            Err(SuggestError::InvalidArity { k: 0, len: 6 })
        );
        assert_eq!(
            advisor.suggest_discard(&Calculator, &six, 7),
            Err(SuggestError::InvalidArity { k: 7, len: 6 })
        );
        assert_eq!(
            advisor.suggest_discard(&Calculator, &six, 3),
            Err(SuggestError::InvalidKeep { keep: 3, len: 6 })
        );
        assert_eq!(
            advisor.suggest_discard(&Calculator, &six, 1),
            Err(SuggestError::InvalidKeep { keep: 1, len: 6 })
        );

        let five = parse_cards("AH 2H 3H 4H 5H").unwrap();
        assert_eq!(
            advisor.suggest_discard(&Calculator, &five, 2),
            Err(SuggestError::InvalidKeep { keep: 2, len: 5 })
        );

        let four = parse_cards("AH 2H 3H 4H").unwrap();
        assert_eq!(
            advisor.suggest_discard(&Calculator, &four, 4),
            Err(SuggestError::InvalidKeep { keep: 4, len: 4 })
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        let twice = parse_cards("AH 2H 3H 4H 5H AH").unwrap();
        assert_eq!(
            Advisor::default().suggest_discard(&Calculator, &twice, 4),
            Err(SuggestError::DuplicateCard("AH".parse().unwrap()))
        );

        let hand = parse_cards("AH 2H 3H 4H 5H 6H").unwrap();
        let advisor = Advisor::default().with_known(parse_cards("KC 3H").unwrap());
        assert_eq!(
            advisor.suggest_discard(&Calculator, &hand, 4),
            Err(SuggestError::DuplicateCard("3H".parse().unwrap()))
        );
    }

    #[test]
    fn test_summary_counts() {
        let hand = parse_cards("5H 5C 5D JS 9C 8D").unwrap();
        let summaries = Advisor::default()
            .summarize_all(&Calculator, &hand, 4)
            .unwrap();
        assert_eq!(summaries.len(), 15);
        for summary in &summaries {
            assert_eq!(summary.kept.len(), 4);
            assert_eq!(summary.tossed.len(), 2);
            assert_eq!(summary.hand.samples, 46);
            // 46 leads, each with C(45, 2) opponent pairs
            assert_eq!(summary.crib.samples, 46 * 990);
        }
        assert_eq!(summaries[0].kept, parse_cards("5H 5C 5D JS").unwrap());
        assert_eq!(summaries[0].tossed, parse_cards("9C 8D").unwrap());
    }

    #[test]
    fn test_known_cards_shrink_the_universe() {
        let hand = parse_cards("5H 5C 5D JS 9C 8D").unwrap();
        let advisor = Advisor::default().with_known(parse_cards("5S KH").unwrap());
        let summaries = advisor.summarize_all(&Calculator, &hand, 4).unwrap();
        // the fourth five is gone, so no lead makes 29
        assert_eq!(summaries[0].hand.samples, 44);
        assert_eq!(summaries[0].hand.min, 14);
        assert_eq!(summaries[0].hand.max, 22);
        assert_eq!(summaries[0].hand.median, 14.5);
        assert_eq!(summaries[0].crib.samples, 44 * 903);
    }

    #[test]
    fn test_toss_size_enumerates_tosses() {
        let hand = parse_cards("5H 5C 5D JS 9C 8D").unwrap();
        let advisor = Advisor::default();
        let by_toss = advisor.summarize_all(&Calculator, &hand, 2).unwrap();
        assert_eq!(by_toss.len(), 15);
        assert_eq!(by_toss[0].tossed, parse_cards("5H 5C").unwrap());
        assert_eq!(by_toss[0].kept, parse_cards("5D JS 9C 8D").unwrap());

        // same splits as enumerating kept hands, in another order
        let by_keep = advisor.summarize_all(&Calculator, &hand, 4).unwrap();
        for summary in &by_toss {
            assert!(by_keep.contains(summary), "missing split {}", summary);
        }
    }

    #[test]
    fn test_five_card_deal_summary_counts() {
        let hand = parse_cards("5H 5C 5D JS 9C").unwrap();
        let summaries = Advisor::default()
            .summarize_all(&Calculator, &hand, 4)
            .unwrap();
        assert_eq!(summaries.len(), 5);
        for summary in &summaries {
            assert_eq!(summary.kept.len(), 4);
            assert_eq!(summary.tossed.len(), 1);
            assert_eq!(summary.hand.samples, 47);
            // 47 leads, each with C(46, 3) three-card opponent contributions
            assert_eq!(summary.crib.samples, 713_460);
        }
        assert_eq!(summaries[0].kept, parse_cards("5H 5C 5D JS").unwrap());
        assert_eq!(summaries[0].tossed, parse_cards("9C").unwrap());
    }
}
