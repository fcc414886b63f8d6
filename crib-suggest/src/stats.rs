use crate::Focus;
use crib_core::{format_cards, Card};
use std::fmt;

/// Highest count of any hand or crib
const MAX_POINTS: usize = 29;

/// Summary of a point distribution
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TossStats {
    pub min: u8,
    pub max: u8,
    pub avg: f64,
    pub median: f64,
    /// Number of outcomes summarized
    pub samples: u64,
}

impl TossStats {
    /// Summarize a list of point outcomes
    pub fn from_points<I: IntoIterator<Item = u8>>(points: I) -> Self {
        let mut histogram = Histogram::default();
        for p in points {
            histogram.add(p);
        }
        histogram.stats()
    }
}

impl fmt::Display for TossStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "median {:>5.1}  avg {:>6.3}  min {:>2}  max {:>2}",
            self.median, self.avg, self.min, self.max
        )
    }
}

/// Counts of each point total
#[derive(Debug, Clone)]
pub(crate) struct Histogram {
    counts: [u64; MAX_POINTS + 1],
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram {
            counts: [0; MAX_POINTS + 1],
        }
    }
}

impl Histogram {
    pub(crate) fn add(&mut self, points: u8) {
        let bucket = (points as usize).min(MAX_POINTS);
        self.counts[bucket] += 1;
    }

    fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Value at 0-based position `rank` of the sorted outcomes
    fn nth(&self, rank: u64) -> u8 {
        let mut seen = 0u64;
        for (points, &count) in self.counts.iter().enumerate() {
            seen += count;
            if seen > rank {
                return points as u8;
            }
        }
        MAX_POINTS as u8
    }

    pub(crate) fn stats(&self) -> TossStats {
        let samples = self.total();
        if samples == 0 {
            return TossStats::default();
        }
        let sum: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(points, &count)| points as u64 * count)
            .sum();
        let lower = self.nth((samples - 1) / 2);
        let upper = self.nth(samples / 2);
        TossStats {
            min: self.nth(0),
            max: self.nth(samples - 1),
            avg: sum as f64 / samples as f64,
            median: (lower as f64 + upper as f64) / 2.0,
            samples,
        }
    }
}

/// Statistics for one way of splitting a dealt hand
#[derive(Debug, Clone, PartialEq)]
pub struct TossSummary {
    /// Cards kept as the hand
    pub kept: Vec<Card>,
    /// Cards given to the crib
    pub tossed: Vec<Card>,
    /// Hand points over every unseen lead
    pub hand: TossStats,
    /// Crib points over every unseen lead and opponent contribution
    pub crib: TossStats,
}

impl TossSummary {
    /// The statistics the given focus compares
    pub fn stats(&self, focus: Focus) -> &TossStats {
        match focus {
            Focus::Hand => &self.hand,
            Focus::Crib => &self.crib,
        }
    }
}

impl fmt::Display for TossSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "keep {:<14} toss {:<8} hand [{}]  crib [{}]",
            format_cards(&self.kept),
            format_cards(&self.tossed),
            self.hand,
            self.crib
        )
    }
}
