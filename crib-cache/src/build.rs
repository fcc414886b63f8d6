//! Exhaustive cache build, fanned out over leads.
//!
//! Each worker owns the table of one lead for the whole enumeration; tables
//! are placed by lead index afterwards, so the result does not depend on the
//! number of threads or the order workers finish.

use crate::{CacheError, ScoreCache, ScoreCacheEntry};
use crib_core::{encode_hand, Card, HAND_KEYS};
use crib_score::{score_crib, score_hand};
use rayon::prelude::*;
use std::time::Instant;

/// Configuration for the parallel build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildConfig {
    /// Number of worker threads (0 = rayon default)
    pub num_threads: usize,
}

impl BuildConfig {
    pub fn with_threads(num_threads: usize) -> Self {
        BuildConfig { num_threads }
    }
}

impl ScoreCache {
    /// Build tables for all 52 leads
    pub fn build(config: &BuildConfig) -> Result<Self, CacheError> {
        let leads: Vec<Card> = Card::all().collect();
        Self::build_leads(&leads, config)
    }

    /// Build tables for the given leads only
    pub fn build_leads(leads: &[Card], config: &BuildConfig) -> Result<Self, CacheError> {
        log::info!(
            "building score cache for {} leads ({} threads)",
            leads.len(),
            if config.num_threads == 0 {
                rayon::current_num_threads()
            } else {
                config.num_threads
            }
        );
        let start = Instant::now();

        let build = || -> Vec<(u8, Box<[ScoreCacheEntry]>)> {
            leads
                .par_iter()
                .map(|&lead| (lead.to_index(), build_lead(lead)))
                .collect()
        };
        let tables = if config.num_threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build()
                .map_err(CacheError::ThreadPool)?
                .install(build)
        } else {
            build()
        };

        let mut cache = ScoreCache::empty();
        for (lead_index, table) in tables {
            cache.insert(lead_index, table);
        }

        log::info!(
            "built {} lead tables in {:.2?}",
            cache.lead_count(),
            start.elapsed()
        );
        Ok(cache)
    }
}

/// Hand and crib points for every 4-card hand drawn from the other 51 cards
fn build_lead(lead: Card) -> Box<[ScoreCacheEntry]> {
    let mut table = vec![ScoreCacheEntry::default(); HAND_KEYS];
    let rest: Vec<Card> = Card::all().filter(|&c| c != lead).collect();
    let n = rest.len();
    let mut hands = 0usize;

    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    let hand = [rest[a], rest[b], rest[c], rest[d]];
                    table[encode_hand(&hand) as usize] = ScoreCacheEntry {
                        hand: score_hand(lead, &hand),
                        crib: score_crib(lead, &hand),
                    };
                    hands += 1;
                }
            }
        }
    }

    log::debug!("lead {}: {} hands scored", lead, hands);
    table.into_boxed_slice()
}
