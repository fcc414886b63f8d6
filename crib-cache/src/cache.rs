use crib_core::{encode_hand, Card, HAND_SIZE};
use std::fmt;
use std::io;

/// One table per possible lead card
pub const LEADS: usize = 52;

/// Cache error type
#[derive(Debug)]
pub enum CacheError {
    /// Reading or writing the artifact failed
    Io(io::Error),
    /// The artifact does not start with the expected magic bytes
    BadMagic,
    /// The artifact was written by an incompatible version
    UnsupportedVersion(u16),
    /// The artifact table size differs from this build's
    Shape { expected: usize, found: usize },
    /// The artifact content is inconsistent
    Corrupt(String),
    /// The worker pool could not be created
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CacheError::Io(err) => write!(f, "Score cache I/O error: {}", err),
            CacheError::BadMagic => write!(f, "Not a score cache artifact"),
            CacheError::UnsupportedVersion(version) => {
                write!(f, "Unsupported score cache version {}", version)
            }
            CacheError::Shape { expected, found } => write!(
                f,
                "Score cache has {} entries per lead, expected {}",
                found, expected
            ),
            CacheError::Corrupt(msg) => write!(f, "Corrupt score cache: {}", msg),
            CacheError::ThreadPool(err) => write!(f, "Failed to start worker pool: {}", err),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::Io(err) => Some(err),
            CacheError::ThreadPool(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CacheError {
    fn from(err: io::Error) -> Self {
        CacheError::Io(err)
    }
}

/// Points for one (lead, hand) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreCacheEntry {
    /// Points counted as a hand
    pub hand: u8,
    /// Points counted as a crib
    pub crib: u8,
}

/// Lookup table of hand and crib points.
///
/// Indexed by lead index, then by hand key. Leads that were not built answer
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCache {
    pub(crate) tables: Vec<Option<Box<[ScoreCacheEntry]>>>,
}

impl ScoreCache {
    /// A cache with no leads built
    pub fn empty() -> Self {
        ScoreCache {
            tables: vec![None; LEADS],
        }
    }

    /// Cached points for `hand` with `lead`.
    ///
    /// `None` when the lead was not built or the hand holds the lead.
    #[inline]
    pub fn get(&self, lead: Card, hand: &[Card; HAND_SIZE]) -> Option<ScoreCacheEntry> {
        if hand.contains(&lead) {
            return None;
        }
        let table = self.tables[lead.to_index() as usize].as_ref()?;
        table.get(encode_hand(hand) as usize).copied()
    }

    /// Whether the table for `lead` is present
    pub fn has_lead(&self, lead: Card) -> bool {
        self.tables[lead.to_index() as usize].is_some()
    }

    /// Number of leads with a table
    pub fn lead_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_some()).count()
    }

    /// True once every lead is present
    pub fn is_complete(&self) -> bool {
        self.lead_count() == LEADS
    }

    pub(crate) fn insert(&mut self, lead_index: u8, table: Box<[ScoreCacheEntry]>) {
        self.tables[lead_index as usize] = Some(table);
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crib_core::HAND_KEYS;

    #[test]
    fn test_empty_cache_misses() {
        let cache = ScoreCache::empty();
        let lead: Card = "5H".parse().unwrap();
        let hand = ["JH", "5C", "5D", "5S"].map(|c| c.parse::<Card>().unwrap());
        assert_eq!(cache.get(lead, &hand), None);
        assert_eq!(cache.lead_count(), 0);
        assert!(!cache.is_complete());
    }

    #[test]
    fn test_inserted_table_is_used() {
        let lead: Card = "5H".parse().unwrap();
        let hand = ["JH", "5C", "5D", "5S"].map(|c| c.parse::<Card>().unwrap());

        let mut table = vec![ScoreCacheEntry::default(); HAND_KEYS].into_boxed_slice();
        table[encode_hand(&hand) as usize] = ScoreCacheEntry { hand: 29, crib: 29 };

        let mut cache = ScoreCache::empty();
        cache.insert(lead.to_index(), table);

        assert!(cache.has_lead(lead));
        assert_eq!(
            cache.get(lead, &hand),
            Some(ScoreCacheEntry { hand: 29, crib: 29 })
        );
        // the lead cannot also be in the hand
        let holds_lead = ["5H", "5C", "5D", "5S"].map(|c| c.parse::<Card>().unwrap());
        assert_eq!(cache.get(lead, &holds_lead), None);
    }
}
