//! Score cache: hand and crib points for every (lead, 4-card hand) pair.
//!
//! The table is built once by exhaustive enumeration, fanned out over leads
//! with rayon, and can be saved to and loaded from a binary artifact. After
//! construction it is read-only and shared freely between threads.

mod artifact;
mod build;
mod cache;

pub use build::BuildConfig;
pub use cache::{CacheError, ScoreCache, ScoreCacheEntry, LEADS};
