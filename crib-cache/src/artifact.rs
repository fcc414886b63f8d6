//! Binary cache artifact.
//!
//! Layout, big-endian:
//!
//! ```text
//! b"CRIBSCOR"            magic
//! u16                    version
//! u32                    entries per lead (HAND_KEYS)
//! 52 x {
//!     u8                 1 if the lead table follows, 0 otherwise
//!     [u8 hand, u8 crib] x entries per lead
//! }
//! ```

use crate::{CacheError, ScoreCache, ScoreCacheEntry};
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use crib_core::HAND_KEYS;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 8] = b"CRIBSCOR";
const VERSION: u16 = 1;

impl ScoreCache {
    /// Serialize every lead table to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), CacheError> {
        writer.write_all(MAGIC)?;
        writer.write_u16::<BE>(VERSION)?;
        writer.write_u32::<BE>(HAND_KEYS as u32)?;

        let mut row = Vec::with_capacity(HAND_KEYS * 2);
        for table in &self.tables {
            match table {
                None => writer.write_u8(0)?,
                Some(entries) => {
                    writer.write_u8(1)?;
                    row.clear();
                    for entry in entries.iter() {
                        row.push(entry.hand);
                        row.push(entry.crib);
                    }
                    writer.write_all(&row)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Deserialize a cache written by [`ScoreCache::write_to`]
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, CacheError> {
        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(CacheError::BadMagic);
        }
        let version = reader.read_u16::<BE>()?;
        if version != VERSION {
            return Err(CacheError::UnsupportedVersion(version));
        }
        let entries = reader.read_u32::<BE>()? as usize;
        if entries != HAND_KEYS {
            return Err(CacheError::Shape {
                expected: HAND_KEYS,
                found: entries,
            });
        }

        let mut cache = ScoreCache::empty();
        let mut row = vec![0u8; HAND_KEYS * 2];
        for lead_index in 0..cache.tables.len() as u8 {
            match reader.read_u8()? {
                0 => continue,
                1 => {
                    reader.read_exact(&mut row)?;
                    let table: Box<[ScoreCacheEntry]> = row
                        .chunks_exact(2)
                        .map(|pair| ScoreCacheEntry {
                            hand: pair[0],
                            crib: pair[1],
                        })
                        .collect();
                    cache.insert(lead_index, table);
                }
                flag => {
                    return Err(CacheError::Corrupt(format!(
                        "lead {} has presence flag {}",
                        lead_index, flag
                    )))
                }
            }
        }
        Ok(cache)
    }

    /// Write the artifact to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CacheError> {
        let path = path.as_ref();
        log::info!(
            "writing score cache ({} leads) to {}",
            self.lead_count(),
            path.display()
        );
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Load an artifact from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let cache = Self::read_from(BufReader::new(file))?;
        log::info!(
            "loaded score cache ({} leads) from {}",
            cache.lead_count(),
            path.display()
        );
        Ok(cache)
    }
}
