//! Persistent resolution cache.
//!
//! Records live on disk as `<cache_path>/<hex digest>.json`, one file per raw
//! mention; file existence is what makes a hit. A bounded in-memory tier
//! (moka) sits in front and memoizes records this process has already read or
//! written. Disk stays authoritative across runs.
//!
//! Writes go to a temporary sibling and are renamed into place, so readers
//! never see a half-written record. Concurrent processes writing the same key
//! are last-writer-wins.

pub mod error;
pub mod types;


pub use error::{CacheError, CacheResult};
pub use types::{AuxiliaryCoordinate, ResolutionRecord};

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use moka::sync::Cache;
use tracing::debug;

use crate::config::Config;
use crate::constants::{RECORD_EXTENSION, RECORD_SCHEMA_VERSION};
use crate::hashing::{hash_mention, key_to_hex};

const TEMP_SUFFIX: &str = "tmp";

/// Where a [`ResolutionCache::get`] hit was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTier {
    Memory,
    Disk,
}

/// Disk-backed record store with an in-memory front tier.
pub struct ResolutionCache {
    cache_path: PathBuf,
    memory: Cache<[u8; 32], ResolutionRecord>,
}

impl ResolutionCache {
    /// Creates a cache rooted at `cache_path` (created lazily on first write).
    pub fn new(cache_path: PathBuf, memory_capacity: u64) -> Self {
        Self {
            cache_path,
            memory: Cache::builder().max_capacity(memory_capacity).build(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_path.clone(), config.memory_capacity)
    }

    /// Returns the root cache directory.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Ensures the root cache directory exists.
    pub fn ensure_cache_path(&self) -> CacheResult<()> {
        if !self.cache_path.exists() {
            fs::create_dir_all(&self.cache_path).map_err(|_| CacheError::StorageUnavailable {
                path: self.cache_path.clone(),
            })?;
        }
        Ok(())
    }

    /// Path of the record file for `mention`.
    pub fn record_path(&self, mention: &str) -> PathBuf {
        self.path_for_key(&key_to_hex(&hash_mention(mention)))
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.cache_path.join(format!("{}.{}", key, RECORD_EXTENSION))
    }

    /// Looks up the record for `mention`.
    pub fn get(&self, mention: &str) -> CacheResult<Option<ResolutionRecord>> {
        Ok(self.get_with_tier(mention)?.map(|(record, _)| record))
    }

    /// Like [`get`](Self::get), also reporting which tier answered.
    pub fn get_with_tier(
        &self,
        mention: &str,
    ) -> CacheResult<Option<(ResolutionRecord, CacheTier)>> {
        let hash = hash_mention(mention);

        if let Some(record) = self.memory.get(&hash) {
            debug!(key = %record.key, "Memory tier hit");
            return Ok(Some((record, CacheTier::Memory)));
        }

        let key = key_to_hex(&hash);
        let path = self.path_for_key(&key);
        if !path.exists() {
            return Ok(None);
        }

        let record = Self::read_record(&path, &key)?;
        debug!(key = %key, "Disk tier hit");
        self.memory.insert(hash, record.clone());
        Ok(Some((record, CacheTier::Disk)))
    }

    fn read_record(path: &Path, key: &str) -> CacheResult<ResolutionRecord> {
        let bytes = fs::read(path)?;
        let record: ResolutionRecord =
            serde_json::from_slice(&bytes).map_err(|e| CacheError::Serialization {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if record.schema_version != RECORD_SCHEMA_VERSION {
            return Err(CacheError::SchemaMismatch {
                path: path.to_path_buf(),
                found: record.schema_version,
                expected: RECORD_SCHEMA_VERSION,
            });
        }
        if record.key != key {
            return Err(CacheError::KeyMismatch {
                path: path.to_path_buf(),
                stored: record.key,
            });
        }

        Ok(record)
    }

    /// Writes `record`, replacing any previous record under the same key.
    pub fn put(&self, record: &ResolutionRecord) -> CacheResult<PathBuf> {
        self.ensure_cache_path()?;

        let final_path = self.path_for_key(&record.key);
        let temp_path = final_path.with_extension(format!("{}.{}", RECORD_EXTENSION, TEMP_SUFFIX));

        let bytes = serde_json::to_vec_pretty(record).map_err(|e| CacheError::Serialization {
            path: final_path.clone(),
            message: e.to_string(),
        })?;

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &final_path)?;

        self.memory
            .insert(hash_mention(&record.mention), record.clone());
        debug!(key = %record.key, path = %final_path.display(), "Record stored");
        Ok(final_path)
    }

    /// Returns `true` if a record file exists for `mention`.
    pub fn contains(&self, mention: &str) -> bool {
        self.record_path(mention).exists()
    }

    /// Drops the in-memory tier (disk is untouched).
    pub fn clear_memory(&self) {
        self.memory.invalidate_all();
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("cache_path", &self.cache_path)
            .field("memory_entries", &self.memory.entry_count())
            .finish()
    }
}
