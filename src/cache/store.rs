//! File-backed character cache
//!
//! Provides `CharacterCache`, an in-memory store of character records plus a
//! search-history log, persisted as one JSON object on disk. An absent file
//! is an empty store; a file that exists but does not parse is corruption
//! and fails the load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{CharacterRecord, HistoryEntry};

/// Errors that can occur when loading or persisting the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing the backing file failed
    #[error("Cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not valid cache JSON
    #[error("Cache file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout of the backing file
///
/// Characters are stored as an ordered array rather than a name-keyed object
/// so the history log can never collide with a character name, and so
/// insertion order survives a round trip.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    characters: Vec<CharacterRecord>,
    #[serde(default)]
    search_history: Vec<HistoryEntry>,
}

/// In-memory character store backed by a single JSON file
///
/// Records live forever until an explicit `clear`; there is no TTL or
/// eviction. A single process owns the file at a time; concurrent writers
/// are last-writer-wins.
#[derive(Debug)]
pub struct CharacterCache {
    /// Path of the backing file
    path: PathBuf,
    /// Cached records in insertion order
    characters: Vec<CharacterRecord>,
    /// Append-only search log
    history: Vec<HistoryEntry>,
}

impl CharacterCache {
    /// Loads the cache from the backing file
    ///
    /// # Returns
    /// * `Ok(CharacterCache)` - an empty store if the file does not exist
    /// * `Err(CacheError::Corrupt)` - if the file exists but is not valid JSON
    /// * `Err(CacheError::Io)` - if the file exists but cannot be read
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self {
                    path,
                    characters: Vec::new(),
                    history: Vec::new(),
                });
            }
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let file: CacheFile = serde_json::from_str(&contents)
            .map_err(|source| CacheError::Corrupt {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            characters: file.characters,
            history: file.search_history,
        })
    }

    /// Returns the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Case-insensitive substring search over cached character names
    ///
    /// Returns matches in insertion order. An empty query matches every
    /// record, since the empty string is a substring of anything.
    pub fn search_by_name(&self, query: &str) -> Vec<CharacterRecord> {
        let query = query.to_lowercase();
        self.characters
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Inserts a record, overwriting any existing record with the same name
    ///
    /// Name comparison is exact (case-sensitive, as stored). Persistence is
    /// deferred: batch callers insert all records, then `flush` once.
    pub fn upsert(&mut self, record: CharacterRecord) {
        match self
            .characters
            .iter_mut()
            .find(|existing| existing.name == record.name)
        {
            Some(existing) => *existing = record,
            None => self.characters.push(record),
        }
    }

    /// Appends a history entry stamped with the current time and persists
    /// immediately
    pub fn record_search(
        &mut self,
        query: &str,
        results: Vec<String>,
    ) -> Result<(), CacheError> {
        self.history.push(HistoryEntry {
            query: query.to_string(),
            timestamp: Utc::now(),
            results,
        });
        self.flush()
    }

    /// The search-history log, oldest entry first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Serializes the full store to the backing file, overwriting it
    pub fn flush(&self) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| CacheError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let file = CacheFile {
            characters: self.characters.clone(),
            search_history: self.history.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|source| CacheError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Deletes the backing file if present and resets the in-memory store
    pub fn clear(&mut self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(CacheError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        }
        self.characters.clear();
        self.history.clear();
        Ok(())
    }
}

/// Returns the default cache file path
///
/// Uses the XDG cache directory (`~/.cache/holocron/cache.json` on Linux),
/// falling back to `cache.json` in the working directory when no home
/// directory can be determined.
pub fn default_cache_path() -> PathBuf {
    match ProjectDirs::from("", "", "holocron") {
        Some(dirs) => dirs.cache_dir().join("cache.json"),
        None => PathBuf::from("cache.json"),
    }
}
