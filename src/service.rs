//! Search orchestration: cache lookup with remote fallback
//!
//! `SearchService` consults the local cache first, falls back to the API on
//! a miss, enriches fetched characters with their homeworld, and records
//! every query in the search history exactly once, whatever the outcome.
//! Remote failures degrade to an empty result set; only cache persistence
//! failures propagate.

use chrono::Utc;

use crate::api::CharacterApi;
use crate::cache::{CacheError, CharacterCache};
use crate::data::CharacterRecord;

/// Cache-first character search over a `CharacterApi` transport
#[derive(Debug)]
pub struct SearchService<A> {
    cache: CharacterCache,
    api: A,
}

impl<A: CharacterApi> SearchService<A> {
    /// Creates a service around a loaded cache and an API client
    pub fn new(cache: CharacterCache, api: A) -> Self {
        Self { cache, api }
    }

    /// Read access to the underlying cache
    pub fn cache(&self) -> &CharacterCache {
        &self.cache
    }

    /// Searches for characters matching `query`
    ///
    /// Cache hits are returned as-is, without touching the network. On a
    /// miss the API is queried; each fetched character gets a homeworld
    /// lookup (failure leaves that one record's homeworld absent) and a
    /// fetch timestamp before being cached. The whole batch is flushed
    /// once, then the query lands in the history log.
    ///
    /// # Returns
    /// * `Ok(records)` - matches, possibly empty; remote failures are
    ///   logged and yield an empty list
    /// * `Err(CacheError)` - only if persisting the cache or history fails
    pub async fn search(&mut self, query: &str) -> Result<Vec<CharacterRecord>, CacheError> {
        let cached = self.cache.search_by_name(query);
        if !cached.is_empty() {
            let names = cached.iter().map(|record| record.name.clone()).collect();
            self.cache.record_search(query, names)?;
            return Ok(cached);
        }

        let fetched = match self.api.search_people(query).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!("Could not complete the search request: {err}");
                self.cache.record_search(query, Vec::new())?;
                return Ok(Vec::new());
            }
        };

        if fetched.is_empty() {
            self.cache.record_search(query, Vec::new())?;
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(fetched.len());
        for character in fetched {
            let homeworld = match self.api.fetch_homeworld(&character.homeworld).await {
                Ok(homeworld) => Some(homeworld),
                Err(err) => {
                    tracing::warn!(
                        "Could not fetch homeworld data for {}: {err}",
                        character.name
                    );
                    None
                }
            };
            let record = character.into_record(homeworld, Utc::now());
            self.cache.upsert(record.clone());
            records.push(record);
        }

        self.cache.flush()?;
        let names = records.iter().map(|record| record.name.clone()).collect();
        self.cache.record_search(query, names)?;

        Ok(records)
    }
}
