//! Local cache for character records and search history
//!
//! Persists characters and the append-only search-history log to a single
//! JSON file, loaded once at startup and flushed on mutation.

mod store;

pub use store::{default_cache_path, CacheError, CharacterCache};
