//! Core data models for Holocron CLI
//!
//! This module contains the record types shared between the cache, the API
//! client, and the presentation layer: characters, their homeworlds, and
//! search-history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A character enriched with its homeworld and a fetch timestamp
///
/// SWAPI returns more attributes than we model explicitly (films, vehicles,
/// eye color, ...). Those are collected into `extra` so they survive a cache
/// round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character name, also the cache key
    pub name: String,
    /// Height in centimeters, as reported by the API (may be "unknown")
    pub height: String,
    /// Mass in kilograms, as reported by the API (may be "unknown")
    pub mass: String,
    /// Birth year in in-universe notation, e.g. "19BBY"
    pub birth_year: String,
    /// The character's homeworld, absent if the secondary fetch failed
    pub homeworld: Option<HomeworldRecord>,
    /// When this record was fetched from the API; never updated on cache hit
    #[serde(rename = "timestamp")]
    pub fetched_at: DateTime<Utc>,
    /// Any additional attributes the API returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A planet as returned by the SWAPI homeworld endpoint
///
/// Numeric fields arrive as strings and may hold the sentinel "unknown";
/// parsing is deferred to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworldRecord {
    /// Planet name
    pub name: String,
    /// Population count as a numeric string, or "unknown"
    pub population: String,
    /// Orbital period in days as a numeric string, or "unknown"
    pub orbital_period: String,
    /// Rotation period in hours as a numeric string, or "unknown"
    pub rotation_period: String,
}

/// One entry in the append-only search-history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The query string as the user typed it
    pub query: String,
    /// When the search was performed
    pub timestamp: DateTime<Utc>,
    /// Names of the matched characters, empty if none
    pub results: Vec<String>,
}
