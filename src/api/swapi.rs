//! HTTP client for the Star Wars API (swapi.dev)
//!
//! Fetches character search results from the people endpoint and resolves
//! each character's homeworld URL with a secondary request. Transport
//! failures and unparseable bodies are reported as distinct error variants
//! so the service layer can degrade them uniformly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::data::{CharacterRecord, HomeworldRecord};

/// Default base URL for the SWAPI people-search endpoint
const PEOPLE_BASE_URL: &str = "https://swapi.dev/api/people/";

/// Errors that can occur when talking to the API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (unreachable host, non-2xx status, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Malformed API response: {0}")]
    Malformed(String),
}

/// Response envelope of the people-search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ApiCharacter>,
}

/// A character as it appears on the wire, homeworld still a URL
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCharacter {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    /// URL of the homeworld resource, to be resolved by a secondary fetch
    pub homeworld: String,
    /// Any additional attributes the API returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiCharacter {
    /// Converts a wire character into a cacheable record
    ///
    /// The homeworld URL is replaced with the resolved record (or `None` if
    /// the secondary fetch failed) and the record is stamped with the fetch
    /// time.
    pub fn into_record(
        self,
        homeworld: Option<HomeworldRecord>,
        fetched_at: DateTime<Utc>,
    ) -> CharacterRecord {
        CharacterRecord {
            name: self.name,
            height: self.height,
            mass: self.mass,
            birth_year: self.birth_year,
            homeworld,
            fetched_at,
            extra: self.extra,
        }
    }
}

/// Remote lookups the search service depends on
///
/// Kept behind a trait so tests can substitute a fake transport and count
/// calls.
#[async_trait]
pub trait CharacterApi {
    /// Searches characters by name on the first results page
    async fn search_people(&self, name: &str) -> Result<Vec<ApiCharacter>, ApiError>;

    /// Fetches the homeworld resource at the given URL
    async fn fetch_homeworld(&self, url: &str) -> Result<HomeworldRecord, ApiError>;
}

/// Client for the public swapi.dev API
#[derive(Debug, Clone)]
pub struct SwapiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL of the people endpoint (overridable for testing)
    base_url: String,
}

impl SwapiClient {
    /// Creates a client pointed at the public swapi.dev endpoint
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: PEOPLE_BASE_URL.to_string(),
        }
    }

    /// Creates a client with a custom people-endpoint base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterApi for SwapiClient {
    async fn search_people(&self, name: &str) -> Result<Vec<ApiCharacter>, ApiError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("search", name)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|err| ApiError::Malformed(err.to_string()))?;

        Ok(parsed.results)
    }

    async fn fetch_homeworld(&self, url: &str) -> Result<HomeworldRecord, ApiError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Malformed(err.to_string()))
    }
}
