//! SWAPI client for character and homeworld lookups
//!
//! The `CharacterApi` trait is the seam between the search service and the
//! network; `SwapiClient` is the real implementation, tests substitute fakes.

mod swapi;

pub use swapi::{ApiCharacter, ApiError, CharacterApi, SwapiClient};
