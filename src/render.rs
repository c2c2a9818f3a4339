//! Text rendering for characters, homeworlds, and search history
//!
//! All functions here are pure string formatting; `main` decides where the
//! output goes. Field order and separators are part of the CLI contract.

use std::fmt::Write;

use crate::data::{CharacterRecord, HistoryEntry, HomeworldRecord};

/// Printed when a search yields no characters
pub const NO_MATCH_MESSAGE: &str = "The Force is not strong enough within you";

/// Printed by `cache history` when the log is empty
pub const NO_HISTORY_MESSAGE: &str = "No search history available.";

/// Fixed-width separator between text blocks
fn separator() -> String {
    "-".repeat(30)
}

/// Rounds to two decimal places, half away from zero
///
/// `round2(687.0 / 365.0)` is `1.88`; `round2(24.0 / 24.0)` is `1.0`,
/// rendered as `1` by `Display`.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a character as a fixed text block
pub fn render_character(record: &CharacterRecord) -> String {
    let mut out = String::new();
    writeln!(out, "{}", separator()).unwrap();
    writeln!(out, "Name: {}", record.name).unwrap();
    writeln!(out, "Height: {}", record.height).unwrap();
    writeln!(out, "Mass: {}", record.mass).unwrap();
    writeln!(out, "Birth Year: {}", record.birth_year).unwrap();
    writeln!(out).unwrap();
    write!(out, "Cached: {}", record.fetched_at.to_rfc3339()).unwrap();
    out
}

/// Formats a homeworld block, deriving earth-relative period lengths
///
/// Population and the two periods arrive as strings that may be the
/// sentinel "unknown"; anything that does not parse as an integer falls
/// back to the unknown wording.
pub fn render_homeworld(homeworld: &HomeworldRecord) -> String {
    let mut out = String::new();
    writeln!(out, "Homeworld").unwrap();
    writeln!(out, "{}", separator()).unwrap();
    writeln!(out, "Name: {}", homeworld.name).unwrap();

    match homeworld.population.parse::<i64>() {
        Ok(population) => writeln!(out, "Population: {}", population).unwrap(),
        Err(_) => writeln!(out, "Population: Unknown").unwrap(),
    }

    match (
        homeworld.orbital_period.parse::<i64>(),
        homeworld.rotation_period.parse::<i64>(),
    ) {
        (Ok(orbital), Ok(rotation)) => {
            let years = round2(orbital as f64 / 365.0);
            let days = round2(rotation as f64 / 24.0);
            write!(
                out,
                "On {}, 1 year on earth is {} and 1 day on earth is {}",
                homeworld.name, years, days
            )
            .unwrap();
        }
        _ => {
            write!(
                out,
                "On {}, the orbital period and the rotation period are unknown",
                homeworld.name
            )
            .unwrap();
        }
    }
    out
}

/// Formats the full search history, oldest entry first
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return NO_HISTORY_MESSAGE.to_string();
    }

    let mut out = String::new();
    writeln!(out, "Search History:").unwrap();
    writeln!(out, "{}", separator()).unwrap();
    for entry in entries {
        writeln!(out, "Query: {}", entry.query).unwrap();
        writeln!(out, "Time: {}", entry.timestamp.format("%Y-%m-%d %H:%M:%S")).unwrap();
        let results = if entry.results.is_empty() {
            "No matches found".to_string()
        } else {
            entry.results.join(", ")
        };
        writeln!(out, "Results: {}", results).unwrap();
        writeln!(out, "{}", separator()).unwrap();
    }
    out.pop(); // drop the trailing newline
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Map;

    fn sample_homeworld() -> HomeworldRecord {
        HomeworldRecord {
            name: "Tatooine".to_string(),
            population: "200000".to_string(),
            orbital_period: "304".to_string(),
            rotation_period: "23".to_string(),
        }
    }

    #[test]
    fn test_render_character_block() {
        let record = CharacterRecord {
            name: "Luke Skywalker".to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            birth_year: "19BBY".to_string(),
            homeworld: None,
            fetched_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            extra: Map::new(),
        };

        let rendered = render_character(&record);

        assert_eq!(
            rendered,
            "------------------------------\n\
             Name: Luke Skywalker\n\
             Height: 172\n\
             Mass: 77\n\
             Birth Year: 19BBY\n\
             \n\
             Cached: 2024-01-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_render_homeworld_with_numeric_fields() {
        let rendered = render_homeworld(&sample_homeworld());

        assert!(rendered.starts_with("Homeworld\n------------------------------\n"));
        assert!(rendered.contains("Name: Tatooine"));
        assert!(rendered.contains("Population: 200000"));
        // 304/365 = 0.83, 23/24 = 0.96
        assert!(rendered
            .contains("On Tatooine, 1 year on earth is 0.83 and 1 day on earth is 0.96"));
    }

    #[test]
    fn test_render_homeworld_mars_like_periods() {
        let mut homeworld = sample_homeworld();
        homeworld.orbital_period = "687".to_string();
        homeworld.rotation_period = "24".to_string();

        let rendered = render_homeworld(&homeworld);

        assert!(rendered.contains("1.88"), "687/365 rounds to 1.88");
        assert!(
            rendered.contains("1 day on earth is 1"),
            "24/24 renders as 1: {rendered}"
        );
    }

    #[test]
    fn test_render_homeworld_unknown_population() {
        let mut homeworld = sample_homeworld();
        homeworld.population = "unknown".to_string();

        let rendered = render_homeworld(&homeworld);

        assert!(rendered.contains("Population: Unknown"));
    }

    #[test]
    fn test_render_homeworld_unknown_periods() {
        let homeworld = HomeworldRecord {
            name: "unknown".to_string(),
            population: "unknown".to_string(),
            orbital_period: "unknown".to_string(),
            rotation_period: "unknown".to_string(),
        };

        let rendered = render_homeworld(&homeworld);

        assert!(rendered.contains("Population: Unknown"));
        assert!(rendered
            .contains("On unknown, the orbital period and the rotation period are unknown"));
    }

    #[test]
    fn test_render_homeworld_one_unparseable_period_falls_back() {
        let mut homeworld = sample_homeworld();
        homeworld.rotation_period = "unknown".to_string();

        let rendered = render_homeworld(&homeworld);

        assert!(rendered.contains("the orbital period and the rotation period are unknown"));
    }

    #[test]
    fn test_round2_examples() {
        assert_eq!(round2(687.0 / 365.0), 1.88);
        assert_eq!(round2(24.0 / 24.0), 1.0);
        assert_eq!(round2(304.0 / 365.0), 0.83);
    }

    #[test]
    fn test_render_history_empty() {
        assert_eq!(render_history(&[]), NO_HISTORY_MESSAGE);
    }

    #[test]
    fn test_render_history_entries() {
        let entries = vec![
            HistoryEntry {
                query: "luke".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                results: vec!["Luke Skywalker".to_string(), "Luke Lars".to_string()],
            },
            HistoryEntry {
                query: "wedge".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 11, 30, 5).unwrap(),
                results: vec![],
            },
        ];

        let rendered = render_history(&entries);

        assert_eq!(
            rendered,
            "Search History:\n\
             ------------------------------\n\
             Query: luke\n\
             Time: 2024-01-01 10:00:00\n\
             Results: Luke Skywalker, Luke Lars\n\
             ------------------------------\n\
             Query: wedge\n\
             Time: 2024-01-02 11:30:05\n\
             Results: No matches found\n\
             ------------------------------"
        );
    }
}
