// ── Location domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved (city, country) pair.
///
/// Immutable once resolved; a new search replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// One autocomplete candidate offered by the city resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCandidate {
    pub city: String,
    pub country: String,
}

impl CityCandidate {
    /// Dedup key: both fields concatenated. Two candidates with the same
    /// key are the same place as far as the suggestion list is concerned.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.city, self.country)
    }
}

impl From<CityCandidate> for Location {
    fn from(candidate: CityCandidate) -> Self {
        Self {
            city: candidate.city,
            country: candidate.country,
        }
    }
}

/// A geographic coordinate, last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_joins_both_fields() {
        let candidate = CityCandidate {
            city: "London".into(),
            country: "United Kingdom".into(),
        };
        assert_eq!(candidate.dedup_key(), "London-United Kingdom");
    }

    #[test]
    fn coordinate_display_rounds_to_three_places() {
        let coord = Coordinate {
            lat: 30.04442,
            lon: 31.23571,
        };
        assert_eq!(coord.to_string(), "30.044, 31.236");
    }
}
