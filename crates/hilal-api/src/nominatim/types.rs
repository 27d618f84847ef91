// Response types for the Nominatim search API.

use serde::Deserialize;

/// One geocoding candidate from `/search`.
///
/// Only the fields the app consumes are modeled; everything else in the
/// (large) Nominatim payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// The `addressdetails=1` breakdown. Settlements surface as exactly one of
/// `city`, `town`, or `village` depending on OSM classification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl SearchResult {
    /// The best available settlement name: city, town, village, then the
    /// feature's own name.
    pub fn settlement(&self) -> Option<&str> {
        let addr = self.address.as_ref();
        addr.and_then(|a| a.city.as_deref())
            .or_else(|| addr.and_then(|a| a.town.as_deref()))
            .or_else(|| addr.and_then(|a| a.village.as_deref()))
            .or(self.name.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn country(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|a| a.country.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn settlement_prefers_city_over_name() {
        let result: SearchResult = serde_json::from_value(serde_json::json!({
            "name": "Greater London",
            "address": {"city": "London", "country": "United Kingdom"}
        }))
        .unwrap();
        assert_eq!(result.settlement(), Some("London"));
    }

    #[test]
    fn settlement_falls_back_through_town_and_village() {
        let result: SearchResult = serde_json::from_value(serde_json::json!({
            "address": {"village": "Grindleford", "country": "United Kingdom"}
        }))
        .unwrap();
        assert_eq!(result.settlement(), Some("Grindleford"));
    }

    #[test]
    fn missing_address_uses_feature_name() {
        let result: SearchResult = serde_json::from_value(serde_json::json!({
            "name": "Cairo"
        }))
        .unwrap();
        assert_eq!(result.settlement(), Some("Cairo"));
        assert_eq!(result.country(), None);
    }
}
