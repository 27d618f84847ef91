// ── Nearby masjid domain type ──

use serde::{Deserialize, Serialize};

use hilal_api::overpass::types::Element;

/// A nearby place of worship, normalized from a raw map feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Masjid {
    /// Composite key `"{element_type}-{element_id}"` (e.g. `"node-1234"`).
    /// Unique across feature kinds; coordinates are NOT deduplicated.
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Best-effort street address; empty when the feature carries no
    /// address tags.
    pub address: String,
}

impl Masjid {
    /// Normalize one raw feature. Returns `None` when the feature has no
    /// resolvable coordinate (neither lat/lon nor a centroid) — such
    /// entries are silently filtered per the error-handling policy.
    pub fn from_element(element: &Element) -> Option<Self> {
        let (lat, lon) = element.coordinate()?;
        Some(Self {
            id: format!("{}-{}", element.kind, element.id),
            name: element
                .tag("name")
                .filter(|n| !n.is_empty())
                .unwrap_or("Masjid")
                .to_owned(),
            lat,
            lon,
            address: address_from_tags(element),
        })
    }

    /// Normalize a whole result set, dropping unusable features and
    /// keeping upstream order.
    pub fn from_elements(elements: &[Element]) -> Vec<Self> {
        elements.iter().filter_map(Self::from_element).collect()
    }
}

/// `addr:full` wins; otherwise join house number, street, and city.
fn address_from_tags(element: &Element) -> String {
    if let Some(full) = element.tag("addr:full") {
        return full.to_owned();
    }
    ["addr:housenumber", "addr:street", "addr:city"]
        .iter()
        .filter_map(|key| element.tag(key))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn element(value: serde_json::Value) -> Element {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn node_normalizes_with_composite_id() {
        let masjid = Masjid::from_element(&element(serde_json::json!({
            "type": "node", "id": 1234, "lat": 30.05, "lon": 31.23,
            "tags": { "name": "Masjid An-Nour" }
        })))
        .unwrap();

        assert_eq!(masjid.id, "node-1234");
        assert_eq!(masjid.name, "Masjid An-Nour");
    }

    #[test]
    fn nameless_feature_gets_default_name() {
        let masjid = Masjid::from_element(&element(serde_json::json!({
            "type": "way", "id": 9, "center": { "lat": 1.0, "lon": 2.0 }
        })))
        .unwrap();

        assert_eq!(masjid.name, "Masjid");
        assert_eq!(masjid.address, "");
    }

    #[test]
    fn coordinate_less_feature_is_dropped() {
        let elements = vec![
            element(serde_json::json!({
                "type": "node", "id": 1, "lat": 1.0, "lon": 1.0
            })),
            element(serde_json::json!({ "type": "relation", "id": 2 })),
        ];

        let masjids = Masjid::from_elements(&elements);
        assert_eq!(masjids.len(), 1);
        assert_eq!(masjids[0].id, "node-1");
    }

    #[test]
    fn identical_coordinates_both_survive() {
        // Only coordinate presence is filtered; two features sharing a
        // point are distinct results.
        let elements = vec![
            element(serde_json::json!({
                "type": "node", "id": 1, "lat": 1.0, "lon": 1.0
            })),
            element(serde_json::json!({
                "type": "node", "id": 2, "lat": 1.0, "lon": 1.0
            })),
        ];

        assert_eq!(Masjid::from_elements(&elements).len(), 2);
    }

    #[test]
    fn address_joins_parts_when_no_full_tag() {
        let masjid = Masjid::from_element(&element(serde_json::json!({
            "type": "node", "id": 5, "lat": 0.0, "lon": 0.0,
            "tags": {
                "addr:housenumber": "12",
                "addr:street": "High St",
                "addr:city": "Leeds"
            }
        })))
        .unwrap();

        assert_eq!(masjid.address, "12 High St Leeds");
    }

    #[test]
    fn addr_full_takes_precedence() {
        let masjid = Masjid::from_element(&element(serde_json::json!({
            "type": "node", "id": 5, "lat": 0.0, "lon": 0.0,
            "tags": { "addr:full": "12 High St, Leeds", "addr:street": "Ignored" }
        })))
        .unwrap();

        assert_eq!(masjid.address, "12 High St, Leeds");
    }
}
