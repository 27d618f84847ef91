// Response types for the Overpass interpreter.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level interpreter response: a flat list of matched map features.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// One raw map feature (node, way, or relation).
///
/// Nodes carry `lat`/`lon` directly; ways and relations only carry a
/// `center` when the query asked for one (`out center`).
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Element {
    /// Resolve the feature's coordinate: direct lat/lon for nodes, the
    /// computed centroid for area features. `None` means the feature is
    /// unusable and should be filtered out.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
