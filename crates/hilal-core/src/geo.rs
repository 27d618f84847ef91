// ── Map-embed geometry ──
//
// Builds the static-map embed URL and per-masjid deep link around a
// selected point. The bounding box uses a flat degrees-per-km
// approximation (1° ≈ 111 km) with a 0.01° floor so tight radii still
// frame something visible. Visual framing only, never measurement.

use url::Url;

use crate::model::Coordinate;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";
const MAP_BASE: &str = "https://www.openstreetmap.org/";
const KM_PER_DEGREE: f64 = 111.0;
const MIN_HALF_WIDTH_DEG: f64 = 0.01;

/// A lat/lon-aligned bounding box, `left < right`, `bottom < top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    /// Square box around `center` with half-width
    /// `max(radius_km / 111, 0.01)` degrees.
    pub fn around(center: Coordinate, radius_km: f64) -> Self {
        let delta = (radius_km / KM_PER_DEGREE).max(MIN_HALF_WIDTH_DEG);
        Self {
            left: center.lon - delta,
            bottom: center.lat - delta,
            right: center.lon + delta,
            top: center.lat + delta,
        }
    }
}

/// Embeddable map view framing `radius_km` around `marker`.
pub fn embed_url(marker: Coordinate, radius_km: f64) -> Url {
    let bbox = BoundingBox::around(marker, radius_km);
    let mut url = Url::parse(EMBED_BASE).expect("embed base URL is valid");
    url.query_pairs_mut()
        .append_pair(
            "bbox",
            &format!(
                "{},{},{},{}",
                bbox.left, bbox.bottom, bbox.right, bbox.top
            ),
        )
        .append_pair("layer", "mapnik")
        .append_pair("marker", &format!("{},{}", marker.lat, marker.lon));
    url
}

/// Full-page map deep link for "open in maps".
pub fn map_link(marker: Coordinate) -> Url {
    let mut url = Url::parse(MAP_BASE).expect("map base URL is valid");
    url.query_pairs_mut()
        .append_pair("mlat", &marker.lat.to_string())
        .append_pair("mlon", &marker.lon.to_string());
    url.set_fragment(Some(&format!(
        "map=16/{}/{}",
        marker.lat, marker.lon
    )));
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CAIRO: Coordinate = Coordinate {
        lat: 30.0444,
        lon: 31.2357,
    };

    #[test]
    fn box_half_width_scales_with_radius() {
        let bbox = BoundingBox::around(CAIRO, 5.0);
        let delta = 5.0 / 111.0;
        assert!((bbox.top - CAIRO.lat - delta).abs() < 1e-9);
        assert!((CAIRO.lon - bbox.left - delta).abs() < 1e-9);
    }

    #[test]
    fn box_half_width_is_floored_for_tiny_radii() {
        let bbox = BoundingBox::around(CAIRO, 0.5);
        assert!((bbox.right - CAIRO.lon - 0.01).abs() < 1e-9);
    }

    #[test]
    fn embed_url_carries_bbox_layer_and_marker() {
        let url = embed_url(CAIRO, 5.0);
        assert_eq!(url.host_str(), Some("www.openstreetmap.org"));
        let query = url.query().unwrap();
        assert!(query.contains("bbox="));
        assert!(query.contains("layer=mapnik"));
        assert!(query.contains("marker=30.0444%2C31.2357"));
    }

    #[test]
    fn map_link_pins_marker_and_zoom() {
        let url = map_link(CAIRO);
        assert!(url.query().unwrap().contains("mlat=30.0444"));
        assert_eq!(url.fragment(), Some("map=16/30.0444/31.2357"));
    }
}
