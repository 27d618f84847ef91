// Hand-crafted async HTTP client for the Overpass interpreter.
//
// Queries are Overpass QL submitted as a raw POST body to /api/interpreter.

use tracing::debug;
use url::Url;

use super::types::QueryResponse;
use crate::Error;

const SERVICE: &str = "overpass";

/// Async client for the Overpass API.
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OverpassClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = crate::transport::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch places of worship tagged `religion=muslim` within
    /// `radius_meters` of the given point.
    ///
    /// Matches nodes, ways, and relations; area features carry a computed
    /// centroid (`out center`). At most `limit` results.
    pub async fn places_of_worship_around(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
        limit: u32,
    ) -> Result<QueryResponse, Error> {
        self.run(&worship_query(lat, lon, radius_meters, limit)).await
    }

    /// Submit a raw Overpass QL query.
    pub async fn run(&self, query: &str) -> Result<QueryResponse, Error> {
        let url = self
            .base_url
            .join("api/interpreter")
            .expect("path should be valid relative URL");
        debug!("POST {url} ({} byte query)", query.len());

        let resp = self.http.post(url).body(query.to_owned()).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Upstream {
                service: SERVICE,
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body[..body.len().min(200)].to_owned()
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Build the Overpass QL radius query for Muslim places of worship.
fn worship_query(lat: f64, lon: f64, radius_meters: u32, limit: u32) -> String {
    format!(
        r#"[out:json];
(
  node["amenity"="place_of_worship"]["religion"="muslim"](around:{radius_meters},{lat},{lon});
  way["amenity"="place_of_worship"]["religion"="muslim"](around:{radius_meters},{lat},{lon});
  relation["amenity"="place_of_worship"]["religion"="muslim"](around:{radius_meters},{lat},{lon});
);
out center {limit};
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_includes_radius_and_point() {
        let q = worship_query(30.05, 31.23, 5000, 40);
        assert!(q.contains("around:5000,30.05,31.23"));
        assert!(q.contains("out center 40;"));
        assert!(q.contains(r#"node["amenity"="place_of_worship"]["religion"="muslim"]"#));
        assert!(q.contains("relation["));
    }
}
