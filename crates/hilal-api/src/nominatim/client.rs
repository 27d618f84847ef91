// Hand-crafted async HTTP client for the Nominatim geocoding API.
//
// Free-text search only. Nominatim's usage policy requires a descriptive
// User-Agent, which the shared transport config supplies.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use super::types::SearchResult;
use crate::Error;

const SERVICE: &str = "nominatim";

/// Async client for Nominatim's `/search` endpoint.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NominatimClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    ///
    /// Pins `Accept: application/json` as a default header on every request.
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = crate::transport::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Free-text search with address detail, returning up to `limit`
    /// candidates in upstream ranking order.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, Error> {
        let url = self
            .base_url
            .join("search")
            .expect("path should be valid relative URL");
        debug!("GET {url} q={query:?} limit={limit}");

        let resp = self
            .http
            .get(url)
            .query(&[
                ("format", "json".to_owned()),
                ("q", query.to_owned()),
                ("addressdetails", "1".to_owned()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

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
