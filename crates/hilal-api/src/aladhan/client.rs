// Hand-crafted async HTTP client for the AlAdhan prayer-timings API.
//
// Base path: /v1/
// No auth; responses use a `{code, status, data}` envelope.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{DayEntry, Envelope};
use crate::Error;

const SERVICE: &str = "aladhan";

/// Async client for the AlAdhan API.
///
/// Communicates via JSON GET endpoints under `/v1/`. The envelope `code`
/// is authoritative: the service reports errors inside an HTTP 200 body,
/// so both the HTTP status and the envelope are checked.
pub struct AladhanClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AladhanClient {
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

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"v1/timingsByCity"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `v1/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request plumbing ─────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    /// Check HTTP status, then the envelope code, then decode `data`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
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

        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        // Failures arrive as `{code: 404, status: "NOT FOUND", data: "..."}`
        // under HTTP 200, so the envelope code wins.
        if envelope.code != 200 {
            let message = envelope
                .data
                .as_str()
                .map(str::to_owned)
                .or(envelope.status)
                .unwrap_or_else(|| format!("code={}", envelope.code));
            return Err(Error::Upstream {
                service: SERVICE,
                status: envelope.code,
                message,
            });
        }

        serde_json::from_value(envelope.data).map_err(|e| Error::Deserialization {
            message: format!("{e} (in envelope data)"),
            body,
        })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch one day's prayer timings for a city.
    ///
    /// The date is sent as zero-padded `DD-MM-YYYY`.
    pub async fn timings_by_city(
        &self,
        city: &str,
        country: &str,
        method: u8,
        date: NaiveDate,
    ) -> Result<DayEntry, Error> {
        self.get_with_params(
            "v1/timingsByCity",
            &[
                ("city", city.to_owned()),
                ("country", country.to_owned()),
                ("method", method.to_string()),
                ("date", date.format("%d-%m-%Y").to_string()),
            ],
        )
        .await
    }

    /// Fetch a full Hijri month's schedule for a city.
    ///
    /// Entries come back in upstream order, one per day of the month.
    pub async fn hijri_calendar_by_city(
        &self,
        city: &str,
        country: &str,
        method: u8,
        month: u32,
        year: i32,
    ) -> Result<Vec<DayEntry>, Error> {
        self.get_with_params(
            "v1/hijriCalendarByCity",
            &[
                ("city", city.to_owned()),
                ("country", country.to_owned()),
                ("method", method.to_string()),
                ("month", month.to_string()),
                ("year", year.to_string()),
            ],
        )
        .await
    }
}
