// Shared transport configuration for building reqwest::Client instances.
//
// All three upstream clients share timeout and user-agent settings through
// this module, avoiding duplicated builder logic.

use std::time::Duration;

const USER_AGENT: &str = concat!("hilal/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
///
/// The user agent is not just cosmetic: Nominatim's usage policy requires
/// a descriptive agent identifying the application.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(crate::error::Error::Transport)
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by the Nominatim client to pin `Accept: application/json`.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}

/// Ensure a base URL ends with a trailing slash so relative joins work
/// uniformly across all three clients.
pub(crate) fn normalize_base_url(raw: &str) -> Result<url::Url, url::ParseError> {
    let mut url = url::Url::parse(raw)?;
    let path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{path}/"));
    Ok(url)
}
