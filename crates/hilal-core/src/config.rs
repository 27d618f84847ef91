// ── Application configuration ──
//
// Defaults cover the public upstream endpoints; a TOML file and
// `HILAL_`-prefixed environment variables layer on top. Pointing the
// endpoint URLs at a local mock is how the test suites exercise full
// flows without the network.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All knobs for the workspace: upstream endpoints plus tuning values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// AlAdhan base URL (timings + Hijri calendar).
    pub aladhan_url: String,
    /// Nominatim base URL (geocoding search).
    pub nominatim_url: String,
    /// Overpass base URL (places query).
    pub overpass_url: String,

    /// AlAdhan calculation method.
    pub method: u8,
    /// Hijri month fetched by the calendar view (9 = Ramadan).
    pub ramadan_month: u32,

    /// Quiescence window before a suggestion lookup fires.
    pub debounce_ms: u64,
    /// Maximum geocoding candidates requested per lookup.
    pub suggestion_limit: u32,

    /// Maximum places returned by a nearby-masjids query.
    pub places_limit: u32,
    /// Radius choices offered to the user, in kilometers.
    pub radius_presets_km: Vec<u32>,
    /// Initially selected radius.
    pub default_radius_km: u32,

    /// HTTP timeout for all upstream requests.
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aladhan_url: "https://api.aladhan.com".to_owned(),
            nominatim_url: "https://nominatim.openstreetmap.org".to_owned(),
            overpass_url: "https://overpass-api.de".to_owned(),
            method: 2,
            ramadan_month: 9,
            debounce_ms: 500,
            suggestion_limit: 10,
            places_limit: 40,
            radius_presets_km: vec![2, 5, 10, 15],
            default_radius_km: 5,
            http_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load from the default config path (if present) and the environment.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_layered(default_config_path().as_deref())
    }

    /// Load with an explicit config file path layered over defaults.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        Self::load_layered(Some(path))
    }

    fn load_layered(path: Option<&Path>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed("HILAL_"))
            .extract()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Transport settings for the shared HTTP clients.
    pub fn transport(&self) -> hilal_api::TransportConfig {
        hilal_api::TransportConfig {
            timeout: Duration::from_secs(self.http_timeout_secs),
            ..hilal_api::TransportConfig::default()
        }
    }

    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// `~/.config/hilal/config.toml` (platform-appropriate).
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "hilal")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
