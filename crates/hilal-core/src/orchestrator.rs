// ── Orchestrator ──
//
// Central façade owning the canonical AppState snapshot and the upstream
// clients. Operations fetch first and apply a pure state transition on
// success, so a failure can never leave partial state behind. Snapshots
// are published through a watch channel for whatever renders them.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use hilal_api::{AladhanClient, NominatimClient, OverpassClient};

use crate::config::AppConfig;
use crate::countdown::Countdown;
use crate::error::CoreError;
use crate::locate::{LocateError, LocatePosition};
use crate::model::{Location, Masjid, PrayerTimings};
use crate::resolver::{CityResolver, NominatimSource};
use crate::state::AppState;

/// Inline messages surfaced in the state, one per failure class.
pub mod messages {
    pub const TIMINGS_FAILED: &str = "Could not fetch timings. Please try again.";
    pub const CALENDAR_FAILED: &str = "Could not load the Ramadan calendar. Please try again.";
    pub const MASJIDS_FAILED: &str = "Could not load nearby masjids. Please try again.";
    pub const MASJIDS_EMPTY: &str = "No masjids found nearby. Try increasing the radius.";
    pub const GEO_UNSUPPORTED: &str = "Geolocation is not available in this environment.";
    pub const GEO_DENIED: &str = "Location permission denied. Please allow location access.";
    pub const GEO_UNAVAILABLE: &str = "Could not determine your location.";
}

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Owns the AlAdhan and Overpass clients and
/// the canonical state; the city resolver runs as an independent flow and
/// is vended separately.
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<Inner>,
}

struct Inner {
    aladhan: AladhanClient,
    overpass: OverpassClient,
    config: AppConfig,
    state: watch::Sender<Arc<AppState>>,
}

impl Orchestrator {
    /// Build clients from configuration. Performs no I/O.
    pub fn from_config(config: AppConfig) -> Result<Self, CoreError> {
        let transport = config.transport();
        let aladhan = AladhanClient::new(&config.aladhan_url, &transport)?;
        let overpass = OverpassClient::new(&config.overpass_url, &transport)?;
        Ok(Self::with_clients(config, aladhan, overpass))
    }

    /// Assemble from pre-built clients (tests point these at a mock server).
    pub fn with_clients(
        config: AppConfig,
        aladhan: AladhanClient,
        overpass: OverpassClient,
    ) -> Self {
        let initial = AppState::new(Local::now().date_naive(), config.default_radius_km);
        let (state, _) = watch::channel(Arc::new(initial));
        Self {
            inner: Arc::new(Inner {
                aladhan,
                overpass,
                config,
                state,
            }),
        }
    }

    /// Access the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    // ── State observation ────────────────────────────────────────────

    /// The current state snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.inner.state.subscribe()
    }

    /// Whether the selected date is today's date.
    pub fn is_today(&self) -> bool {
        self.snapshot().is_today(Local::now().date_naive())
    }

    fn update(&self, transition: impl FnOnce(AppState) -> AppState) {
        self.inner.state.send_modify(|current| {
            let next = transition((**current).clone());
            *current = Arc::new(next);
        });
    }

    // ── City resolver (independent flow) ─────────────────────────────

    /// Build a debounced resolver backed by Nominatim, configured from
    /// this orchestrator's settings.
    pub fn city_resolver(&self) -> Result<CityResolver<NominatimSource>, CoreError> {
        let client = NominatimClient::new(
            &self.inner.config.nominatim_url,
            &self.inner.config.transport(),
        )?;
        Ok(CityResolver::new(
            NominatimSource::new(client),
            self.inner.config.debounce(),
            self.inner.config.suggestion_limit,
        ))
    }

    // ── Timings flow ─────────────────────────────────────────────────

    /// Search for a location's timings on today's date.
    pub async fn search(&self, city: &str, country: &str) {
        self.search_on(city, country, Local::now().date_naive()).await;
    }

    /// Search for a location's timings on an explicit date.
    ///
    /// On success, timings/location/Hijri-year/date land atomically and
    /// any calendar for the previous location is dropped. On failure the
    /// prior snapshot survives with only an error message added.
    pub async fn search_on(&self, city: &str, country: &str, date: NaiveDate) {
        self.update(AppState::timings_loading);

        let result = self
            .inner
            .aladhan
            .timings_by_city(city, country, self.inner.config.method, date)
            .await;

        match result {
            Ok(day) => {
                let location = Location::new(city, country);
                let timings = PrayerTimings::new(day.timings);
                let hijri_year = day.date.hijri.year;
                info!(%location, %date, hijri_year, "timings fetched");
                self.update(move |s| s.search_succeeded(location, date, timings, hijri_year));
            }
            Err(e) => {
                warn!(error = %e, city, country, "timings fetch failed");
                self.update(|s| s.search_failed(messages::TIMINGS_FAILED));
            }
        }
    }

    /// Move the selected date by `delta` days and re-fetch.
    ///
    /// No-op until a search has succeeded (there is nothing to shift).
    pub async fn shift_day(&self, delta: i64) {
        let snapshot = self.snapshot();
        let Some(location) = snapshot.location.clone() else {
            debug!("shift_day ignored: no resolved location");
            return;
        };
        if snapshot.timings.is_none() {
            debug!("shift_day ignored: no timings loaded");
            return;
        }
        let Some(next_date) = snapshot
            .selected_date
            .checked_add_signed(chrono::Duration::days(delta))
        else {
            warn!(delta, "shift_day ignored: date out of range");
            return;
        };

        self.search_on(&location.city, &location.country, next_date)
            .await;
    }

    // ── Calendar flow ────────────────────────────────────────────────

    /// Toggle the calendar view; the first expansion per location loads
    /// the Ramadan month (the result is cached until the location changes).
    pub async fn toggle_calendar(&self) {
        let open = !self.snapshot().calendar_open;
        self.update(move |s| s.calendar_toggled(open));

        if open && self.snapshot().calendar.is_empty() {
            self.load_calendar().await;
        }
    }

    /// Fetch the Ramadan month for the resolved location and Hijri year.
    ///
    /// No-op until both are present.
    pub async fn load_calendar(&self) {
        let snapshot = self.snapshot();
        let (Some(location), Some(year)) = (snapshot.location.clone(), snapshot.hijri_year)
        else {
            debug!("load_calendar ignored: location or hijri year unresolved");
            return;
        };

        self.update(AppState::calendar_loading);

        let result = self
            .inner
            .aladhan
            .hijri_calendar_by_city(
                &location.city,
                &location.country,
                self.inner.config.method,
                self.inner.config.ramadan_month,
                year,
            )
            .await;

        match result {
            Ok(days) => {
                let entries = days.into_iter().map(Into::into).collect::<Vec<_>>();
                info!(%location, year, count = entries.len(), "calendar loaded");
                self.update(move |s| s.calendar_loaded(entries));
            }
            Err(e) => {
                warn!(error = %e, %location, "calendar fetch failed");
                self.update(|s| s.calendar_failed(messages::CALENDAR_FAILED));
            }
        }
    }

    // ── Places flow ──────────────────────────────────────────────────

    /// Locate the device and fetch nearby masjids at the current radius.
    ///
    /// Geolocation failures, upstream failures, and empty result sets each
    /// surface their own message; none of them touches the other flows.
    pub async fn find_masjids(&self, locator: &impl LocatePosition) {
        self.update(AppState::masjids_loading);

        let position = match locator.current_position().await {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "geolocation failed");
                let message = match e {
                    LocateError::Unsupported => messages::GEO_UNSUPPORTED,
                    LocateError::PermissionDenied => messages::GEO_DENIED,
                    LocateError::Unavailable(_) => messages::GEO_UNAVAILABLE,
                };
                self.update(|s| s.masjids_failed(message));
                return;
            }
        };

        let radius_meters = self.snapshot().radius_km * 1000;
        let result = self
            .inner
            .overpass
            .places_of_worship_around(
                position.lat,
                position.lon,
                radius_meters,
                self.inner.config.places_limit,
            )
            .await;

        match result {
            Ok(resp) => {
                let masjids = Masjid::from_elements(&resp.elements);
                info!(
                    found = masjids.len(),
                    raw = resp.elements.len(),
                    radius_meters,
                    "nearby masjids fetched"
                );
                let empty = masjids.is_empty();
                self.update(move |s| s.masjids_loaded(masjids, position));
                if empty {
                    self.update(|s| s.masjids_failed(messages::MASJIDS_EMPTY));
                }
            }
            Err(e) => {
                warn!(error = %e, "overpass fetch failed");
                self.update(|s| s.masjids_failed(messages::MASJIDS_FAILED));
            }
        }
    }

    /// Select a masjid from the current result set.
    pub fn select_masjid(&self, id: &str) {
        let id = id.to_owned();
        self.update(move |s| s.masjid_selected(id));
    }

    /// Change the search radius for subsequent queries.
    pub fn set_radius(&self, radius_km: u32) {
        self.update(move |s| s.radius_changed(radius_km));
    }

    // ── Countdown ────────────────────────────────────────────────────

    /// Arm the Iftar countdown for the fetched day.
    ///
    /// Only meaningful when the selected date is today and a Maghrib time
    /// is present; the caller owns the handle and drops it (tearing the
    /// timer down) when the target changes or the view goes away.
    pub fn iftar_countdown(&self) -> Option<Countdown> {
        let snapshot = self.snapshot();
        if !snapshot.is_today(Local::now().date_naive()) {
            return None;
        }
        snapshot.iftar_target().map(Countdown::start)
    }
}
