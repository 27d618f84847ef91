// ── Canonical view state ──
//
// One immutable snapshot owned by the orchestrator and published through a
// watch channel. Every operation is a pure transition consuming the old
// snapshot and returning the next one; there are no scattered mutable
// fields. Invariants:
//
// - `timings` and `location` are always set together, and `selected_date`
//   is always the date of the last successful timings fetch.
// - `calendar` only ever holds entries for the current `location`; a new
//   successful search clears it and collapses the calendar view.
// - Each flow (timings, calendar, masjids) owns its loading flag and error
//   message; a failure in one never touches another.

use chrono::NaiveDate;
use url::Url;

use crate::geo;
use crate::model::{CalendarEntry, Coordinate, Location, Masjid, Prayer, PrayerTimings};

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    // ── Timings flow ─────────────────────────────────────────────────
    pub location: Option<Location>,
    pub selected_date: NaiveDate,
    pub timings: Option<PrayerTimings>,
    pub hijri_year: Option<i32>,
    pub loading_timings: bool,
    pub timings_error: Option<String>,

    // ── Calendar flow ────────────────────────────────────────────────
    pub calendar: Vec<CalendarEntry>,
    pub calendar_open: bool,
    pub loading_calendar: bool,
    pub calendar_error: Option<String>,

    // ── Places flow ──────────────────────────────────────────────────
    pub masjids: Vec<Masjid>,
    pub selected_masjid_id: Option<String>,
    pub radius_km: u32,
    pub user_location: Option<Coordinate>,
    pub loading_masjids: bool,
    pub masjid_error: Option<String>,
}

impl AppState {
    pub fn new(today: NaiveDate, radius_km: u32) -> Self {
        Self {
            location: None,
            selected_date: today,
            timings: None,
            hijri_year: None,
            loading_timings: false,
            timings_error: None,
            calendar: Vec::new(),
            calendar_open: false,
            loading_calendar: false,
            calendar_error: None,
            masjids: Vec::new(),
            selected_masjid_id: None,
            radius_km,
            user_location: None,
            loading_masjids: false,
            masjid_error: None,
        }
    }

    // ── Timings transitions ──────────────────────────────────────────

    pub fn timings_loading(mut self) -> Self {
        self.loading_timings = true;
        self.timings_error = None;
        self
    }

    /// Apply a successful fetch: timings, location, Hijri year, and date
    /// land together, and any calendar for the previous month/location is
    /// dropped along with its view.
    pub fn search_succeeded(
        mut self,
        location: Location,
        date: NaiveDate,
        timings: PrayerTimings,
        hijri_year: i32,
    ) -> Self {
        self.location = Some(location);
        self.selected_date = date;
        self.timings = Some(timings);
        self.hijri_year = Some(hijri_year);
        self.loading_timings = false;
        self.timings_error = None;
        self.calendar = Vec::new();
        self.calendar_open = false;
        self.calendar_error = None;
        self
    }

    /// A failed fetch leaves prior data untouched; only the error message
    /// and loading flag move.
    pub fn search_failed(mut self, message: impl Into<String>) -> Self {
        self.loading_timings = false;
        self.timings_error = Some(message.into());
        self
    }

    // ── Calendar transitions ─────────────────────────────────────────

    pub fn calendar_loading(mut self) -> Self {
        self.loading_calendar = true;
        self.calendar_error = None;
        self
    }

    pub fn calendar_loaded(mut self, entries: Vec<CalendarEntry>) -> Self {
        self.calendar = entries;
        self.loading_calendar = false;
        self.calendar_error = None;
        self
    }

    pub fn calendar_failed(mut self, message: impl Into<String>) -> Self {
        self.loading_calendar = false;
        self.calendar_error = Some(message.into());
        self
    }

    pub fn calendar_toggled(mut self, open: bool) -> Self {
        self.calendar_open = open;
        self
    }

    // ── Places transitions ───────────────────────────────────────────

    pub fn masjids_loading(mut self) -> Self {
        self.loading_masjids = true;
        self.masjid_error = None;
        self
    }

    /// Apply a new result set; selection defaults to the first result.
    pub fn masjids_loaded(mut self, masjids: Vec<Masjid>, position: Coordinate) -> Self {
        self.selected_masjid_id = masjids.first().map(|m| m.id.clone());
        self.masjids = masjids;
        self.user_location = Some(position);
        self.loading_masjids = false;
        self.masjid_error = None;
        self
    }

    pub fn masjids_failed(mut self, message: impl Into<String>) -> Self {
        self.loading_masjids = false;
        self.masjid_error = Some(message.into());
        self
    }

    pub fn masjid_selected(mut self, id: impl Into<String>) -> Self {
        self.selected_masjid_id = Some(id.into());
        self
    }

    pub fn radius_changed(mut self, radius_km: u32) -> Self {
        self.radius_km = radius_km;
        self
    }

    // ── Derived values ───────────────────────────────────────────────

    /// Whether the selected date is the given "today".
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.selected_date == today
    }

    /// Human-readable selected date, e.g. `"Sunday, Mar 1"`.
    pub fn display_date(&self) -> String {
        self.selected_date.format("%A, %b %-d").to_string()
    }

    /// The Iftar countdown target for the fetched day, when parseable.
    pub fn iftar_target(&self) -> Option<chrono::NaiveTime> {
        self.timings.as_ref()?.clock_time(Prayer::Maghrib)
    }

    /// The selected masjid, falling back to the first result.
    pub fn selected_masjid(&self) -> Option<&Masjid> {
        self.selected_masjid_id
            .as_ref()
            .and_then(|id| self.masjids.iter().find(|m| &m.id == id))
            .or_else(|| self.masjids.first())
    }

    /// Embed-map URL framing the selected masjid at the current radius.
    pub fn map_embed(&self) -> Option<Url> {
        let masjid = self.selected_masjid()?;
        Some(geo::embed_url(
            Coordinate {
                lat: masjid.lat,
                lon: masjid.lon,
            },
            f64::from(self.radius_km),
        ))
    }
}
