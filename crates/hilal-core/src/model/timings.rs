// ── Prayer timings domain types ──

use chrono::NaiveTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The prayer names the app works with directly.
///
/// The upstream mapping carries more entries (Sunrise, Midnight, …); those
/// stay accessible through [`PrayerTimings::get_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
pub enum Prayer {
    Imsak,
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// One day's timings: prayer name -> time-of-day string, upstream order.
///
/// Replaced atomically on each successful fetch, never partially updated.
/// Values are kept verbatim (AlAdhan may append a timezone suffix such as
/// `"18:02 (EET)"`); [`PrayerTimings::clock_time`] strips it when a parsed
/// clock time is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimings(IndexMap<String, String>);

impl PrayerTimings {
    pub fn new(timings: IndexMap<String, String>) -> Self {
        Self(timings)
    }

    /// Raw upstream value for a prayer, verbatim.
    pub fn get(&self, prayer: Prayer) -> Option<&str> {
        self.get_raw(prayer.as_ref())
    }

    /// Raw upstream value by name (covers entries outside [`Prayer`]).
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parsed clock time for a prayer, timezone suffix stripped.
    pub fn clock_time(&self, prayer: Prayer) -> Option<NaiveTime> {
        let raw = self.get(prayer)?;
        parse_clock_time(raw)
    }

    /// Iterate entries in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, String>> for PrayerTimings {
    fn from(timings: IndexMap<String, String>) -> Self {
        Self(timings)
    }
}

/// Parse `"HH:MM"` out of an upstream value, tolerating a trailing
/// timezone annotation (`"18:02 (EET)"`).
pub(crate) fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let clock = raw.split_whitespace().next()?;
    NaiveTime::parse_from_str(clock, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M:%S"))
        .ok()
}
