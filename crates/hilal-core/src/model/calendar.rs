// ── Ramadan calendar domain type ──

use serde::{Deserialize, Serialize};

use hilal_api::aladhan::types::DayEntry;

use super::timings::Prayer;

/// One day of the Ramadan schedule, normalized from the upstream entry.
///
/// Entries are kept in upstream order; no client-side re-sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Zero-padded `DD-MM-YYYY`.
    pub gregorian_date: String,
    /// Zero-padded `DD-MM-YYYY` in the Hijri calendar.
    pub hijri_date: String,
    /// Sehar time (missing upstream entries surface as an empty string).
    pub fajr: String,
    /// Iftar time.
    pub maghrib: String,
}

impl From<DayEntry> for CalendarEntry {
    fn from(entry: DayEntry) -> Self {
        let timing = |prayer: Prayer| {
            entry
                .timings
                .get(prayer.as_ref())
                .cloned()
                .unwrap_or_default()
        };
        Self {
            fajr: timing(Prayer::Fajr),
            maghrib: timing(Prayer::Maghrib),
            gregorian_date: entry.date.gregorian.date,
            hijri_date: entry.date.hijri.date,
        }
    }
}
