// Canonical domain types, one file per entity.

pub mod calendar;
pub mod location;
pub mod masjid;
pub mod timings;

pub use calendar::CalendarEntry;
pub use location::{CityCandidate, Coordinate, Location};
pub use masjid::Masjid;
pub use timings::{Prayer, PrayerTimings};
