//! Domain model and orchestration layer between `hilal-api` and UI
//! consumers.
//!
//! This crate owns the business logic and reactive state for the hilal
//! workspace:
//!
//! - **[`Orchestrator`]** — Central facade holding the resolved location,
//!   selected date, and fetched results. Operations (`search`, `shift_day`,
//!   `load_calendar`, `find_masjids`) fetch first and then apply a pure
//!   [`AppState`] transition, so failures never leave partial state.
//!   Snapshots are published through a `tokio::sync::watch` channel for
//!   whatever renders them.
//!
//! - **[`CityResolver`]** — Debounced free-text autocomplete over a
//!   geocoding source. A request generation counter guarantees at most one
//!   in-flight lookup's result is ever applied; failures degrade silently.
//!
//! - **[`Countdown`]** — Scoped 1-second timer resource counting down to
//!   Iftar, torn down deterministically when dropped.
//!
//! - **Domain model** ([`model`]) — `Location`, `PrayerTimings` (upstream
//!   order preserved), `CalendarEntry`, `Masjid`, with conversions from the
//!   raw `hilal-api` types.
//!
//! - **[`AppConfig`]** — Endpoint URLs and tuning knobs, layered from
//!   defaults, a TOML file, and `HILAL_`-prefixed environment variables.

pub mod config;
pub mod countdown;
pub mod error;
pub mod geo;
pub mod locate;
pub mod model;
pub mod orchestrator;
pub mod resolver;
pub mod state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::AppConfig;
pub use countdown::{Countdown, CountdownDisplay};
pub use error::CoreError;
pub use locate::{FixedPosition, LocateError, LocatePosition, NoLocation};
pub use orchestrator::Orchestrator;
pub use resolver::{CityResolver, NominatimSource, SuggestionSource, SuggestionState};
pub use state::AppState;

// Re-export model types at the crate root for ergonomics.
pub use model::{CalendarEntry, CityCandidate, Coordinate, Location, Masjid, Prayer, PrayerTimings};
