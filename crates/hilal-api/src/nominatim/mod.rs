// Nominatim geocoding API surface.

mod client;
pub mod types;

pub use client::NominatimClient;
