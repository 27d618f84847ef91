// Overpass spatial-query API surface.

mod client;
pub mod types;

pub use client::OverpassClient;
