// hilal-api: async Rust clients for the upstream services behind the
// Ramadan timings app (AlAdhan, Nominatim, Overpass).

pub mod aladhan;
pub mod error;
pub mod nominatim;
pub mod overpass;
pub mod transport;

pub use aladhan::AladhanClient;
pub use error::Error;
pub use nominatim::NominatimClient;
pub use overpass::OverpassClient;
pub use transport::TransportConfig;
