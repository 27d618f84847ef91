// ── Geolocation seam ──
//
// Stand-in for the browser geolocation capability: the host environment
// (platform location service, GPS bridge, fixed test coordinate) supplies
// an implementation. Denied and unavailable are distinct failures, and
// both are distinct from any upstream places-query failure.

use thiserror::Error;

use crate::model::Coordinate;

/// Why a position could not be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocateError {
    /// The environment has no location capability at all.
    #[error("geolocation is not supported in this environment")]
    Unsupported,

    /// The user (or platform policy) refused the position request.
    #[error("location permission denied")]
    PermissionDenied,

    /// The capability exists but produced no fix.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Produces the device's current position.
pub trait LocatePosition: Send + Sync {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, LocateError>> + Send;
}

/// Fixed-coordinate provider, mostly useful in tests and headless runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl LocatePosition for FixedPosition {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        Ok(self.0)
    }
}

/// Provider for environments with no location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocatePosition for NoLocation {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        Err(LocateError::Unsupported)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_position_returns_its_coordinate() {
        let provider = FixedPosition(Coordinate {
            lat: 51.5,
            lon: -0.12,
        });
        let coord = provider.current_position().await.unwrap();
        assert!((coord.lat - 51.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn no_location_is_unsupported() {
        assert_eq!(
            NoLocation.current_position().await,
            Err(LocateError::Unsupported)
        );
    }
}
