use thiserror::Error;

use crate::locate::LocateError;

/// Top-level error type for the `hilal-core` crate.
///
/// Every externally triggered operation owns its own error surface in the
/// state snapshot; this enum is what the operations themselves return
/// before the orchestrator folds it into a user-facing message.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Failure from one of the upstream API clients.
    #[error(transparent)]
    Api(#[from] hilal_api::Error),

    /// Geolocation could not produce a position.
    #[error(transparent)]
    Geolocation(#[from] LocateError),

    /// The operation needs state that is not present yet (e.g. a calendar
    /// load before any successful search).
    #[error("operation requires {missing} to be resolved first")]
    MissingState { missing: &'static str },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Returns `true` for the soft precondition failures that callers
    /// treat as a no-op rather than an error to surface.
    pub fn is_missing_state(&self) -> bool {
        matches!(self, Self::MissingState { .. })
    }
}
