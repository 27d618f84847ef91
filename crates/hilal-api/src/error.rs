use thiserror::Error;

/// Top-level error type for the `hilal-api` crate.
///
/// Covers every failure mode across the three upstream surfaces:
/// transport, non-success responses (HTTP status or AlAdhan envelope code),
/// and payload decoding. `hilal-core` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Upstream ────────────────────────────────────────────────────
    /// Non-success response from an upstream service.
    ///
    /// `status` is the HTTP status, except for AlAdhan envelope errors
    /// where the envelope `code` is authoritative (the service reports
    /// failures inside an HTTP 200 body).
    #[error("Upstream error ({service}, {status}): {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the upstream rejected the request outright
    /// (bad parameters, unknown city) rather than failing to serve it.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if (400..500).contains(status))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn upstream_4xx_is_rejection() {
        let err = Error::Upstream {
            service: "aladhan",
            status: 404,
            message: "Invalid city".into(),
        };
        assert!(err.is_rejection());
        assert!(!err.is_transient());
    }

    #[test]
    fn upstream_5xx_is_not_rejection() {
        let err = Error::Upstream {
            service: "overpass",
            status: 504,
            message: "Gateway Timeout".into(),
        };
        assert!(!err.is_rejection());
    }

    #[test]
    fn timeout_is_transient() {
        assert!(Error::Timeout { timeout_secs: 30 }.is_transient());
    }
}
