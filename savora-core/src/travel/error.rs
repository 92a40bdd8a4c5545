use thiserror::Error;

/// Errors from [`crate::DurationProvider::durations`].
///
/// Only transport- and API-level failures are errors; an individual place
/// with no route is reported through the fallback duration instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The request never completed (I/O failure, timeout, DNS, ...).
    #[error("duration request failed: {message}")]
    Transport {
        /// Human-readable description from the underlying client.
        message: String,
    },
    /// The service rejected the request for exceeding its rate limit.
    #[error("duration service rate limit exceeded")]
    RateLimited,
    /// The service rejected the request as malformed.
    #[error("duration request was rejected: {message}")]
    InvalidRequest {
        /// The service's rejection reason.
        message: String,
    },
}
